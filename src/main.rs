use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use trip_scenarios::models::{FilterCriteria, Scenario, TripId};
use trip_scenarios::utils::trip_io::read_trips_json;
use trip_scenarios::{Session, SessionConfig};

#[derive(Debug, Parser)]
#[command(name = "trip_scenarios")]
#[command(about = "Select the best trips and chain what-if scenarios over exclusions")]
struct Args {
    /// JSON file holding the trip history
    #[arg(long)]
    trips: PathBuf,

    /// Optional TOML session configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum savings (overrides the configured default)
    #[arg(long)]
    min_savings: Option<f64>,

    /// Maximum distance (overrides the configured default)
    #[arg(long)]
    max_distance: Option<f64>,

    /// Maximum duration (overrides the configured default)
    #[arg(long)]
    max_duration: Option<f64>,

    /// Trip ids to exclude in a second, chained scenario (comma-separated)
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<TripId>,

    /// Print the final scenario as JSON
    #[arg(long)]
    export: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SessionConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SessionConfig::default(),
    };

    let defaults = config.default_criteria;
    let criteria = FilterCriteria::new(
        args.min_savings.unwrap_or(defaults.min_savings),
        args.max_distance.unwrap_or(defaults.max_distance),
        args.max_duration.unwrap_or(defaults.max_duration),
    );

    let mut session = Session::with_config(config)?;

    let trips = read_trips_json(&args.trips)
        .with_context(|| format!("reading trips from {}", args.trips.display()))?;
    session.load_catalog(trips)?;
    println!("Loaded {} trips", session.get_catalog().len());

    // First scenario from the full catalog
    let start_time = Instant::now();
    let mut title = session.run_staged_scenario(&criteria)?;
    println!("{} (solved in {:.2?})", title, start_time.elapsed());
    print_scenario(session.get_scenario(&title)?);

    // Optionally chain a second scenario with extra exclusions
    if !args.exclude.is_empty() {
        session.stage_exclusions(Some(title.as_str()), args.exclude.iter().copied())?;
        let start_time = Instant::now();
        title = session.run_staged_scenario(&criteria)?;
        println!("{} (solved in {:.2?})", title, start_time.elapsed());
        print_scenario(session.get_scenario(&title)?);
    }

    println!("Scenario history:");
    for summary in session.list_scenarios() {
        println!(
            "  {}: {} (objective {:.2})",
            summary.title, summary.status, summary.objective_value
        );
    }

    if args.export {
        println!("{}", session.export_scenario_json(&title)?);
    }

    Ok(())
}

fn print_scenario(scenario: &Scenario) {
    println!("------------------------------------------");
    if let Some(parent) = scenario.parent() {
        println!("  Derived from: {}", parent);
    }
    println!("  Status: {}", scenario.status());
    println!("  Candidates: {}", scenario.candidates().len());
    println!(
        "  Excluded trips: {:?}",
        scenario.exclusions().iter().collect::<Vec<_>>()
    );

    let selected = scenario.selected_trips();
    if selected.is_empty() {
        println!("  No trips selected");
    } else {
        println!("  Selected trips:");
        for trip in selected {
            println!(
                "    Trip {} ({} to {}): savings {:.2}, distance {:.2}, duration {:.2}",
                trip.id, trip.start_date, trip.end_date, trip.savings, trip.distance, trip.duration
            );
        }
    }
    println!("  Net benefit: {:.2}", scenario.objective_value());
    println!();
}
