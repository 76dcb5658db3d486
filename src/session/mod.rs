//! Session-scoped scenario chain manager.
//!
//! A [`Session`] owns one analyst's trip catalog, scenario chain and staged
//! exclusions. Every mutating entry point either applies fully or returns an
//! error without touching state.

mod catalog;
mod chain;

pub use self::catalog::TripCatalog;
pub use self::chain::ScenarioChain;

use log::{debug, info, warn};
use std::collections::HashMap;

use crate::algorithms::exact::ExactSelectionSolver;
use crate::algorithms::filter::filter_trips;
use crate::algorithms::optimizer::optimize;
use crate::algorithms::BinarySelectionSolver;
use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::models::{ExclusionSet, FilterCriteria, Scenario, ScenarioSummary, Trip, TripId};

/// One analyst's exploration state
#[derive(Debug)]
pub struct Session<S = ExactSelectionSolver> {
    config: SessionConfig,
    catalog: TripCatalog,
    chain: ScenarioChain,

    /// Pending exclusions keyed by scenario title; `None` is the
    /// "no scenario yet" context
    staged: HashMap<Option<String>, ExclusionSet>,

    solver: S,
}

impl Session<ExactSelectionSolver> {
    /// Creates a session with the default configuration
    pub fn new() -> Self {
        let config = SessionConfig::default();
        let solver = ExactSelectionSolver::with_time_budget(config.solver_time_budget());
        Self::with_solver(config, solver)
    }

    /// Creates a session from a validated configuration
    pub fn with_config(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let solver = ExactSelectionSolver::with_time_budget(config.solver_time_budget());
        Ok(Self::with_solver(config, solver))
    }
}

impl Default for Session<ExactSelectionSolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BinarySelectionSolver> Session<S> {
    /// Creates a session backed by a custom solver
    pub fn with_solver(config: SessionConfig, solver: S) -> Self {
        Self {
            config,
            catalog: TripCatalog::new(),
            chain: ScenarioChain::new(),
            staged: HashMap::new(),
            solver,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Replaces the trip pool. Existing scenarios keep their own snapshots.
    pub fn load_catalog(&mut self, trips: Vec<Trip>) -> Result<()> {
        self.catalog.load(trips)
    }

    pub fn catalog(&self) -> &TripCatalog {
        &self.catalog
    }

    /// Current trip pool, ordered by id
    pub fn get_catalog(&self) -> &[Trip] {
        self.catalog.all()
    }

    pub fn chain(&self) -> &ScenarioChain {
        &self.chain
    }

    /// Records the pending exclusions for a scenario context, replacing any
    /// earlier staging for it. The title need not exist yet; ids are then
    /// checked against the active scenario.
    pub fn stage_exclusions<I>(&mut self, title: Option<&str>, trip_ids: I) -> Result<()>
    where
        I: IntoIterator<Item = TripId>,
    {
        let exclusions: ExclusionSet = trip_ids.into_iter().collect();
        let context = title
            .and_then(|title| self.chain.get(title))
            .or_else(|| self.chain.active());
        self.check_known_trips(context, &exclusions)?;

        debug!(
            "staged {} exclusions for {}",
            exclusions.len(),
            title.unwrap_or("no scenario")
        );
        self.staged.insert(title.map(str::to_string), exclusions);
        Ok(())
    }

    /// Pending exclusions for a scenario context
    pub fn staged_exclusions(&self, title: Option<&str>) -> Option<&ExclusionSet> {
        self.staged.get(&title.map(str::to_string))
    }

    /// Filters, optimizes and records a new scenario derived from the active
    /// one (or from the full catalog when no scenario exists yet). Returns
    /// the new scenario's title.
    pub fn run_scenario(
        &mut self,
        criteria: &FilterCriteria,
        new_exclusions: &ExclusionSet,
    ) -> Result<String> {
        criteria.validate()?;

        let parent = self.chain.active();
        let (base, exclusions) = match parent {
            Some(parent) => (parent.candidates(), parent.exclusions().union(new_exclusions)),
            None if self.catalog.is_loaded() => (self.catalog.all(), new_exclusions.clone()),
            None => return Err(Error::CatalogNotLoaded),
        };
        self.check_known_trips(parent, new_exclusions)?;
        let parent_title = parent.map(|p| p.title().to_string());

        let candidates = filter_trips(base, criteria, &exclusions);
        let selection = optimize(&candidates, self.config.max_selected, &self.solver);
        if !selection.status.is_optimal() {
            warn!(
                "recording {} with solver status {}",
                self.chain.next_title(),
                selection.status
            );
        }

        let scenario = Scenario::new(
            self.chain.next_title(),
            parent_title,
            *criteria,
            candidates,
            exclusions,
            selection,
        );
        let recorded = self.chain.push(scenario)?;

        info!(
            "{} recorded: {} candidates, {} excluded, {} selected, objective {:.2} ({})",
            recorded.title(),
            recorded.candidates().len(),
            recorded.exclusions().len(),
            recorded.selection().selected_count(),
            recorded.objective_value(),
            recorded.status()
        );
        Ok(recorded.title().to_string())
    }

    /// Runs a scenario using whatever was staged for the active context
    pub fn run_staged_scenario(&mut self, criteria: &FilterCriteria) -> Result<String> {
        let staged = self
            .staged_exclusions(self.chain.active_title())
            .cloned()
            .unwrap_or_default();
        self.run_scenario(criteria, &staged)
    }

    /// Title, status and objective of every scenario, most recent first
    pub fn list_scenarios(&self) -> Vec<ScenarioSummary> {
        self.chain.summaries()
    }

    pub fn get_scenario(&self, title: &str) -> Result<&Scenario> {
        self.chain.get(title).ok_or_else(|| Error::not_found(title))
    }

    pub fn select_active_scenario(&mut self, title: &str) -> Result<()> {
        self.chain.select_active(title)?;
        debug!("active scenario is now {}", title);
        Ok(())
    }

    pub fn active_scenario(&self) -> Option<&Scenario> {
        self.chain.active()
    }

    /// Every id must be in the current catalog or in the pool the given
    /// scenario was built from, which outlives catalog reloads
    fn check_known_trips(&self, context: Option<&Scenario>, ids: &ExclusionSet) -> Result<()> {
        let known = |id: TripId| {
            self.catalog.contains(id)
                || context.is_some_and(|scenario| {
                    scenario.exclusions().contains(id)
                        || scenario.candidates().iter().any(|trip| trip.id == id)
                })
        };
        match ids.iter().find(|id| !known(*id)) {
            Some(unknown) => Err(Error::validation(format!(
                "cannot exclude unknown trip {}",
                unknown
            ))),
            None => Ok(()),
        }
    }

    /// Pretty-printed JSON snapshot of a scenario
    pub fn export_scenario_json(&self, title: &str) -> Result<String> {
        let scenario = self.get_scenario(title)?;
        Ok(serde_json::to_string_pretty(scenario)?)
    }
}
