// Property tests for filtering, optimizing and chaining
use chrono::NaiveDate;
use proptest::prelude::*;
use std::collections::HashSet;
use trip_scenarios::algorithms::exact::ExactSelectionSolver;
use trip_scenarios::algorithms::filter::filter_trips;
use trip_scenarios::algorithms::optimizer::{objective_of, optimize};
use trip_scenarios::models::{ExclusionSet, FilterCriteria, Trip, TripId};
use trip_scenarios::Session;

fn arb_trips() -> impl Strategy<Value = Vec<Trip>> {
    prop::collection::vec((50u32..300, 1u32..10, 100u32..500, 0u32..3), 0..40).prop_map(
        |rows| {
            let start = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
            rows.into_iter()
                .enumerate()
                .map(|(i, (distance, duration, savings, days))| {
                    let trip_start = start + chrono::Duration::days(i as i64);
                    let trip_end = trip_start + chrono::Duration::days(days as i64);
                    Trip::new(
                        i as TripId + 1,
                        trip_start,
                        trip_end,
                        distance as f64,
                        duration as f64,
                        savings as f64,
                    )
                })
                .collect()
        },
    )
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (0u32..500, 0u32..320, 0u32..12).prop_map(|(s, d, t)| {
        FilterCriteria::new(s as f64, d as f64, t as f64)
    })
}

fn arb_exclusions() -> impl Strategy<Value = ExclusionSet> {
    prop::collection::btree_set(1u32..45, 0..10).prop_map(|ids| ids.into_iter().collect())
}

/// Best objective over every subset of at most `bound` trips
fn brute_force_best(trips: &[Trip], bound: usize) -> f64 {
    let mut best = 0.0_f64;
    for mask in 0u32..(1 << trips.len()) {
        if mask.count_ones() as usize > bound {
            continue;
        }
        let chosen = trips
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, trip)| trip);
        best = best.max(objective_of(chosen));
    }
    best
}

proptest! {
    #[test]
    fn filter_output_is_ordered_admitted_subset(
        trips in arb_trips(),
        criteria in arb_criteria(),
        exclusions in arb_exclusions(),
    ) {
        let kept = filter_trips(&trips, &criteria, &exclusions);

        let mut cursor = trips.iter();
        for trip in &kept {
            prop_assert!(cursor.any(|t| t == trip), "order not preserved");
            prop_assert!(criteria.admits(trip));
            prop_assert!(!exclusions.contains(trip.id));
        }

        let kept_ids: HashSet<TripId> = kept.iter().map(|t| t.id).collect();
        for trip in &trips {
            if criteria.admits(trip) && !exclusions.contains(trip.id) {
                prop_assert!(kept_ids.contains(&trip.id));
            }
        }
    }

    #[test]
    fn optimize_respects_bound_and_objective(trips in arb_trips(), bound in 0usize..4) {
        let solver = ExactSelectionSolver::new();
        let result = optimize(&trips, bound, &solver);

        prop_assert!(result.selected_count() <= bound);
        let selected: Vec<&Trip> = trips
            .iter()
            .filter(|t| result.is_selected(t.id))
            .collect();
        prop_assert_eq!(result.objective_value, objective_of(selected));

        let again = optimize(&trips, bound, &solver);
        prop_assert_eq!(result.objective_value, again.objective_value);
    }

    #[test]
    fn optimize_matches_exhaustive_search(
        trips in arb_trips().prop_map(|t| t.into_iter().take(10).collect::<Vec<_>>()),
        bound in 0usize..4,
    ) {
        let result = optimize(&trips, bound, &ExactSelectionSolver::new());
        let best = brute_force_best(&trips, bound);
        prop_assert!((result.objective_value - best).abs() < 1e-9);
    }

    #[test]
    fn chain_only_grows_and_exclusions_cascade(
        trips in arb_trips(),
        runs in prop::collection::vec((arb_criteria(), arb_exclusions()), 1..6),
    ) {
        let mut session = Session::new();
        session.load_catalog(trips).unwrap();

        for (criteria, new_exclusions) in runs {
            // Unknown ids are rejected; keep the ones the catalog holds
            let new_exclusions: ExclusionSet = new_exclusions
                .iter()
                .filter(|id| session.catalog().contains(*id))
                .collect();
            let before: Vec<_> = session.chain().iter().cloned().collect();
            let parent = session.active_scenario().map(|s| s.exclusions().clone());

            session.run_scenario(&criteria, &new_exclusions).unwrap();

            let after: Vec<_> = session.chain().iter().cloned().collect();
            prop_assert_eq!(after.len(), before.len() + 1);
            prop_assert_eq!(&after[1..], &before[..]);
            prop_assert!(after[0].exclusions().is_superset(&new_exclusions));
            if let Some(parent) = parent {
                prop_assert!(after[0].exclusions().is_superset(&parent));
            }
        }
    }
}
