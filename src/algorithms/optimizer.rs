// Trip selection optimizer built on a BinarySelectionSolver

use log::{debug, warn};

use crate::algorithms::{BinarySelectionSolver, SelectionItem, SolverFailure};
use crate::models::{SelectionResult, SolveStatus, Trip, TripSelection};

/// Default cardinality bound on the number of selected trips
pub const DEFAULT_MAX_SELECTED: usize = 2;

/// Objective value of a set of trips:
/// `sum(savings) - sum(distance) - sum(duration)`
pub fn objective_of<'a, I>(trips: I) -> f64
where
    I: IntoIterator<Item = &'a Trip>,
{
    let (savings, distance, duration) = trips
        .into_iter()
        .fold((0.0, 0.0, 0.0), |(s, d, t), trip| {
            (s + trip.savings, d + trip.distance, t + trip.duration)
        });
    savings - distance - duration
}

/// Selects at most `max_selected` candidates maximizing net savings.
///
/// A failed solve is reported through the result's status with every
/// candidate left unselected.
pub fn optimize<S>(candidates: &[Trip], max_selected: usize, solver: &S) -> SelectionResult
where
    S: BinarySelectionSolver + ?Sized,
{
    if candidates.is_empty() {
        return SelectionResult::empty();
    }

    let items: Vec<SelectionItem> = candidates
        .iter()
        .map(|trip| SelectionItem::new(trip.savings, trip.distance + trip.duration))
        .collect();

    let solution = match solver.solve(&items, max_selected) {
        Ok(solution) => solution,
        Err(failure) => {
            warn!(
                "selection over {} candidates failed: {}",
                candidates.len(),
                failure
            );
            return SelectionResult::failed(candidates.iter().map(|t| t.id), &failure);
        }
    };
    debug_assert_eq!(solution.selected.len(), candidates.len());

    let decisions: Vec<TripSelection> = candidates
        .iter()
        .zip(&solution.selected)
        .map(|(trip, &selected)| TripSelection {
            trip_id: trip.id,
            selected,
        })
        .collect();

    let objective_value = objective_of(
        candidates
            .iter()
            .zip(&solution.selected)
            .filter(|(_, selected)| **selected)
            .map(|(trip, _)| trip),
    );
    if !objective_value.is_finite() {
        let failure = SolverFailure::Unbounded;
        warn!(
            "objective over {} candidates is not finite: {}",
            candidates.len(),
            failure
        );
        return SelectionResult::failed(candidates.iter().map(|t| t.id), &failure);
    }

    debug!(
        "selected {} of {} candidates, objective {:.2}",
        decisions.iter().filter(|d| d.selected).count(),
        candidates.len(),
        objective_value
    );

    SelectionResult {
        decisions,
        status: SolveStatus::Optimal,
        objective_value,
        failure: None,
    }
}
