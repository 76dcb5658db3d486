// Exact solver for cardinality-bounded 0/1 selection

use rayon::prelude::*;
use std::cmp::Ordering;
use std::time::{Duration, Instant};

use crate::algorithms::{BinarySelectionSolver, SelectionItem, SolverFailure, SolverSolution};

/// Exact solver for a separable objective under a single cardinality bound.
///
/// With no other constraint coupling the variables, an optimal assignment
/// takes the items with the largest strictly positive net contributions, up
/// to the bound. Ties are broken by input position so repeated solves return
/// the same assignment.
#[derive(Debug, Clone, Default)]
pub struct ExactSelectionSolver {
    /// Wall-clock budget; a zero budget always times out
    time_budget: Option<Duration>,
}

impl ExactSelectionSolver {
    /// Creates a solver without a time budget
    pub fn new() -> Self {
        Self { time_budget: None }
    }

    /// Creates a solver that reports `Timeout` once the budget is used up
    pub fn with_time_budget(time_budget: Duration) -> Self {
        Self {
            time_budget: Some(time_budget),
        }
    }

    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget
    }

    fn check_budget(&self, started: Instant) -> Result<(), SolverFailure> {
        match self.time_budget {
            Some(budget) if started.elapsed() >= budget => Err(SolverFailure::Timeout {
                budget_ms: budget.as_millis() as u64,
            }),
            _ => Ok(()),
        }
    }
}

/// Higher net first, then earlier position
fn rank_order(a: &(usize, f64), b: &(usize, f64)) -> Ordering {
    b.1.partial_cmp(&a.1)
        .unwrap_or(Ordering::Equal)
        .then(a.0.cmp(&b.0))
}

impl BinarySelectionSolver for ExactSelectionSolver {
    fn solve(
        &self,
        items: &[SelectionItem],
        cardinality_bound: usize,
    ) -> Result<SolverSolution, SolverFailure> {
        let started = Instant::now();

        if items.par_iter().any(|item| item.net().is_nan()) {
            return Err(SolverFailure::Infeasible);
        }
        if items.par_iter().any(|item| item.net() == f64::INFINITY) {
            return Err(SolverFailure::Unbounded);
        }

        // Only items that improve the objective are worth selecting
        let mut ranked: Vec<(usize, f64)> = items
            .par_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let net = item.net();
                (net > 0.0).then_some((index, net))
            })
            .collect();
        ranked.par_sort_unstable_by(rank_order);
        ranked.truncate(cardinality_bound);

        self.check_budget(started)?;

        let mut selected = vec![false; items.len()];
        for &(index, _) in &ranked {
            selected[index] = true;
        }

        let objective: f64 = items
            .iter()
            .zip(&selected)
            .filter(|(_, chosen)| **chosen)
            .map(|(item, _)| item.net())
            .sum();
        // Finite nets can still overflow once summed
        if !objective.is_finite() {
            return Err(SolverFailure::Unbounded);
        }

        Ok(SolverSolution {
            selected,
            objective,
        })
    }
}
