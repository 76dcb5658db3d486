pub mod exact;
pub mod filter;
pub mod optimizer;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One binary decision variable of a selection problem
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionItem {
    /// Objective gain when the item is selected
    pub value: f64,

    /// Objective loss when the item is selected
    pub cost: f64,
}

impl SelectionItem {
    pub fn new(value: f64, cost: f64) -> Self {
        Self { value, cost }
    }

    /// Objective coefficient of the item's decision variable
    pub fn net(&self) -> f64 {
        self.value - self.cost
    }
}

/// Assignment returned by a successful solve
#[derive(Debug, Clone, PartialEq)]
pub struct SolverSolution {
    /// One flag per input item, in input order
    pub selected: Vec<bool>,

    pub objective: f64,
}

/// Non-optimal solver outcomes
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverFailure {
    #[error("problem is infeasible")]
    Infeasible,

    #[error("problem is unbounded")]
    Unbounded,

    #[error("solve exceeded its {budget_ms} ms budget")]
    Timeout { budget_ms: u64 },
}

/// Trait for 0/1 selection solvers
pub trait BinarySelectionSolver {
    /// Maximize the summed net contribution of the selected items subject to
    /// selecting at most `cardinality_bound` of them
    fn solve(
        &self,
        items: &[SelectionItem],
        cardinality_bound: usize,
    ) -> Result<SolverSolution, SolverFailure>;
}
