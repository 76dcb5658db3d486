// Selection result produced by the optimizer

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::algorithms::SolverFailure;
use crate::error::{Error, Result};
use crate::models::TripId;

/// Outcome status reported by a solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    Timeout,
}

impl SolveStatus {
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolveStatus::Optimal)
    }
}

impl From<&SolverFailure> for SolveStatus {
    fn from(failure: &SolverFailure) -> Self {
        match failure {
            SolverFailure::Infeasible => SolveStatus::Infeasible,
            SolverFailure::Unbounded => SolveStatus::Unbounded,
            SolverFailure::Timeout { .. } => SolveStatus::Timeout,
        }
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SolveStatus::Optimal => "Optimal",
            SolveStatus::Infeasible => "Infeasible",
            SolveStatus::Unbounded => "Unbounded",
            SolveStatus::Timeout => "Timeout",
        };
        f.write_str(label)
    }
}

/// Decision for one candidate trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripSelection {
    pub trip_id: TripId,
    pub selected: bool,
}

/// Per-candidate decisions plus the solver status and objective value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// One entry per candidate, in candidate order
    pub decisions: Vec<TripSelection>,

    pub status: SolveStatus,

    /// Net benefit of the selected trips
    pub objective_value: f64,

    /// Set when the solve failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<SolverFailure>,
}

impl SelectionResult {
    /// Optimal result with no candidates
    pub fn empty() -> Self {
        Self {
            decisions: Vec::new(),
            status: SolveStatus::Optimal,
            objective_value: 0.0,
            failure: None,
        }
    }

    /// Result for a failed solve: every candidate is left unselected
    pub fn failed(
        candidate_ids: impl IntoIterator<Item = TripId>,
        failure: &SolverFailure,
    ) -> Self {
        Self {
            decisions: candidate_ids
                .into_iter()
                .map(|trip_id| TripSelection {
                    trip_id,
                    selected: false,
                })
                .collect(),
            status: SolveStatus::from(failure),
            objective_value: 0.0,
            failure: Some(failure.clone()),
        }
    }

    /// Ids of the selected trips, in candidate order
    pub fn selected_ids(&self) -> Vec<TripId> {
        self.decisions
            .iter()
            .filter(|d| d.selected)
            .map(|d| d.trip_id)
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.decisions.iter().filter(|d| d.selected).count()
    }

    pub fn is_selected(&self, trip_id: TripId) -> bool {
        self.decisions
            .iter()
            .any(|d| d.trip_id == trip_id && d.selected)
    }

    /// Turns a failed status into `Error::SolverFailure`
    pub fn require_optimal(&self) -> Result<()> {
        match &self.failure {
            None => Ok(()),
            Some(failure) => Err(Error::SolverFailure(failure.clone())),
        }
    }
}
