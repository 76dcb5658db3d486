// Scenario model: immutable snapshot of one optimizer run

use serde::{Deserialize, Serialize};

use crate::models::{ExclusionSet, FilterCriteria, SelectionResult, SolveStatus, Trip};

/// One solved scenario in the chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique title, e.g. "Scenario 3"
    title: String,

    /// Title of the scenario this one was derived from, if any
    parent: Option<String>,

    /// Thresholds used for this run
    criteria: FilterCriteria,

    /// Trips that passed filtering, in filter order
    candidates: Vec<Trip>,

    /// Cumulative exclusions (parent's plus newly staged)
    exclusions: ExclusionSet,

    selection: SelectionResult,
}

/// Listing row for a scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub title: String,
    pub status: SolveStatus,
    pub objective_value: f64,
}

impl Scenario {
    pub(crate) fn new(
        title: String,
        parent: Option<String>,
        criteria: FilterCriteria,
        candidates: Vec<Trip>,
        exclusions: ExclusionSet,
        selection: SelectionResult,
    ) -> Self {
        Self {
            title,
            parent,
            criteria,
            candidates,
            exclusions,
            selection,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn candidates(&self) -> &[Trip] {
        &self.candidates
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    pub fn selection(&self) -> &SelectionResult {
        &self.selection
    }

    pub fn status(&self) -> SolveStatus {
        self.selection.status
    }

    pub fn objective_value(&self) -> f64 {
        self.selection.objective_value
    }

    /// Candidate trips the optimizer selected
    pub fn selected_trips(&self) -> Vec<&Trip> {
        self.candidates
            .iter()
            .filter(|trip| self.selection.is_selected(trip.id))
            .collect()
    }

    /// Looks up the excluded trips in the given pool.
    /// Ids no longer present in the pool are skipped.
    pub fn excluded_trips<'a>(&self, pool: &'a [Trip]) -> Vec<&'a Trip> {
        pool.iter()
            .filter(|trip| self.exclusions.contains(trip.id))
            .collect()
    }

    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            title: self.title.clone(),
            status: self.status(),
            objective_value: self.objective_value(),
        }
    }
}
