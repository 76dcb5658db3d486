// Append-only scenario chain with an active pointer

use log::error;

use crate::error::{Error, Result};
use crate::models::{Scenario, ScenarioSummary};

/// Ordered history of scenarios in a session.
///
/// Scenarios are stored oldest first and exposed newest first. Entries are
/// never reordered, replaced or removed.
#[derive(Debug, Clone, Default)]
pub struct ScenarioChain {
    scenarios: Vec<Scenario>,

    /// Index of the active scenario; `None` means no scenario yet
    active: Option<usize>,
}

impl ScenarioChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Title the next appended scenario must carry
    pub fn next_title(&self) -> String {
        format!("Scenario {}", self.scenarios.len() + 1)
    }

    /// Appends a scenario at the head of the chain and makes it active
    pub(crate) fn push(&mut self, scenario: Scenario) -> Result<&Scenario> {
        let expected = self.next_title();
        if scenario.title() != expected || self.position(scenario.title()).is_some() {
            error!(
                "refusing to append scenario {:?}, expected {:?}",
                scenario.title(),
                expected
            );
            return Err(Error::state_invariant(format!(
                "scenario title {:?} does not match next title {:?}",
                scenario.title(),
                expected
            )));
        }

        self.scenarios.push(scenario);
        let index = self.scenarios.len() - 1;
        self.active = Some(index);
        Ok(&self.scenarios[index])
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.scenarios.iter().position(|s| s.title() == title)
    }

    pub fn get(&self, title: &str) -> Option<&Scenario> {
        self.position(title).map(|index| &self.scenarios[index])
    }

    /// Moves the active pointer. Unknown titles leave it unchanged.
    pub fn select_active(&mut self, title: &str) -> Result<()> {
        let index = self.position(title).ok_or_else(|| Error::not_found(title))?;
        self.active = Some(index);
        Ok(())
    }

    pub fn active(&self) -> Option<&Scenario> {
        self.active.map(|index| &self.scenarios[index])
    }

    pub fn active_title(&self) -> Option<&str> {
        self.active().map(Scenario::title)
    }

    /// Iterates scenarios, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter().rev()
    }

    /// Title, status and objective of every scenario, most recent first
    pub fn summaries(&self) -> Vec<ScenarioSummary> {
        self.iter().map(Scenario::summary).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExclusionSet, FilterCriteria, SelectionResult};

    fn scenario(title: &str) -> Scenario {
        Scenario::new(
            title.to_string(),
            None,
            FilterCriteria::default(),
            Vec::new(),
            ExclusionSet::new(),
            SelectionResult::empty(),
        )
    }

    #[test]
    fn test_push_orders_newest_first_and_activates() {
        let mut chain = ScenarioChain::new();
        assert!(chain.active().is_none());

        chain.push(scenario("Scenario 1")).unwrap();
        chain.push(scenario("Scenario 2")).unwrap();

        let titles: Vec<_> = chain.iter().map(|s| s.title().to_string()).collect();
        assert_eq!(titles, vec!["Scenario 2", "Scenario 1"]);
        assert_eq!(chain.active_title(), Some("Scenario 2"));
        assert_eq!(chain.next_title(), "Scenario 3");
    }

    #[test]
    fn test_push_rejects_out_of_sequence_title() {
        let mut chain = ScenarioChain::new();
        chain.push(scenario("Scenario 1")).unwrap();

        let result = chain.push(scenario("Scenario 1"));
        assert!(matches!(result, Err(Error::StateInvariant(_))));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_select_active() {
        let mut chain = ScenarioChain::new();
        chain.push(scenario("Scenario 1")).unwrap();
        chain.push(scenario("Scenario 2")).unwrap();

        chain.select_active("Scenario 1").unwrap();
        assert_eq!(chain.active_title(), Some("Scenario 1"));

        let missing = chain.select_active("Scenario 7");
        assert!(matches!(missing, Err(Error::NotFound { .. })));
        assert_eq!(chain.active_title(), Some("Scenario 1"));
    }

    #[test]
    fn test_summaries() {
        let mut chain = ScenarioChain::new();
        chain.push(scenario("Scenario 1")).unwrap();

        let summaries = chain.summaries();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].title, "Scenario 1");
        assert_eq!(summaries[0].objective_value, 0.0);
    }
}
