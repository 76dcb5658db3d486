// Exclusion set of trip ids

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::TripId;

/// Set of trip ids removed from the candidate pool.
///
/// Backed by an ordered set so scenarios compare and serialize
/// deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionSet {
    ids: BTreeSet<TripId>,
}

impl ExclusionSet {
    /// Creates an empty exclusion set
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a trip id, returning true if it was not already excluded
    pub fn insert(&mut self, id: TripId) -> bool {
        self.ids.insert(id)
    }

    pub fn contains(&self, id: TripId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates the excluded ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = TripId> + '_ {
        self.ids.iter().copied()
    }

    /// Cascading union used when a child scenario inherits from its parent
    pub fn union(&self, other: &ExclusionSet) -> ExclusionSet {
        Self {
            ids: self.ids.union(&other.ids).copied().collect(),
        }
    }

    pub fn is_superset(&self, other: &ExclusionSet) -> bool {
        self.ids.is_superset(&other.ids)
    }
}

impl FromIterator<TripId> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = TripId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
