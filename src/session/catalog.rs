// Trip catalog holding the full candidate pool of a session

use chrono::{DateTime, Utc};
use log::info;
use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::{Trip, TripId};

/// Full trip pool for the active session, ordered by id
#[derive(Debug, Clone, Default)]
pub struct TripCatalog {
    trips: Vec<Trip>,

    /// When the pool was last replaced
    loaded_at: Option<DateTime<Utc>>,
}

impl TripCatalog {
    /// Creates an empty, never-loaded catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire pool.
    ///
    /// Every trip is validated and ids must be unique. On error the previous
    /// pool is left untouched.
    pub fn load(&mut self, trips: Vec<Trip>) -> Result<()> {
        let mut seen: HashSet<TripId> = HashSet::with_capacity(trips.len());
        for trip in &trips {
            trip.validate()?;
            if !seen.insert(trip.id) {
                return Err(Error::validation(format!("duplicate trip id {}", trip.id)));
            }
        }

        let mut trips = trips;
        trips.sort_by_key(|trip| trip.id);

        info!("trip catalog loaded with {} trips", trips.len());
        self.trips = trips;
        self.loaded_at = Some(Utc::now());
        Ok(())
    }

    /// Read-only snapshot of the pool, ordered by id
    pub fn all(&self) -> &[Trip] {
        &self.trips
    }

    pub fn get(&self, id: TripId) -> Option<&Trip> {
        self.trips
            .binary_search_by_key(&id, |trip| trip.id)
            .ok()
            .map(|index| &self.trips[index])
    }

    pub fn contains(&self, id: TripId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }
}
