// Trip model representing a candidate transaction

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Distance, Duration, Savings, TripId};

/// Represents a trip that can be selected by the optimizer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: TripId,

    /// First day of the trip
    pub start_date: NaiveDate,

    /// Last day of the trip
    pub end_date: NaiveDate,

    /// Distance travelled
    pub distance: Distance,

    /// Time spent on the trip
    pub duration: Duration,

    /// Savings gained by taking the trip
    pub savings: Savings,
}

impl Trip {
    /// Creates a new trip with the given attributes
    pub fn new(
        id: TripId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        distance: Distance,
        duration: Duration,
        savings: Savings,
    ) -> Self {
        Self {
            id,
            start_date,
            end_date,
            distance,
            duration,
            savings,
        }
    }

    /// Net contribution of this trip to the selection objective
    pub fn net_benefit(&self) -> f64 {
        self.savings - self.distance - self.duration
    }

    /// Checks that every numeric attribute is finite and non-negative and
    /// that the trip does not end before it starts
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("distance", self.distance),
            ("duration", self.duration),
            ("savings", self.savings),
        ] {
            if !value.is_finite() {
                return Err(Error::validation(format!(
                    "trip {}: {} must be finite (got {})",
                    self.id, field, value
                )));
            }
            if value < 0.0 {
                return Err(Error::validation(format!(
                    "trip {}: {} must be non-negative (got {})",
                    self.id, field, value
                )));
            }
        }

        if self.end_date < self.start_date {
            return Err(Error::validation(format!(
                "trip {}: end date {} is before start date {}",
                self.id, self.end_date, self.start_date
            )));
        }

        Ok(())
    }
}
