// Filter thresholds applied to the trip pool

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Distance, Duration, Savings, Trip};

/// Numeric thresholds a trip must satisfy to become a candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Minimum savings a trip must offer
    pub min_savings: Savings,

    /// Maximum distance a trip may cover; `null` in JSON means unbounded
    #[serde(with = "unbounded_serde")]
    pub max_distance: Distance,

    /// Maximum duration a trip may take; `null` in JSON means unbounded
    #[serde(with = "unbounded_serde")]
    pub max_duration: Duration,
}

mod unbounded_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(limit: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let limit = (*limit != f64::INFINITY).then_some(*limit);
        limit.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let limit = Option::<f64>::deserialize(deserializer)?;
        Ok(limit.unwrap_or(f64::INFINITY))
    }
}

impl FilterCriteria {
    /// Creates criteria with explicit thresholds
    pub fn new(min_savings: Savings, max_distance: Distance, max_duration: Duration) -> Self {
        Self {
            min_savings,
            max_distance,
            max_duration,
        }
    }

    /// Criteria that admit every valid trip
    pub fn permissive() -> Self {
        Self::new(0.0, f64::INFINITY, f64::INFINITY)
    }

    /// Returns true if the trip satisfies all three thresholds
    pub fn admits(&self, trip: &Trip) -> bool {
        trip.savings >= self.min_savings
            && trip.distance <= self.max_distance
            && trip.duration <= self.max_duration
    }

    /// Rejects negative or NaN thresholds. Infinite maxima are allowed.
    pub fn validate(&self) -> Result<()> {
        if !self.min_savings.is_finite() || self.min_savings < 0.0 {
            return Err(Error::validation(format!(
                "min_savings must be a finite non-negative number (got {})",
                self.min_savings
            )));
        }
        for (field, value) in [
            ("max_distance", self.max_distance),
            ("max_duration", self.max_duration),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(Error::validation(format!(
                    "{} must be non-negative (got {})",
                    field, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::permissive()
    }
}
