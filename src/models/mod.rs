// Models module - exports all model types

mod criteria;
mod exclusion;
mod scenario;
mod selection;
mod trip;

// Re-export model types
pub use self::criteria::FilterCriteria;
pub use self::exclusion::ExclusionSet;
pub use self::scenario::{Scenario, ScenarioSummary};
pub use self::selection::{SelectionResult, SolveStatus, TripSelection};
pub use self::trip::Trip;

// Common type aliases for improved code readability
pub type TripId = u32;
pub type Distance = f64;
pub type Duration = f64;
pub type Savings = f64;
