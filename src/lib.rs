// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod utils;

// Re-exports for convenience
pub use algorithms::exact::ExactSelectionSolver;
pub use config::SessionConfig;
pub use error::{Error, Result};
pub use models::{ExclusionSet, FilterCriteria, Scenario, SelectionResult, SolveStatus, Trip};
pub use session::Session;
