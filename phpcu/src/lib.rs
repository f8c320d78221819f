pub mod cli;
pub mod detector;
pub mod logging;
pub mod packagist;
pub mod parsers;
pub mod scanner;
pub mod updater;

// Re-export core types for convenience
pub use check_updates_core::{
    CheckError, Constraint, Dependency, ScanReport, TableRenderer, UpdateCandidate, UpdateLevel,
    UpdatePlan, UpdatePlanner, UpdateSeverity, Version,
};
