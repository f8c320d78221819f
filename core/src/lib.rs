pub mod classifier;
pub mod constraint;
pub mod error;
pub mod output;
pub mod planner;
pub mod rewriter;
pub mod types;
pub mod version;

// Re-export commonly used types at crate root
pub use constraint::{Bounds, Constraint, Modifier};
pub use error::CheckError;
pub use output::TableRenderer;
pub use planner::{PlatformRequirement, ScanReport, UpdateLevel, UpdatePlan, UpdatePlanner};
pub use types::{Dependency, Section, UpdateCandidate, UpdateSeverity};
pub use version::Version;
