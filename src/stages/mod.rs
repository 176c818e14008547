//! Concrete pipeline stages.
mod compatibility;
mod version;

pub use compatibility::CompatibilityCheckStage;
pub use compatibility::CompatibilityError;
pub use version::ManagerVersion;
pub use version::VersionParseError;
