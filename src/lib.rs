pub mod checks;
pub mod error;
pub mod logging;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};
pub use report::{run_all, run_checks, Check, CheckOutcome, CheckReport, CHECKS};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");
