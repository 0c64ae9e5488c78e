//! Crate includes reusable utils shared by the diamond binaries and test suites, such as
//! initializing the tracing framework.

pub mod logging;

// Re-export tracing crate for convenience.
pub use tracing;
