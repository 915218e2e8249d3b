//!
//! Logger of the system.
//!

pub use tracing::{debug, error, event as log, info, warn};

pub mod config;
mod setup;

pub use setup::{setup, LoggerError, TelemetryGuard};
