//! MT Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the other crates in the
//! workspace:
//! - Application configuration (endpoint, client id, basic auth, account)
//! - The unified `MtError` type and `MtResult` alias
//! - Structured logging with tracing
//! - Platform directories and common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::AppConfig;
pub use error::{MtError, MtResult};
pub use logging::init_logging;
pub use platform::Platform;
