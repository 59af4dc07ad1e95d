//! # Timelock Runtime Library
//!
//! Component container, configuration and event handlers for the timelock
//! runtime binary. Exposed as a library so the container can be built from
//! tests with a manual clock.

pub mod container;
pub mod handlers;

pub use container::{load_config, ConfigError, RuntimeConfig, TimelockRuntime};
pub use handlers::EventLogHandler;
