//! # Event Handlers
//!
//! Background tasks consuming the event bus.

pub mod event_log;

pub use event_log::EventLogHandler;
