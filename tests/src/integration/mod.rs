//! # Integration Tests
//!
//! Components are wired exactly as in production: real services, in-memory
//! adapters and a `ManualClock` standing in for time.

pub mod flows;
pub mod runtime;
