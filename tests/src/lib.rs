//! # Prize-Timelocks Test Suite
//!
//! Cross-component scenarios driving the access contexts, the draw timelock
//! and the timelock trigger together over one event bus.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs     # timelock + trigger wired by hand
//!     └── runtime.rs   # the same flows through TimelockRuntime
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pt-tests
//! cargo test -p pt-tests integration::flows
//! ```

pub mod integration;
