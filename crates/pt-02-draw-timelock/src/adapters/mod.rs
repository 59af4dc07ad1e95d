//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits for in-process operation.

mod static_calculator;

pub use static_calculator::StaticDrawCalculator;
