//! Functional unit tests.

/// Branch prediction through the full pipeline.
pub mod bru;
