//! Hazard unit tests.

/// Operand forwarding priority and exclusions.
pub mod data_forwarding;
