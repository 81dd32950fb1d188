//! Functional units used by the Execute stage.

/// Integer arithmetic/logic unit.
pub mod alu;

/// Branch prediction unit.
pub mod bru;
