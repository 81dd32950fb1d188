//! Architectural state: the general-purpose register file.

/// General-purpose register file.
pub mod gpr;
