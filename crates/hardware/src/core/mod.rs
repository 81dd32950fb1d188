//! The processor core.

/// Architectural register state.
pub mod arch;

/// Engine state and the per-cycle entry point.
pub mod cpu;

/// Sparse byte-addressable data memory.
pub mod memory;

/// The 5-stage pipeline.
pub mod pipeline;

/// Functional units (ALU, branch predictor).
pub mod units;

pub use cpu::Cpu;
