//! # rv32sim-core
//!
//! A cycle-accurate simulator of a 32-bit in-order 5-stage pipelined processor
//! implementing an RV32 integer subset (arithmetic/logic, loads/stores,
//! branches, jumps, upper-immediate forms, and multiply/divide/remainder).
//!
//! The crate is organized around the pipeline execution engine:
//! 1. **Stage transforms:** Fetch, Decode, Execute, Memory, and Writeback as
//!    pure functions over the previous cycle's latch contents.
//! 2. **Hazard handling:** load-use stall detection, a correctness stall for
//!    the no-forwarding configuration, and operand forwarding.
//! 3. **Speculation:** a per-address 1-bit branch predictor with a branch
//!    target cache, and misprediction flush/recovery.
//!
//! Pipelining and forwarding can be independently disabled; either way the
//! architectural results are identical to sequential execution.

/// Shared constants and error types.
pub mod common;

/// Run-time configuration knobs.
pub mod config;

/// The processor core: register file, memory, predictor, and the pipeline.
pub mod core;

/// Instruction set encoding tables and field extraction.
pub mod isa;

/// Simulation driver: program loading and the run loop.
pub mod sim;

/// Execution statistics.
pub mod stats;

pub use config::Config;
pub use core::Cpu;
pub use sim::Simulator;
pub use sim::loader::Program;
