//! The 5-stage pipeline: latches, signals, hazards, stages, and the engine.

/// Tick orchestration: stage ordering, stall/flush handling, halt detection.
pub mod engine;

/// Hazard detection and operand forwarding.
pub mod hazards;

/// Stage boundary registers.
pub mod latches;

/// Control signals and operation tags.
pub mod signals;

/// The five stage transforms.
pub mod stages;
