//! Shared definitions used across the simulator.

/// Architectural and simulation-wide constants.
pub mod constants;

/// Error types for the loader and the run loop.
pub mod error;
