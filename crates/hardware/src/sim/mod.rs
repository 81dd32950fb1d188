//! Simulation driver: program images and the run loop.

/// Program image parsing.
pub mod loader;

/// The run loop and its safety limit.
pub mod simulator;

pub use simulator::Simulator;
