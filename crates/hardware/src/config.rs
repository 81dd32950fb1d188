//! Simulator configuration.
//!
//! All knobs are deserializable from JSON so a run can be described by a
//! config file, with CLI flags layered on top. Every field has a default, so
//! a partial (or absent) config is always valid.

use serde::Deserialize;

mod defaults {
    pub const PIPELINING: bool = true;
    pub const FORWARDING: bool = true;
    pub const TRACE: bool = false;
    pub const MAX_CYCLES: u64 = 1_000_000;
}

/// Pipeline behavior toggles.
///
/// Both toggles affect timing only, never architectural results: disabling
/// pipelining reduces the engine to strictly sequential per-instruction
/// execution, and disabling forwarding replaces bypass paths with
/// correctness stalls.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Overlap instructions in the 5-stage pipeline.
    pub pipelining: bool,
    /// Bypass not-yet-committed results to the Execute stage.
    pub forwarding: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            pipelining: defaults::PIPELINING,
            forwarding: defaults::FORWARDING,
        }
    }
}

/// General run controls.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit per-cycle stage activity on stderr.
    pub trace: bool,
    /// Safety limit for non-terminating images; the run loop errors out once
    /// this many cycles have elapsed.
    pub max_cycles: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: defaults::TRACE,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Top-level simulator configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pipeline behavior toggles.
    pub pipeline: PipelineConfig,
    /// General run controls.
    pub general: GeneralConfig,
}
