//! Error types for the loader and the run loop.
//!
//! Nothing in the core is fatal to the process: an invalid opcode decodes to
//! a no-op with a diagnostic, and a malformed image line is skipped. The only
//! typed failures are file-level loader problems and the external cycle
//! safety limit.

use thiserror::Error;

/// Errors raised while parsing a program image.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The image file could not be read.
    #[error("cannot read program image '{path}': {source}")]
    Io {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The image contained no instruction lines at all.
    #[error("program image '{path}' contains no instructions")]
    EmptyImage {
        /// Path of the offending image.
        path: String,
    },
}

/// Errors raised by the simulation run loop.
#[derive(Debug, Error)]
pub enum SimError {
    /// The bounded cycle counter was exhausted before the program halted.
    /// This is an external safety limit, not a domain condition.
    #[error("cycle limit of {limit} exceeded without reaching end of program")]
    CycleLimit {
        /// Configured maximum cycle count.
        limit: u64,
    },
}
