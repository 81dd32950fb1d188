//! Instruction set encoding tables.
//!
//! Constants and field extraction for the RV32 subset the engine executes:
//! the base integer instructions plus the multiply/divide group.

/// Instruction field and immediate extraction.
pub mod decode;

/// Base integer instruction encodings.
pub mod rv32i;

/// Multiply/divide instruction encodings.
pub mod rv32m;
