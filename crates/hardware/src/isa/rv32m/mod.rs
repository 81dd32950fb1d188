//! RV32M multiply/divide instruction set encodings.

/// `funct3` selector values under the M-extension `funct7`.
pub mod funct3;

/// `funct7` value distinguishing the multiply/divide group under `OP_REG`.
pub const FUNCT7_MULDIV: u32 = 0b000_0001;
