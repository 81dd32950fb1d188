//! RV32I base integer instruction set encodings.

/// Major opcode values (bits 0-6).
pub mod opcodes;

/// `funct3` selector values per major opcode.
pub mod funct3;

/// `funct7` selector values for register-register and shift forms.
pub mod funct7;
