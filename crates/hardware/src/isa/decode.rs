//! Instruction field and immediate extraction.
//!
//! Splits a raw 32-bit instruction word into its encoding fields and selects
//! the sign-extended immediate per instruction format (I, S, B, U, J). The
//! mapping from fields to control signals happens in the Decode stage; this
//! module knows only the bit layout.

use crate::isa::rv32i::opcodes;

/// A raw instruction word split into its encoding fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoded {
    /// The raw instruction word.
    pub raw: u32,
    /// Major opcode (bits 0-6).
    pub opcode: u32,
    /// Destination register index (bits 7-11).
    pub rd: usize,
    /// Minor opcode (bits 12-14).
    pub funct3: u32,
    /// First source register index (bits 15-19).
    pub rs1: usize,
    /// Second source register index (bits 20-24).
    pub rs2: usize,
    /// Secondary minor opcode (bits 25-31).
    pub funct7: u32,
    /// Sign-extended immediate per the opcode's format; 0 for R-type.
    pub imm: i32,
}

/// Splits `raw` into fields and extracts the format-appropriate immediate.
pub fn decode(raw: u32) -> Decoded {
    let opcode = raw & 0x7F;
    Decoded {
        raw,
        opcode,
        rd: ((raw >> 7) & 0x1F) as usize,
        funct3: (raw >> 12) & 0x7,
        rs1: ((raw >> 15) & 0x1F) as usize,
        rs2: ((raw >> 20) & 0x1F) as usize,
        funct7: (raw >> 25) & 0x7F,
        imm: immediate(raw, opcode),
    }
}

/// Selects the immediate by instruction format. R-type (and unrecognized
/// opcodes) yield 0.
fn immediate(raw: u32, opcode: u32) -> i32 {
    match opcode {
        opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR => imm_i(raw),
        opcodes::OP_STORE => imm_s(raw),
        opcodes::OP_BRANCH => imm_b(raw),
        opcodes::OP_LUI | opcodes::OP_AUIPC => imm_u(raw),
        opcodes::OP_JAL => imm_j(raw),
        _ => 0,
    }
}

/// I-type: bits 20-31, sign-extended.
fn imm_i(raw: u32) -> i32 {
    (raw as i32) >> 20
}

/// S-type: bits 25-31 | 7-11, sign-extended.
fn imm_s(raw: u32) -> i32 {
    ((raw & 0xFE00_0000) as i32 >> 20) | ((raw >> 7) & 0x1F) as i32
}

/// B-type: 13-bit signed offset in multiples of two bytes.
fn imm_b(raw: u32) -> i32 {
    ((raw & 0x8000_0000) as i32 >> 19)
        | (((raw >> 7) & 0x1) << 11) as i32
        | (((raw >> 25) & 0x3F) << 5) as i32
        | (((raw >> 8) & 0xF) << 1) as i32
}

/// U-type: bits 12-31, low 12 bits zero.
fn imm_u(raw: u32) -> i32 {
    (raw & 0xFFFF_F000) as i32
}

/// J-type: 21-bit signed offset in multiples of two bytes.
fn imm_j(raw: u32) -> i32 {
    ((raw & 0x8000_0000) as i32 >> 11)
        | (raw & 0x000F_F000) as i32
        | (((raw >> 20) & 0x1) << 11) as i32
        | (((raw >> 21) & 0x3FF) << 1) as i32
}
