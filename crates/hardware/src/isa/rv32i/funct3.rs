//! `funct3` selector values (bits 12-14) per major opcode.

/// `ADD`/`SUB`/`ADDI`.
pub const ADD_SUB: u32 = 0b000;
/// `SLL`/`SLLI`.
pub const SLL: u32 = 0b001;
/// `SLT`/`SLTI`.
pub const SLT: u32 = 0b010;
/// `SLTU`/`SLTIU`.
pub const SLTU: u32 = 0b011;
/// `XOR`/`XORI`.
pub const XOR: u32 = 0b100;
/// `SRL`/`SRA`/`SRLI`/`SRAI`.
pub const SRL_SRA: u32 = 0b101;
/// `OR`/`ORI`.
pub const OR: u32 = 0b110;
/// `AND`/`ANDI`.
pub const AND: u32 = 0b111;

/// `BEQ`.
pub const BEQ: u32 = 0b000;
/// `BNE`.
pub const BNE: u32 = 0b001;
/// `BLT`.
pub const BLT: u32 = 0b100;
/// `BGE`.
pub const BGE: u32 = 0b101;
/// `BLTU`.
pub const BLTU: u32 = 0b110;
/// `BGEU`.
pub const BGEU: u32 = 0b111;

/// `LB`/`SB` (8-bit access).
pub const MEM_BYTE: u32 = 0b000;
/// `LH`/`SH` (16-bit access).
pub const MEM_HALF: u32 = 0b001;
/// `LW`/`SW` (32-bit access).
pub const MEM_WORD: u32 = 0b010;
