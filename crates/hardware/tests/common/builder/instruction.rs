//! RV32 instruction encoders for building test programs.
//!
//! Each function packs one instruction per the base encoding formats.
//! Offsets for branches and jumps are byte offsets relative to the
//! instruction's own address.

use rv32sim_core::isa::rv32i::{funct3, funct7, opcodes};
use rv32sim_core::isa::rv32m;

fn r_type(f3: u32, f7: u32, rd: u32, rs1: u32, rs2: u32) -> u32 {
    (f7 << 25) | (rs2 << 20) | (rs1 << 15) | (f3 << 12) | (rd << 7) | opcodes::OP_REG
}

fn i_type(opcode: u32, f3: u32, rd: u32, rs1: u32, imm: i32) -> u32 {
    ((imm as u32 & 0xFFF) << 20) | (rs1 << 15) | (f3 << 12) | (rd << 7) | opcode
}

fn s_type(f3: u32, rs2: u32, rs1: u32, imm: i32) -> u32 {
    let imm = imm as u32;
    (((imm >> 5) & 0x7F) << 25)
        | (rs2 << 20)
        | (rs1 << 15)
        | (f3 << 12)
        | ((imm & 0x1F) << 7)
        | opcodes::OP_STORE
}

fn b_type(f3: u32, rs1: u32, rs2: u32, offset: i32) -> u32 {
    let imm = offset as u32;
    (((imm >> 12) & 0x1) << 31)
        | (((imm >> 5) & 0x3F) << 25)
        | (rs2 << 20)
        | (rs1 << 15)
        | (f3 << 12)
        | (((imm >> 1) & 0xF) << 8)
        | (((imm >> 11) & 0x1) << 7)
        | opcodes::OP_BRANCH
}

pub fn nop() -> u32 {
    addi(0, 0, 0)
}

pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_IMM, funct3::ADD_SUB, rd, rs1, imm)
}

pub fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct3::ADD_SUB, funct7::BASE, rd, rs1, rs2)
}

pub fn sub(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct3::ADD_SUB, funct7::ALT, rd, rs1, rs2)
}

pub fn xor(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct3::XOR, funct7::BASE, rd, rs1, rs2)
}

pub fn sltu(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct3::SLTU, funct7::BASE, rd, rs1, rs2)
}

pub fn mul(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(rv32m::funct3::MUL, rv32m::FUNCT7_MULDIV, rd, rs1, rs2)
}

pub fn div(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(rv32m::funct3::DIV, rv32m::FUNCT7_MULDIV, rd, rs1, rs2)
}

pub fn rem(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(rv32m::funct3::REM, rv32m::FUNCT7_MULDIV, rd, rs1, rs2)
}

pub fn lw(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_LOAD, funct3::MEM_WORD, rd, rs1, imm)
}

pub fn lh(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_LOAD, funct3::MEM_HALF, rd, rs1, imm)
}

pub fn lb(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_LOAD, funct3::MEM_BYTE, rd, rs1, imm)
}

pub fn sw(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(funct3::MEM_WORD, rs2, rs1, imm)
}

pub fn sh(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(funct3::MEM_HALF, rs2, rs1, imm)
}

pub fn sb(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(funct3::MEM_BYTE, rs2, rs1, imm)
}

pub fn beq(rs1: u32, rs2: u32, offset: i32) -> u32 {
    b_type(funct3::BEQ, rs1, rs2, offset)
}

pub fn bne(rs1: u32, rs2: u32, offset: i32) -> u32 {
    b_type(funct3::BNE, rs1, rs2, offset)
}

pub fn blt(rs1: u32, rs2: u32, offset: i32) -> u32 {
    b_type(funct3::BLT, rs1, rs2, offset)
}

pub fn jal(rd: u32, offset: i32) -> u32 {
    let imm = offset as u32;
    (((imm >> 20) & 0x1) << 31)
        | (((imm >> 1) & 0x3FF) << 21)
        | (((imm >> 11) & 0x1) << 20)
        | (((imm >> 12) & 0xFF) << 12)
        | (rd << 7)
        | opcodes::OP_JAL
}

pub fn jalr(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_JALR, 0, rd, rs1, imm)
}

/// `value` is the final register value; its low 12 bits must be zero.
pub fn lui(rd: u32, value: u32) -> u32 {
    (value & 0xFFFF_F000) | (rd << 7) | opcodes::OP_LUI
}
