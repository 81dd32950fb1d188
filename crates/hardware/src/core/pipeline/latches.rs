//! Pipeline latches (stage boundary registers).
//!
//! Each latch holds at most one in-flight instruction, or a bubble
//! (`Default::default()`, with `valid == false`). Latch contents are valid
//! for exactly one cycle: the engine takes the previous cycle's set by value
//! at the start of a tick and installs a freshly built set at the end, so no
//! stage can observe a same-cycle write made by another stage.

use std::fmt;

use crate::core::pipeline::signals::{AluOp, ControlSignals};

/// Fetch → Decode latch.
#[derive(Clone, Debug, Default)]
pub struct IfIdEntry {
    /// Holds an instruction (false ⇒ bubble).
    pub valid: bool,
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Fall-through address (`pc + 4`).
    pub next_pc: u32,
    /// Direction predicted at fetch time.
    pub pred_taken: bool,
    /// Target predicted at fetch time (fall-through when not taken or when
    /// the target cache had no entry).
    pub pred_target: u32,
}

/// Decode → Execute latch.
#[derive(Clone, Debug, Default)]
pub struct IdExEntry {
    /// Holds an instruction (false ⇒ bubble).
    pub valid: bool,
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Raw instruction word (for tracing and the end-of-program sentinel).
    pub inst: u32,
    /// Fall-through address.
    pub next_pc: u32,
    /// Decoded control signals.
    pub ctrl: ControlSignals,
    /// Sign-extended immediate.
    pub imm: i32,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Destination register index.
    pub rd: usize,
    /// Value read from `rs1` at decode time.
    pub rv1: u32,
    /// Value read from `rs2` at decode time.
    pub rv2: u32,
    /// Direction predicted at fetch time.
    pub pred_taken: bool,
    /// Target predicted at fetch time.
    pub pred_target: u32,
}

impl IdExEntry {
    /// Whether the operation actually reads `rs1`. `LUI`, `AUIPC` and `JAL`
    /// do not: their rs1 field bits belong to the immediate.
    pub fn reads_rs1(&self) -> bool {
        self.valid
            && !matches!(
                self.ctrl.alu,
                AluOp::Nop | AluOp::Halt | AluOp::Invalid | AluOp::Lui | AluOp::Auipc | AluOp::Jal
            )
    }

    /// Whether the operation actually reads `rs2`: register-register forms,
    /// conditional branches, and stores (store data).
    pub fn reads_rs2(&self) -> bool {
        self.valid
            && (self.ctrl.mem_write
                || self.ctrl.branch
                || (!self.ctrl.use_imm && !self.ctrl.jump && self.reads_rs1()))
    }
}

/// Execute → Memory latch.
#[derive(Clone, Debug, Default)]
pub struct ExMemEntry {
    /// Holds an instruction (false ⇒ bubble).
    pub valid: bool,
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Carried control signals.
    pub ctrl: ControlSignals,
    /// ALU result: arithmetic value, memory address, or link address.
    pub alu: u32,
    /// Value to store (possibly forwarded).
    pub store_data: u32,
    /// Destination register index.
    pub rd: usize,
    /// Resolved branch direction (branches/jumps only).
    pub branch_taken: bool,
    /// Resolved branch/jump target.
    pub branch_target: u32,
}

/// Memory → Writeback latch.
#[derive(Clone, Debug, Default)]
pub struct MemWbEntry {
    /// Holds an instruction (false ⇒ bubble).
    pub valid: bool,
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Carried control signals.
    pub ctrl: ControlSignals,
    /// ALU result carried from Execute.
    pub alu: u32,
    /// Sign-extended data read by the Memory stage (loads only).
    pub load_data: u32,
    /// Destination register index.
    pub rd: usize,
}

/// The full latch set connecting the five stages.
#[derive(Clone, Debug, Default)]
pub struct Latches {
    /// Fetch → Decode.
    pub if_id: IfIdEntry,
    /// Decode → Execute.
    pub id_ex: IdExEntry,
    /// Execute → Memory.
    pub ex_mem: ExMemEntry,
    /// Memory → Writeback.
    pub mem_wb: MemWbEntry,
}

impl Latches {
    /// Whether any latch holds an in-flight instruction.
    pub fn any_valid(&self) -> bool {
        self.if_id.valid || self.id_ex.valid || self.ex_mem.valid || self.mem_wb.valid
    }
}

impl fmt::Display for IfIdEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "IF/ID   <bubble>");
        }
        write!(
            f,
            "IF/ID   pc={:#010x} inst={:#010x} pred={} target={:#010x}",
            self.pc,
            self.inst,
            if self.pred_taken { "taken" } else { "not-taken" },
            self.pred_target
        )
    }
}

impl fmt::Display for IdExEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "ID/EX   <bubble>");
        }
        write!(
            f,
            "ID/EX   pc={:#010x} op={:?} rd=x{} rs1=x{}({:#x}) rs2=x{}({:#x}) imm={}",
            self.pc, self.ctrl.alu, self.rd, self.rs1, self.rv1, self.rs2, self.rv2, self.imm
        )
    }
}

impl fmt::Display for ExMemEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "EX/MEM  <bubble>");
        }
        write!(
            f,
            "EX/MEM  pc={:#010x} op={:?} rd=x{} alu={:#010x} store={:#010x}",
            self.pc, self.ctrl.alu, self.rd, self.alu, self.store_data
        )
    }
}

impl fmt::Display for MemWbEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "MEM/WB  <bubble>");
        }
        write!(
            f,
            "MEM/WB  pc={:#010x} op={:?} rd=x{} alu={:#010x} load={:#010x}",
            self.pc, self.ctrl.alu, self.rd, self.alu, self.load_data
        )
    }
}
