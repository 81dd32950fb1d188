//! Decode stage.
//!
//! Splits the fetched word into fields, maps opcode/funct encodings to
//! control signals per the fixed format table, and reads the source
//! registers. An unrecognized encoding decodes to `AluOp::Invalid` with a
//! diagnostic and flows through the pipeline as a no-op; it never aborts the
//! run. Hazard detection runs in the engine on the entry this stage returns.

use crate::common::constants::SENTINEL;
use crate::core::Cpu;
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::core::pipeline::signals::{AluOp, ControlSignals, MemWidth, WbSrc};
use crate::isa::decode::{Decoded, decode};
use crate::isa::rv32i::{funct3, funct7, opcodes};
use crate::isa::rv32m;

/// Decodes one instruction and reads its source registers.
pub fn decode_stage(cpu: &mut Cpu, if_id: &IfIdEntry) -> IdExEntry {
    if !if_id.valid {
        return IdExEntry::default();
    }

    let mut entry = IdExEntry {
        valid: true,
        pc: if_id.pc,
        inst: if_id.inst,
        next_pc: if_id.next_pc,
        pred_taken: if_id.pred_taken,
        pred_target: if_id.pred_target,
        ..Default::default()
    };

    // The sentinel and the all-zero padding word carry no work; they flow
    // through as tagged no-ops.
    if if_id.inst == SENTINEL {
        entry.ctrl.alu = AluOp::Halt;
        return entry;
    }
    if if_id.inst == 0 {
        return entry;
    }

    let d = decode(if_id.inst);
    entry.ctrl = control_signals(&d);
    entry.imm = d.imm;
    entry.rs1 = d.rs1;
    entry.rs2 = d.rs2;
    entry.rd = d.rd;
    entry.rv1 = cpu.regs.read(d.rs1);
    entry.rv2 = cpu.regs.read(d.rs2);

    if entry.ctrl.alu == AluOp::Invalid {
        eprintln!(
            "[Decode] pc={:#010x}: unrecognized encoding {:#010x}, treating as no-op",
            if_id.pc, if_id.inst
        );
    } else if cpu.trace {
        eprintln!(
            "ID  pc={:#010x} op={:?} rd=x{} rs1=x{} rs2=x{} imm={}",
            if_id.pc, entry.ctrl.alu, d.rd, d.rs1, d.rs2, d.imm
        );
    }

    entry
}

/// The fixed instruction-format table: opcode/funct encodings to control
/// signals. Anything outside the table yields `AluOp::Invalid` with every
/// control flag off.
fn control_signals(d: &Decoded) -> ControlSignals {
    match d.opcode {
        opcodes::OP_REG => reg_reg(d),
        opcodes::OP_IMM => reg_imm(d),
        opcodes::OP_LOAD => mem_width(d.funct3).map_or_else(invalid, |width| ControlSignals {
            reg_write: true,
            mem_read: true,
            use_imm: true,
            wb_src: WbSrc::Mem,
            width,
            alu: AluOp::Add,
            ..Default::default()
        }),
        opcodes::OP_STORE => mem_width(d.funct3).map_or_else(invalid, |width| ControlSignals {
            mem_write: true,
            use_imm: true,
            width,
            alu: AluOp::Add,
            ..Default::default()
        }),
        opcodes::OP_BRANCH => branch(d),
        opcodes::OP_JAL => ControlSignals {
            reg_write: true,
            jump: true,
            wb_src: WbSrc::Link,
            alu: AluOp::Jal,
            ..Default::default()
        },
        opcodes::OP_JALR => ControlSignals {
            reg_write: true,
            jump: true,
            use_imm: true,
            wb_src: WbSrc::Link,
            alu: AluOp::Jalr,
            ..Default::default()
        },
        opcodes::OP_LUI => ControlSignals {
            reg_write: true,
            use_imm: true,
            alu: AluOp::Lui,
            ..Default::default()
        },
        opcodes::OP_AUIPC => ControlSignals {
            reg_write: true,
            use_imm: true,
            alu: AluOp::Auipc,
            ..Default::default()
        },
        _ => invalid(),
    }
}

fn reg_reg(d: &Decoded) -> ControlSignals {
    let alu = if d.funct7 == rv32m::FUNCT7_MULDIV {
        match d.funct3 {
            rv32m::funct3::MUL => AluOp::Mul,
            rv32m::funct3::MULH => AluOp::Mulh,
            rv32m::funct3::MULHSU => AluOp::Mulhsu,
            rv32m::funct3::MULHU => AluOp::Mulhu,
            rv32m::funct3::DIV => AluOp::Div,
            rv32m::funct3::DIVU => AluOp::Divu,
            rv32m::funct3::REM => AluOp::Rem,
            _ => AluOp::Remu,
        }
    } else {
        match (d.funct3, d.funct7) {
            (funct3::ADD_SUB, funct7::BASE) => AluOp::Add,
            (funct3::ADD_SUB, funct7::ALT) => AluOp::Sub,
            (funct3::SLL, funct7::BASE) => AluOp::Sll,
            (funct3::SLT, funct7::BASE) => AluOp::Slt,
            (funct3::SLTU, funct7::BASE) => AluOp::Sltu,
            (funct3::XOR, funct7::BASE) => AluOp::Xor,
            (funct3::SRL_SRA, funct7::BASE) => AluOp::Srl,
            (funct3::SRL_SRA, funct7::ALT) => AluOp::Sra,
            (funct3::OR, funct7::BASE) => AluOp::Or,
            (funct3::AND, funct7::BASE) => AluOp::And,
            _ => return invalid(),
        }
    };
    ControlSignals {
        reg_write: true,
        alu,
        ..Default::default()
    }
}

fn reg_imm(d: &Decoded) -> ControlSignals {
    let alu = match d.funct3 {
        funct3::ADD_SUB => AluOp::Add,
        funct3::SLL => AluOp::Sll,
        funct3::SLT => AluOp::Slt,
        funct3::SLTU => AluOp::Sltu,
        funct3::XOR => AluOp::Xor,
        funct3::SRL_SRA => {
            // Shift-immediate encodings reuse funct7 to pick the variant.
            if d.funct7 == funct7::ALT {
                AluOp::Sra
            } else {
                AluOp::Srl
            }
        }
        funct3::OR => AluOp::Or,
        _ => AluOp::And,
    };
    ControlSignals {
        reg_write: true,
        use_imm: true,
        alu,
        ..Default::default()
    }
}

fn branch(d: &Decoded) -> ControlSignals {
    let alu = match d.funct3 {
        funct3::BEQ => AluOp::Beq,
        funct3::BNE => AluOp::Bne,
        funct3::BLT => AluOp::Blt,
        funct3::BGE => AluOp::Bge,
        funct3::BLTU => AluOp::Bltu,
        funct3::BGEU => AluOp::Bgeu,
        _ => return invalid(),
    };
    ControlSignals {
        branch: true,
        alu,
        ..Default::default()
    }
}

fn mem_width(f3: u32) -> Option<MemWidth> {
    match f3 {
        funct3::MEM_BYTE => Some(MemWidth::Byte),
        funct3::MEM_HALF => Some(MemWidth::Half),
        funct3::MEM_WORD => Some(MemWidth::Word),
        _ => None,
    }
}

fn invalid() -> ControlSignals {
    ControlSignals {
        alu: AluOp::Invalid,
        ..Default::default()
    }
}
