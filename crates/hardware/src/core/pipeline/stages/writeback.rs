//! Writeback stage.
//!
//! Commits the selected result to the register file and retires the
//! instruction for accounting. The only mutator of the register file.

use crate::common::constants::INST_BYTES;
use crate::core::Cpu;
use crate::core::pipeline::latches::MemWbEntry;
use crate::core::pipeline::signals::{AluOp, WbSrc};

/// Commits one instruction's result, if it writes a register.
pub fn writeback_stage(cpu: &mut Cpu, mem_wb: &MemWbEntry) {
    if !mem_wb.valid {
        return;
    }

    match mem_wb.ctrl.alu {
        AluOp::Nop | AluOp::Halt | AluOp::Invalid => return,
        _ => {
            cpu.stats.instructions_retired += 1;
            if mem_wb.ctrl.mem_read {
                cpu.stats.inst_load += 1;
            } else if mem_wb.ctrl.mem_write {
                cpu.stats.inst_store += 1;
            } else if mem_wb.ctrl.branch {
                cpu.stats.inst_branch += 1;
            } else if mem_wb.ctrl.jump {
                cpu.stats.inst_jump += 1;
            } else {
                cpu.stats.inst_alu += 1;
            }
        }
    }

    if !mem_wb.ctrl.reg_write || mem_wb.rd == 0 {
        return;
    }

    let value = match mem_wb.ctrl.wb_src {
        WbSrc::Alu => mem_wb.alu,
        WbSrc::Mem => mem_wb.load_data,
        WbSrc::Link => mem_wb.pc.wrapping_add(INST_BYTES),
    };
    cpu.regs.write(mem_wb.rd, value);

    if cpu.trace {
        eprintln!("WB  pc={:#010x} x{} <= {value:#010x}", mem_wb.pc, mem_wb.rd);
    }
}
