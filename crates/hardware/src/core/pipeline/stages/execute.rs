//! Execute stage.
//!
//! Resolves operands (forwarded when enabled), computes the ALU result or
//! memory address, evaluates branch conditions and jump targets, updates the
//! branch predictor with every resolved outcome, and compares the resolution
//! against the prediction latched at fetch time. On a mismatch it returns the
//! corrected program counter so the engine can flush the wrong-path fetches.

use crate::core::Cpu;
use crate::core::pipeline::hazards::forward_operands;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, MemWbEntry};
use crate::core::pipeline::signals::AluOp;
use crate::core::units::alu::Alu;

/// Executes one instruction.
///
/// `ex_mem_prev` and `mem_wb_prev` are the previous cycle's latches, used
/// only as forwarding sources. Returns the Execute→Memory entry and, on a
/// misprediction, the corrected next program counter.
pub fn execute_stage(
    cpu: &mut Cpu,
    id_ex: &IdExEntry,
    ex_mem_prev: &ExMemEntry,
    mem_wb_prev: &MemWbEntry,
) -> (ExMemEntry, Option<u32>) {
    if !id_ex.valid {
        return (ExMemEntry::default(), None);
    }

    let (rv1, rv2) = if cpu.pipelining && cpu.forwarding {
        forward_operands(id_ex, ex_mem_prev, mem_wb_prev, cpu.trace)
    } else {
        (id_ex.rv1, id_ex.rv2)
    };

    let mut entry = ExMemEntry {
        valid: true,
        pc: id_ex.pc,
        inst: id_ex.inst,
        ctrl: id_ex.ctrl,
        store_data: rv2,
        rd: id_ex.rd,
        ..Default::default()
    };
    let mut redirect = None;

    match id_ex.ctrl.alu {
        AluOp::Nop | AluOp::Halt | AluOp::Invalid => {}
        AluOp::Lui => entry.alu = id_ex.imm as u32,
        AluOp::Auipc => entry.alu = id_ex.pc.wrapping_add_signed(id_ex.imm),
        AluOp::Beq
        | AluOp::Bne
        | AluOp::Blt
        | AluOp::Bge
        | AluOp::Bltu
        | AluOp::Bgeu
        | AluOp::Jal
        | AluOp::Jalr => {
            redirect = resolve_control_flow(cpu, id_ex, rv1, rv2, &mut entry);
        }
        op => {
            let b = if id_ex.ctrl.use_imm {
                id_ex.imm as u32
            } else {
                rv2
            };
            entry.alu = Alu::execute(op, rv1, b);
        }
    }

    if cpu.trace {
        eprintln!(
            "EX  pc={:#010x} op={:?} alu={:#010x}",
            id_ex.pc, id_ex.ctrl.alu, entry.alu
        );
    }

    (entry, redirect)
}

/// Resolves a branch or jump: actual direction and target, predictor update,
/// and comparison against the fetch-time prediction.
fn resolve_control_flow(
    cpu: &mut Cpu,
    id_ex: &IdExEntry,
    rv1: u32,
    rv2: u32,
    entry: &mut ExMemEntry,
) -> Option<u32> {
    let (taken, target) = match id_ex.ctrl.alu {
        AluOp::Jal => (true, id_ex.pc.wrapping_add_signed(id_ex.imm)),
        AluOp::Jalr => (true, rv1.wrapping_add_signed(id_ex.imm) & !1),
        AluOp::Beq => (rv1 == rv2, id_ex.pc.wrapping_add_signed(id_ex.imm)),
        AluOp::Bne => (rv1 != rv2, id_ex.pc.wrapping_add_signed(id_ex.imm)),
        AluOp::Blt => (
            (rv1 as i32) < (rv2 as i32),
            id_ex.pc.wrapping_add_signed(id_ex.imm),
        ),
        AluOp::Bge => (
            (rv1 as i32) >= (rv2 as i32),
            id_ex.pc.wrapping_add_signed(id_ex.imm),
        ),
        AluOp::Bltu => (rv1 < rv2, id_ex.pc.wrapping_add_signed(id_ex.imm)),
        _ => (rv1 >= rv2, id_ex.pc.wrapping_add_signed(id_ex.imm)),
    };

    entry.branch_taken = taken;
    entry.branch_target = target;
    entry.alu = if id_ex.ctrl.jump {
        // Link address, carried in the result field so forwarding sees it.
        id_ex.next_pc
    } else {
        u32::from(taken)
    };

    cpu.bpu.update(id_ex.pc, taken, target);

    let resolved_next = if taken { target } else { id_ex.next_pc };
    let predicted_next = if id_ex.pred_taken {
        id_ex.pred_target
    } else {
        id_ex.next_pc
    };

    if predicted_next == resolved_next {
        return None;
    }

    if cpu.trace {
        let kind = if id_ex.pred_taken == taken {
            "target"
        } else {
            "direction"
        };
        eprintln!(
            "EX  pc={:#010x} mispredict ({kind}): predicted {predicted_next:#010x}, resolved {resolved_next:#010x}",
            id_ex.pc
        );
    }

    Some(resolved_next)
}
