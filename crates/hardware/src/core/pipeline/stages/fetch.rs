//! Fetch stage.
//!
//! Reads the instruction word at the program counter, consults the branch
//! predictor, and picks the next speculative fetch address. The engine skips
//! this stage entirely on a stall (the IF/ID latch is re-offered unchanged).

use crate::common::constants::{INST_BYTES, SENTINEL};
use crate::core::Cpu;
use crate::core::pipeline::latches::IfIdEntry;
use crate::isa::rv32i::opcodes;

/// Fetches one instruction and advances the program counter.
///
/// Returns a bubble (and leaves the pc in place) when instruction memory has
/// no word at the current address; the run loop halts once the pipeline
/// drains behind it.
pub fn fetch_stage(cpu: &mut Cpu) -> IfIdEntry {
    let pc = cpu.pc;
    let Some(inst) = cpu.imem.get(&pc).copied() else {
        return IfIdEntry::default();
    };
    let fall_through = pc.wrapping_add(INST_BYTES);

    let (pred_taken, pred_target) = if inst == SENTINEL {
        (false, fall_through)
    } else if cpu.bpu.in_btb(pc) {
        let taken = cpu.bpu.predict_taken(pc);
        let target = if taken {
            cpu.bpu.predicted_target(pc)
        } else {
            fall_through
        };
        (taken, target)
    } else if is_control_flow(inst) {
        // Direction-only query: a taken prediction with no cached target
        // falls through and gets corrected at resolution.
        (cpu.bpu.predict_taken(pc), fall_through)
    } else {
        (false, fall_through)
    };

    cpu.pc = if pred_taken { pred_target } else { fall_through };

    if cpu.trace {
        eprintln!(
            "IF  pc={pc:#010x} inst={inst:#010x} pred={} next={:#010x}",
            if pred_taken { "taken" } else { "not-taken" },
            cpu.pc
        );
    }

    IfIdEntry {
        valid: true,
        pc,
        inst,
        next_pc: fall_through,
        pred_taken,
        pred_target,
    }
}

/// Opcode-level guess used before the predictor has seen an address.
fn is_control_flow(inst: u32) -> bool {
    matches!(
        inst & 0x7F,
        opcodes::OP_BRANCH | opcodes::OP_JAL | opcodes::OP_JALR
    )
}
