//! Data Hazard Detection and Forwarding.
//!
//! Both stall signals and the forwarded operand values are combinational:
//! recomputed from scratch every cycle, never persisted. It provides:
//! 1. **Load-use detection:** the unavoidable one-cycle bubble when Decode
//!    depends on a load whose data arrives only in the Memory stage.
//! 2. **Correctness stall:** with forwarding disabled, any unresolved RAW
//!    dependency holds Decode until the producer commits.
//! 3. **Operand forwarding:** bypasses the register file from the freshest
//!    in-flight producer.

use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, MemWbEntry};

/// Checks if a stall is needed due to a load-use data hazard.
///
/// Asserted when the instruction just decoded reads (as `rs1`, or as `rs2`
/// where the opcode actually uses it) the destination of the load now sitting
/// in the Execute→Memory latch. Active regardless of the forwarding toggle:
/// load data does not exist until the Memory stage, so no bypass can help.
pub fn need_stall_load_use(id: &IdExEntry, ex_mem: &ExMemEntry) -> bool {
    if !ex_mem.valid || !ex_mem.ctrl.mem_read || !ex_mem.ctrl.reg_write || ex_mem.rd == 0 {
        return false;
    }
    (id.reads_rs1() && id.rs1 == ex_mem.rd) || (id.reads_rs2() && id.rs2 == ex_mem.rd)
}

/// Checks if a stall is needed because forwarding is disabled and the decoded
/// instruction depends on an uncommitted producer.
///
/// With no bypass paths, results are visible only after Writeback commits
/// them, so any dependency on the Execute→Memory or Memory→Writeback
/// instruction must hold Decode in place.
pub fn need_stall_raw(id: &IdExEntry, ex_mem: &ExMemEntry, mem_wb: &MemWbEntry) -> bool {
    let depends_on = |rd: usize| -> bool {
        rd != 0 && ((id.reads_rs1() && id.rs1 == rd) || (id.reads_rs2() && id.rs2 == rd))
    };

    if ex_mem.valid && ex_mem.ctrl.reg_write && depends_on(ex_mem.rd) {
        return true;
    }
    if mem_wb.valid && mem_wb.ctrl.reg_write && depends_on(mem_wb.rd) {
        return true;
    }
    false
}

/// Forwards register values from in-flight producers to resolve RAW hazards.
///
/// Returns `(rv1, rv2)` for the instruction entering Execute. The
/// Memory→Writeback producer is applied first and the Execute→Memory producer
/// second, so the freshest result wins when both write the same register.
/// Register 0 is never forwarded. A load in Execute→Memory is skipped — its
/// data is not available yet, and the load-use stall guarantees no consumer
/// reaches Execute that early.
pub fn forward_operands(
    id: &IdExEntry,
    ex_mem: &ExMemEntry,
    mem_wb: &MemWbEntry,
    trace: bool,
) -> (u32, u32) {
    let mut a = id.rv1;
    let mut b = id.rv2;

    if mem_wb.valid && mem_wb.ctrl.reg_write && mem_wb.rd != 0 {
        let val = if mem_wb.ctrl.mem_read {
            mem_wb.load_data
        } else {
            mem_wb.alu
        };
        if id.rs1 == mem_wb.rd {
            if trace {
                eprintln!(
                    "[Forward] pc={:#x} rs1=x{} val={val:#x} source=MEM/WB",
                    id.pc, id.rs1
                );
            }
            a = val;
        }
        if id.rs2 == mem_wb.rd {
            if trace {
                eprintln!(
                    "[Forward] pc={:#x} rs2=x{} val={val:#x} source=MEM/WB",
                    id.pc, id.rs2
                );
            }
            b = val;
        }
    }

    if ex_mem.valid && ex_mem.ctrl.reg_write && ex_mem.rd != 0 && !ex_mem.ctrl.mem_read {
        let val = ex_mem.alu;
        if id.rs1 == ex_mem.rd {
            if trace {
                eprintln!(
                    "[Forward] pc={:#x} rs1=x{} val={val:#x} source=EX/MEM",
                    id.pc, id.rs1
                );
            }
            a = val;
        }
        if id.rs2 == ex_mem.rd {
            if trace {
                eprintln!(
                    "[Forward] pc={:#x} rs2=x{} val={val:#x} source=EX/MEM",
                    id.pc, id.rs2
                );
            }
            b = val;
        }
    }

    (a, b)
}
