//! Memory stage.
//!
//! Performs loads and stores at the address computed by Execute. Loads of 8
//! and 16 bits are sign-extended to the full register width; the store data
//! was already forwarded (if needed) in Execute.

use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use crate::core::pipeline::signals::MemWidth;

/// Performs the memory access for one instruction, if any.
pub fn memory_stage(cpu: &mut Cpu, ex_mem: &ExMemEntry) -> MemWbEntry {
    if !ex_mem.valid {
        return MemWbEntry::default();
    }

    let mut entry = MemWbEntry {
        valid: true,
        pc: ex_mem.pc,
        inst: ex_mem.inst,
        ctrl: ex_mem.ctrl,
        alu: ex_mem.alu,
        rd: ex_mem.rd,
        ..Default::default()
    };

    if ex_mem.ctrl.mem_read {
        let raw = cpu.mem.read(ex_mem.alu, ex_mem.ctrl.width);
        entry.load_data = sign_extend(raw, ex_mem.ctrl.width);
        if cpu.trace {
            eprintln!(
                "MEM pc={:#010x} load  [{:#010x}] => {:#010x}",
                ex_mem.pc, ex_mem.alu, entry.load_data
            );
        }
    } else if ex_mem.ctrl.mem_write {
        cpu.mem.write(ex_mem.alu, ex_mem.store_data, ex_mem.ctrl.width);
        if cpu.trace {
            eprintln!(
                "MEM pc={:#010x} store [{:#010x}] <= {:#010x}",
                ex_mem.pc, ex_mem.alu, ex_mem.store_data
            );
        }
    }

    entry
}

/// Sign-extends a zero-extended sub-word load to 32 bits.
fn sign_extend(raw: u32, width: MemWidth) -> u32 {
    match width {
        MemWidth::Byte => raw as u8 as i8 as i32 as u32,
        MemWidth::Half => raw as u16 as i16 as i32 as u32,
        MemWidth::Word => raw,
    }
}
