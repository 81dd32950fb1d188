//! Pipeline engine: one clock cycle per call.
//!
//! Implements the synchronous-latch discipline as a double buffer: the
//! previous cycle's latch set is taken by value at the start of a tick,
//! every stage reads only that snapshot (or the next-cycle entries the
//! hazard rules are defined over), and the freshly built set is installed at
//! the end. No stage can observe a same-cycle write made by another stage.
//!
//! Within a tick the stages run downstream-first:
//! 1. Writeback commits the previous MEM/WB entry, so Decode (later in the
//!    same tick) reads post-commit register values.
//! 2. Memory and Execute produce the next MEM/WB and EX/MEM entries.
//! 3. A misprediction from Execute discards the speculatively fetched IF/ID
//!    entry and corrects the pc; the flush overrides any stall.
//! 4. Decode produces the next ID/EX entry; the hazard unit checks it
//!    against the instructions that will occupy EX/MEM and MEM/WB next
//!    cycle. On a stall the IF/ID entry is re-offered and a bubble is
//!    injected downstream.
//! 5. Fetch runs only when Decode consumed its input.

use crate::common::constants::SENTINEL;
use crate::core::Cpu;
use crate::core::pipeline::hazards::{need_stall_load_use, need_stall_raw};
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, Latches, MemWbEntry};
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, memory_stage, writeback_stage,
};

/// Advances the pipelined engine by one clock cycle.
pub fn tick_pipelined(cpu: &mut Cpu) {
    let mut cur = std::mem::take(&mut cpu.latches);
    let mut next = Latches::default();

    writeback_stage(cpu, &cur.mem_wb);
    next.mem_wb = memory_stage(cpu, &cur.ex_mem);
    let (ex_entry, redirect) = execute_stage(cpu, &cur.id_ex, &cur.ex_mem, &cur.mem_wb);
    next.ex_mem = ex_entry;

    if let Some(target) = redirect {
        cpu.pc = target;
        cpu.bpu.record_mispredict();
        cpu.stats.flushes += 1;
        // Discard the wrong-path instruction waiting in IF/ID; Decode then
        // emits a bubble into ID/EX, clearing both younger slots.
        cur.if_id = IfIdEntry::default();
    }

    let decoded = decode_stage(cpu, &cur.if_id);
    let stall_load_use = need_stall_load_use(&decoded, &next.ex_mem);
    let stall_raw =
        !cpu.forwarding && !stall_load_use && need_stall_raw(&decoded, &next.ex_mem, &next.mem_wb);

    if stall_load_use || stall_raw {
        next.id_ex = IdExEntry::default();
        next.if_id = cur.if_id;
        if stall_load_use {
            cpu.stats.stalls_load_use += 1;
        } else {
            cpu.stats.stalls_raw += 1;
        }
        if cpu.trace {
            eprintln!(
                "ID  pc={:#010x} stall ({})",
                next.if_id.pc,
                if stall_load_use { "load-use" } else { "raw" }
            );
        }
    } else {
        next.id_ex = decoded;
        next.if_id = fetch_stage(cpu);
    }

    let sentinel_retired = cur.mem_wb.valid && cur.mem_wb.inst == SENTINEL;
    cpu.latches = next;
    cpu.stats.cycles += 1;

    let drained = !cpu.latches.any_valid() && !cpu.imem.contains_key(&cpu.pc);
    if sentinel_retired || drained {
        cpu.halted = true;
    }
}

/// Advances the sequential (non-pipelined) engine by one instruction.
///
/// All five stage transforms run to completion on a single instruction, so
/// no hazard can exist and no speculation happens: fetch assumes
/// fall-through, and a taken branch or jump simply corrects the pc after
/// resolution. The predictor tables still learn outcomes, but no predictions
/// or mispredictions are counted.
pub fn tick_sequential(cpu: &mut Cpu) {
    let pc = cpu.pc;
    let Some(inst) = cpu.imem.get(&pc).copied() else {
        cpu.halted = true;
        return;
    };
    if inst == SENTINEL {
        cpu.halted = true;
        return;
    }

    let fall_through = pc.wrapping_add(4);
    let if_id = IfIdEntry {
        valid: true,
        pc,
        inst,
        next_pc: fall_through,
        pred_taken: false,
        pred_target: fall_through,
    };
    cpu.pc = fall_through;

    let id_ex = decode_stage(cpu, &if_id);
    let (ex_mem, redirect) =
        execute_stage(cpu, &id_ex, &ExMemEntry::default(), &MemWbEntry::default());
    if let Some(target) = redirect {
        cpu.pc = target;
    }
    let mem_wb = memory_stage(cpu, &ex_mem);
    writeback_stage(cpu, &mem_wb);

    cpu.stats.cycles += 1;
}
