//! Engine state.
//!
//! One `Cpu` owns everything the simulation mutates: register file, data and
//! instruction memory, program counter, the four pipeline latches, the
//! branch predictor, and the statistics counters. All of it is public for
//! per-cycle introspection by an observer; during a tick each shared
//! resource is mutated by exactly one stage (Writeback, Memory, and Execute
//! respectively).

use std::collections::BTreeMap;

use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::core::memory::Memory;
use crate::core::pipeline::engine;
use crate::core::pipeline::latches::Latches;
use crate::core::units::bru::BranchPredictor;
use crate::stats::SimStats;

/// Full engine state for one simulated processor.
#[derive(Debug, Clone, Default)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Data memory (instruction bytes mirrored in at load time).
    pub mem: Memory,
    /// Instruction memory: word-aligned address to instruction word.
    pub imem: BTreeMap<u32, u32>,
    /// Program counter.
    pub pc: u32,
    /// The four pipeline latches.
    pub latches: Latches,
    /// Branch prediction unit.
    pub bpu: BranchPredictor,
    /// Execution statistics.
    pub stats: SimStats,
    /// Overlap instructions in the pipeline.
    pub pipelining: bool,
    /// Bypass uncommitted results to Execute.
    pub forwarding: bool,
    /// Emit per-cycle stage activity on stderr.
    pub trace: bool,
    /// The program has finished.
    pub halted: bool,
}

impl Cpu {
    /// Creates a halted-at-reset CPU with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            pipelining: config.pipeline.pipelining,
            forwarding: config.pipeline.forwarding,
            trace: config.general.trace,
            ..Default::default()
        }
    }

    /// Advances the simulation by one clock cycle (pipelined) or one
    /// instruction (sequential). Does nothing once halted.
    pub fn tick(&mut self) {
        if self.halted {
            return;
        }
        if self.pipelining {
            engine::tick_pipelined(self);
        } else {
            engine::tick_sequential(self);
        }
    }

    /// Prints the program counter, the register file, and the latch set.
    pub fn dump_state(&self) {
        println!("pc = {:#010x}", self.pc);
        self.regs.dump();
        println!("  {}", self.latches.if_id);
        println!("  {}", self.latches.id_ex);
        println!("  {}", self.latches.ex_mem);
        println!("  {}", self.latches.mem_wb);
    }
}
