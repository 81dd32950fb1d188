//! Simulator harness for end-to-end pipeline tests.

use std::collections::BTreeMap;

use rv32sim_core::common::constants::SENTINEL;
use rv32sim_core::core::pipeline::signals::MemWidth;
use rv32sim_core::sim::loader::Program;
use rv32sim_core::{Config, Simulator};

/// A configured simulator plus a loaded program.
pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Default toggles: pipelining and forwarding both enabled.
    pub fn new() -> Self {
        Self::with_toggles(true, true)
    }

    /// Explicit pipeline toggles.
    pub fn with_toggles(pipelining: bool, forwarding: bool) -> Self {
        let mut config = Config::default();
        config.pipeline.pipelining = pipelining;
        config.pipeline.forwarding = forwarding;
        Self {
            sim: Simulator::new(&config),
        }
    }

    /// Loads `instructions` contiguously at `addr`, appends the
    /// end-of-program sentinel, and sets the entry point.
    pub fn load_program(mut self, addr: u32, instructions: &[u32]) -> Self {
        let mut text = BTreeMap::new();
        for (i, &inst) in instructions.iter().enumerate() {
            let _ = text.insert(addr + 4 * i as u32, inst);
        }
        let _ = text.insert(addr + 4 * instructions.len() as u32, SENTINEL);
        let program = Program {
            text,
            data: BTreeMap::new(),
            entry: addr,
        };
        self.sim.load(&program);
        self
    }

    /// Preloads one word of data memory.
    pub fn preload_word(&mut self, addr: u32, value: u32) {
        self.sim.cpu.mem.write(addr, value, MemWidth::Word);
    }

    /// Reads a general-purpose register.
    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.cpu.regs.read(reg)
    }

    /// Reads one word of data memory.
    pub fn read_word(&self, addr: u32) -> u32 {
        self.sim.cpu.mem.read(addr, MemWidth::Word)
    }

    /// Runs to completion; panics if the cycle safety limit trips.
    pub fn run(&mut self) {
        self.sim.run().expect("program exceeded the cycle limit");
    }

    /// Elapsed cycles.
    pub fn cycles(&self) -> u64 {
        self.sim.cpu.stats.cycles
    }
}
