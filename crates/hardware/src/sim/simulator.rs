//! The run loop.
//!
//! Owns the CPU, loads a parsed program into it, and ticks until the engine
//! halts or the external cycle safety limit trips.

use crate::common::constants::{REG_SP, STACK_TOP};
use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::signals::MemWidth;
use crate::sim::loader::Program;

/// Simulation driver wrapping one CPU.
#[derive(Debug)]
pub struct Simulator {
    /// The simulated processor, public for introspection.
    pub cpu: Cpu,
    max_cycles: u64,
}

impl Simulator {
    /// Creates a simulator with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            max_cycles: config.general.max_cycles,
        }
    }

    /// Loads a program image: fills instruction memory, mirrors the
    /// instruction bytes into data memory (so self-referential loads observe
    /// code bytes), places initialized data, sets the entry pc, and seeds
    /// the stack pointer.
    pub fn load(&mut self, program: &Program) {
        for (&addr, &word) in &program.text {
            let _ = self.cpu.imem.insert(addr, word);
            self.cpu.mem.write(addr, word, MemWidth::Word);
        }
        for (&addr, &byte) in &program.data {
            self.cpu.mem.write_byte(addr, byte);
        }
        self.cpu.pc = program.entry;
        self.cpu.regs.write(REG_SP, STACK_TOP);
        self.cpu.halted = false;
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) {
        self.cpu.tick();
    }

    /// Runs until the program halts. Errors out if the cycle safety limit is
    /// exceeded first.
    pub fn run(&mut self) -> Result<(), SimError> {
        while !self.cpu.halted {
            if self.cpu.stats.cycles >= self.max_cycles {
                return Err(SimError::CycleLimit {
                    limit: self.max_cycles,
                });
            }
            self.cpu.tick();
        }
        Ok(())
    }
}
