//! Execution statistics.
//!
//! Counters are updated by the pipeline engine as instructions move through
//! the stages and are printed in sections at the end of a run. Predictor
//! accuracy counters live on the predictor itself and are reported alongside
//! these.

/// Aggregate counters for one simulation run.
#[derive(Debug, Clone, Default)]
pub struct SimStats {
    /// Elapsed clock cycles (one per `tick` in pipelined mode, one per
    /// instruction in sequential mode).
    pub cycles: u64,
    /// Instructions that completed Writeback (bubbles excluded).
    pub instructions_retired: u64,

    /// Retired ALU / upper-immediate instructions.
    pub inst_alu: u64,
    /// Retired loads.
    pub inst_load: u64,
    /// Retired stores.
    pub inst_store: u64,
    /// Retired conditional branches.
    pub inst_branch: u64,
    /// Retired unconditional jumps.
    pub inst_jump: u64,

    /// Cycles lost to load-use stalls (structural, independent of forwarding).
    pub stalls_load_use: u64,
    /// Cycles lost to correctness stalls in the no-forwarding configuration.
    pub stalls_raw: u64,
    /// Misprediction flushes (one discarded fetch slot each).
    pub flushes: u64,
}

impl SimStats {
    /// Instructions per cycle over the whole run.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Prints all sections to stdout.
    pub fn print(&self) {
        println!("==================== Simulation Statistics ====================");
        println!("[Summary]");
        println!("  Cycles:               {}", self.cycles);
        println!("  Instructions retired: {}", self.instructions_retired);
        println!("  IPC:                  {:.3}", self.ipc());
        println!();
        println!("[Instruction Mix]");
        println!("  ALU:    {}", self.inst_alu);
        println!("  Load:   {}", self.inst_load);
        println!("  Store:  {}", self.inst_store);
        println!("  Branch: {}", self.inst_branch);
        println!("  Jump:   {}", self.inst_jump);
        println!();
        println!("[Pipeline Events]");
        println!("  Load-use stalls:   {}", self.stalls_load_use);
        println!("  RAW stalls:        {}", self.stalls_raw);
        println!("  Mispredict flushes: {}", self.flushes);
        println!("===============================================================");
    }
}
