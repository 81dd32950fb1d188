//! Branch Prediction Unit.
//!
//! A per-address 1-bit last-outcome predictor with a branch target cache
//! (BTB). Fetch queries it to pick the next speculative address; Execute
//! updates it with every resolved branch/jump outcome. Tables grow
//! monotonically over a run (no eviction).
//!
//! The target cache is written only on a taken resolution: an address that
//! alternates taken/not-taken keeps its last taken target even while the
//! direction bit says not-taken. The stale target is never consulted for a
//! not-taken prediction, so this is harmless and kept as designed.

use std::collections::BTreeMap;

use crate::common::constants::INST_BYTES;

/// 1-bit direction predictor with a branch target cache.
#[derive(Debug, Clone, Default)]
pub struct BranchPredictor {
    history: BTreeMap<u32, bool>,
    targets: BTreeMap<u32, u32>,
    /// Directions predicted (one per Fetch-stage query).
    pub predictions: u64,
    /// Predictions that Execute found wrong (direction or target).
    pub mispredictions: u64,
}

impl BranchPredictor {
    /// Predicted direction for `pc`. Unseen addresses predict not-taken.
    /// Counts one prediction.
    pub fn predict_taken(&mut self, pc: u32) -> bool {
        self.predictions += 1;
        self.history.get(&pc).copied().unwrap_or(false)
    }

    /// Predicted target for `pc`; fall-through when the target cache has no
    /// entry.
    pub fn predicted_target(&self, pc: u32) -> u32 {
        self.targets
            .get(&pc)
            .copied()
            .unwrap_or(pc.wrapping_add(INST_BYTES))
    }

    /// Whether the target cache holds an entry for `pc`.
    pub fn in_btb(&self, pc: u32) -> bool {
        self.targets.contains_key(&pc)
    }

    /// Records a resolved outcome. The direction bit always takes the actual
    /// outcome; the target is cached only when the resolution was taken.
    pub fn update(&mut self, pc: u32, taken: bool, target: u32) {
        let _ = self.history.insert(pc, taken);
        if taken {
            let _ = self.targets.insert(pc, target);
        }
    }

    /// Counts one misprediction (called by the engine on flush).
    pub fn record_mispredict(&mut self) {
        self.mispredictions += 1;
    }

    /// Per-address direction table, in address order.
    pub fn history(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        self.history.iter().map(|(&pc, &taken)| (pc, taken))
    }

    /// Per-address target table, in address order.
    pub fn targets(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.targets.iter().map(|(&pc, &target)| (pc, target))
    }

    /// Prints the accuracy counters and both tables.
    pub fn dump(&self) {
        println!("[Branch Predictor]");
        println!("  Predictions:    {}", self.predictions);
        println!("  Mispredictions: {}", self.mispredictions);
        if self.predictions > 0 {
            let hit = self.predictions - self.mispredictions;
            println!(
                "  Accuracy:       {:.1}%",
                hit as f64 / self.predictions as f64 * 100.0
            );
        }
        for (pc, taken) in self.history() {
            let target = self
                .targets
                .get(&pc)
                .map_or_else(|| "-".to_string(), |t| format!("{t:#010x}"));
            println!(
                "  {:#010x}: {:9}  target={}",
                pc,
                if taken { "taken" } else { "not-taken" },
                target
            );
        }
    }
}
