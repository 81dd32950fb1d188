//! General-Purpose Register File.
//!
//! Thirty-two 32-bit registers. Register `x0` is hardwired to zero: writes to
//! it are dropped and reads always return 0. Only the Writeback stage mutates
//! this file during execution (the loader seeds the stack pointer once).

/// The 32-entry integer register file.
#[derive(Debug, Clone, Default)]
pub struct Gpr([u32; 32]);

impl Gpr {
    /// Reads register `idx`. Index 0 always reads 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.0[idx] }
    }

    /// Writes register `idx`. Writes to index 0 are ignored.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.0[idx] = val;
        }
    }

    /// Prints all registers, four per row.
    pub fn dump(&self) {
        for row in 0..8 {
            let base = row * 4;
            println!(
                "  x{:<2}={:#010x}  x{:<2}={:#010x}  x{:<2}={:#010x}  x{:<2}={:#010x}",
                base,
                self.read(base),
                base + 1,
                self.read(base + 1),
                base + 2,
                self.read(base + 2),
                base + 3,
                self.read(base + 3)
            );
        }
    }
}
