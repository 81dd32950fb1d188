//! Sparse byte-addressable data memory.
//!
//! A sorted map from address to byte. Undefined addresses read as 0.
//! Multi-byte accesses are little-endian and may straddle any alignment.
//! Mutated only by the Memory stage (stores) and by program load.

use std::collections::BTreeMap;

use crate::core::pipeline::signals::MemWidth;

/// Sparse little-endian byte store.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    bytes: BTreeMap<u32, u8>,
}

impl Memory {
    /// Reads `width` bytes starting at `addr`, little-endian, zero-extended
    /// to 32 bits. Sign extension for sub-word loads happens in the Memory
    /// stage, not here.
    pub fn read(&self, addr: u32, width: MemWidth) -> u32 {
        let mut value = 0u32;
        for i in 0..width.bytes() {
            let byte = self.read_byte(addr.wrapping_add(i));
            value |= u32::from(byte) << (8 * i);
        }
        value
    }

    /// Writes the low `width` bytes of `value` starting at `addr`,
    /// little-endian.
    pub fn write(&mut self, addr: u32, value: u32, width: MemWidth) {
        for i in 0..width.bytes() {
            let byte = (value >> (8 * i)) as u8;
            self.write_byte(addr.wrapping_add(i), byte);
        }
    }

    /// Reads one byte; undefined addresses read as 0.
    pub fn read_byte(&self, addr: u32) -> u8 {
        self.bytes.get(&addr).copied().unwrap_or(0)
    }

    /// Writes one byte.
    pub fn write_byte(&mut self, addr: u32, byte: u8) {
        let _ = self.bytes.insert(addr, byte);
    }

    /// Iterates all initialized bytes in address order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u8)> + '_ {
        self.bytes.iter().map(|(&addr, &byte)| (addr, byte))
    }

    /// Number of initialized bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether no byte has been initialized.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
