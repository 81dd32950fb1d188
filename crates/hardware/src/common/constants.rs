//! Architectural and simulation-wide constants.

/// Reserved instruction word marking end-of-program. The run loop halts once
/// this word has propagated through Writeback.
pub const SENTINEL: u32 = 0xDEAD_BEEF;

/// Size of one instruction in bytes. The subset has no compressed forms.
pub const INST_BYTES: u32 = 4;

/// Register index of the stack pointer (x2).
pub const REG_SP: usize = 2;

/// Initial stack pointer value seeded at program load.
pub const STACK_TOP: u32 = 0x7FFF_FFDC;
