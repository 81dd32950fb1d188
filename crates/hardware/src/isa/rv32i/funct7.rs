//! `funct7` selector values (bits 25-31) for register-register and shift forms.

/// Base variant (`ADD`, `SRL`, ...).
pub const BASE: u32 = 0b000_0000;
/// Alternate variant (`SUB`, `SRA`).
pub const ALT: u32 = 0b010_0000;
