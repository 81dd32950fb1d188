//! `funct3` selector values for the multiply/divide group.

/// `MUL` (low 32 bits).
pub const MUL: u32 = 0b000;
/// `MULH` (high 32 bits, signed × signed).
pub const MULH: u32 = 0b001;
/// `MULHSU` (high 32 bits, signed × unsigned).
pub const MULHSU: u32 = 0b010;
/// `MULHU` (high 32 bits, unsigned × unsigned).
pub const MULHU: u32 = 0b011;
/// `DIV` (signed).
pub const DIV: u32 = 0b100;
/// `DIVU` (unsigned).
pub const DIVU: u32 = 0b101;
/// `REM` (signed).
pub const REM: u32 = 0b110;
/// `REMU` (unsigned).
pub const REMU: u32 = 0b111;
