//! Major opcode values (bits 0-6) for the base integer set.

/// Load instructions (`LB`, `LH`, `LW`).
pub const OP_LOAD: u32 = 0x03;
/// Register-immediate ALU instructions (`ADDI`, `SLTI`, ...).
pub const OP_IMM: u32 = 0x13;
/// Add upper immediate to PC (`AUIPC`).
pub const OP_AUIPC: u32 = 0x17;
/// Store instructions (`SB`, `SH`, `SW`).
pub const OP_STORE: u32 = 0x23;
/// Register-register ALU instructions (`ADD`, `SUB`, ...).
pub const OP_REG: u32 = 0x33;
/// Load upper immediate (`LUI`).
pub const OP_LUI: u32 = 0x37;
/// Conditional branches (`BEQ`, `BNE`, ...).
pub const OP_BRANCH: u32 = 0x63;
/// Jump and link register (`JALR`).
pub const OP_JALR: u32 = 0x67;
/// Jump and link (`JAL`).
pub const OP_JAL: u32 = 0x6F;
