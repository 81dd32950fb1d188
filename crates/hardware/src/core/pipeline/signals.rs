//! Pipeline control signals and operation types.
//!
//! This module defines the closed enumerations carried through the latches.
//! Everything an instruction needs downstream is decided once, in Decode:
//! 1. **Operation classification:** ALU, branch, jump, and upper-immediate ops.
//! 2. **Writeback selection:** ALU result, memory data, or link address.
//! 3. **Memory control:** access width for loads and stores.

/// Operation tag produced by Decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AluOp {
    /// Bubble / no operation.
    #[default]
    Nop,

    /// Integer addition (also address generation for loads/stores).
    Add,
    /// Integer subtraction.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,

    /// Integer multiply (low 32 bits).
    Mul,
    /// Integer multiply (high bits, signed × signed).
    Mulh,
    /// Integer multiply (high bits, signed × unsigned).
    Mulhsu,
    /// Integer multiply (high bits, unsigned × unsigned).
    Mulhu,
    /// Integer divide (signed).
    Div,
    /// Integer divide (unsigned).
    Divu,
    /// Integer remainder (signed).
    Rem,
    /// Integer remainder (unsigned).
    Remu,

    /// Branch if equal.
    Beq,
    /// Branch if not equal.
    Bne,
    /// Branch if less than (signed).
    Blt,
    /// Branch if greater or equal (signed).
    Bge,
    /// Branch if less than unsigned.
    Bltu,
    /// Branch if greater or equal unsigned.
    Bgeu,

    /// Jump and link (PC-relative target).
    Jal,
    /// Jump and link register (register+immediate target, low bit cleared).
    Jalr,

    /// Load upper immediate.
    Lui,
    /// Add upper immediate to PC.
    Auipc,

    /// End-of-program sentinel; retires as a no-op and halts the run loop.
    Halt,
    /// Unrecognized encoding; behaves as a no-op downstream.
    Invalid,
}

/// Source of the value committed by Writeback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WbSrc {
    /// ALU / address / upper-immediate result.
    #[default]
    Alu,
    /// Data read by the Memory stage.
    Mem,
    /// Link address (PC + 4) for `JAL`/`JALR`.
    Link,
}

/// Memory access width for load and store operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MemWidth {
    /// 8-bit byte access.
    Byte,
    /// 16-bit half-word access.
    Half,
    /// 32-bit word access.
    #[default]
    Word,
}

impl MemWidth {
    /// Number of bytes transferred at this width.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }
}

/// Control signals decided in Decode and carried by value through the latches.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlSignals {
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable memory read (load).
    pub mem_read: bool,
    /// Enable memory write (store).
    pub mem_write: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Instruction is an unconditional jump (`JAL`/`JALR`).
    pub jump: bool,
    /// Second ALU operand is the immediate rather than `rs2`.
    pub use_imm: bool,
    /// Source of the committed value.
    pub wb_src: WbSrc,
    /// Width of memory access.
    pub width: MemWidth,
    /// Operation to perform in Execute.
    pub alu: AluOp,
}
