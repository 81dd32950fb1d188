//! Integer Arithmetic/Logic Unit.
//!
//! Evaluates the register-register and register-immediate operation tags.
//! Shift amounts use only the low 5 bits of the second operand. Divide and
//! remainder follow the RISC-V convention for the edge cases: division by
//! zero yields all ones (quotient) or the dividend (remainder), and the
//! signed overflow `i32::MIN / -1` yields `i32::MIN` with remainder 0.

use crate::core::pipeline::signals::AluOp;

/// Stateless ALU evaluator.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Computes `op` over operands `a` and `b`. Non-arithmetic tags
    /// (branches, jumps, upper-immediates, bubbles) yield 0; the Execute
    /// stage handles those itself.
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Sll => a.wrapping_shl(b & 0x1F),
            AluOp::Slt => u32::from((a as i32) < (b as i32)),
            AluOp::Sltu => u32::from(a < b),
            AluOp::Xor => a ^ b,
            AluOp::Srl => a.wrapping_shr(b & 0x1F),
            AluOp::Sra => ((a as i32).wrapping_shr(b & 0x1F)) as u32,
            AluOp::Or => a | b,
            AluOp::And => a & b,

            AluOp::Mul => a.wrapping_mul(b),
            AluOp::Mulh => {
                ((i64::from(a as i32).wrapping_mul(i64::from(b as i32))) >> 32) as u32
            }
            AluOp::Mulhsu => ((i64::from(a as i32).wrapping_mul(i64::from(b))) >> 32) as u32,
            AluOp::Mulhu => ((u64::from(a) * u64::from(b)) >> 32) as u32,

            AluOp::Div => {
                let (a, b) = (a as i32, b as i32);
                if b == 0 {
                    u32::MAX
                } else if a == i32::MIN && b == -1 {
                    a as u32
                } else {
                    a.wrapping_div(b) as u32
                }
            }
            AluOp::Divu => {
                if b == 0 {
                    u32::MAX
                } else {
                    a / b
                }
            }
            AluOp::Rem => {
                let (sa, sb) = (a as i32, b as i32);
                if sb == 0 {
                    a
                } else if sa == i32::MIN && sb == -1 {
                    0
                } else {
                    sa.wrapping_rem(sb) as u32
                }
            }
            AluOp::Remu => {
                if b == 0 {
                    a
                } else {
                    a % b
                }
            }

            _ => 0,
        }
    }
}
