//! # ALU (Arithmetic Logic Unit)
//!
//! Stateless operations over the register file:
//! - ADD, MUL: return the 8-bit result; the caller stores it
//! - INC, DEC: modify a register (or the PC) in place
//! - CMP: sets the `equal` flag
//!
//! All arithmetic wraps modulo 256.

use crate::registers::{Flags, RegisterFile};

/// Something INC/DEC can modify in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluTarget {
    /// A general register (includes SP at register 255).
    Register(u8),
    /// The program counter.
    Pc,
}

/// An ALU operation with its operands.
///
/// Register operands are register ids, not values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add(u8, u8),
    Mul(u8, u8),
    Inc(AluTarget),
    Dec(AluTarget),
    Cmp(u8, u8),
}

/// Applies `op` to the register file.
///
/// Returns `Some(result)` for ADD and MUL, `None` for the in-place operations.
///
/// # Examples
///
/// ```
/// use lib8bit::{alu, AluOp, AluTarget, Flags, RegisterFile};
///
/// let mut regs = RegisterFile::new();
/// let mut flags = Flags::default();
/// regs.set(0, 200);
/// regs.set(1, 100);
///
/// assert_eq!(alu::apply(&mut regs, &mut flags, AluOp::Add(0, 1)), Some(44));
///
/// alu::apply(&mut regs, &mut flags, AluOp::Dec(AluTarget::Register(2)));
/// assert_eq!(regs.get(2), 0xFF);
/// ```
pub fn apply(regs: &mut RegisterFile, flags: &mut Flags, op: AluOp) -> Option<u8> {
    match op {
        AluOp::Add(a, b) => Some(regs.get(a).wrapping_add(regs.get(b))),
        AluOp::Mul(a, b) => Some(regs.get(a).wrapping_mul(regs.get(b))),
        AluOp::Inc(target) => {
            update(regs, target, |v| v.wrapping_add(1));
            None
        }
        AluOp::Dec(target) => {
            update(regs, target, |v| v.wrapping_sub(1));
            None
        }
        AluOp::Cmp(a, b) => {
            flags.equal = regs.get(a) == regs.get(b);
            None
        }
    }
}

fn update(regs: &mut RegisterFile, target: AluTarget, f: impl Fn(u8) -> u8) {
    match target {
        AluTarget::Register(id) => {
            let value = f(regs.get(id));
            regs.set(id, value);
        }
        AluTarget::Pc => regs.pc = f(regs.pc),
    }
}
