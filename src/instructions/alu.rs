//! # ALU Instructions
//!
//! - ADD: current register ← reg[op1] + reg[op2]
//! - MUL: current register ← reg[op1] * reg[op2]
//! - CMP: equal ← (current register == reg[op])
//!
//! Results wrap modulo 256.

use crate::alu::AluOp;
use crate::opcodes::OpcodeMetadata;
use crate::{ExecutionError, MemoryBus, Output, CPU};

/// Executes ADD (0x0C).
pub(crate) fn execute_add<M: MemoryBus, O: Output>(
    cpu: &mut CPU<M, O>,
    metadata: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let reg0 = cpu.read_operand(1);
    let reg1 = cpu.read_operand(2);

    store_result(cpu, AluOp::Add(reg0, reg1));
    cpu.advance_pc(metadata.size_bytes);

    Ok(())
}

/// Executes MUL (0x05).
pub(crate) fn execute_mul<M: MemoryBus, O: Output>(
    cpu: &mut CPU<M, O>,
    metadata: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let reg0 = cpu.read_operand(1);
    let reg1 = cpu.read_operand(2);

    store_result(cpu, AluOp::Mul(reg0, reg1));
    cpu.advance_pc(metadata.size_bytes);

    Ok(())
}

/// Executes CMP (0x16).
///
/// The operand is a register id. Only the `equal` flag changes.
pub(crate) fn execute_cmp<M: MemoryBus, O: Output>(
    cpu: &mut CPU<M, O>,
    metadata: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let other = cpu.read_operand(1);

    cpu.alu(AluOp::Cmp(cpu.cur_reg, other));
    cpu.advance_pc(metadata.size_bytes);

    Ok(())
}

fn store_result<M: MemoryBus, O: Output>(cpu: &mut CPU<M, O>, op: AluOp) {
    if let Some(result) = cpu.alu(op) {
        cpu.regs.set(cpu.cur_reg, result);
    }
}
