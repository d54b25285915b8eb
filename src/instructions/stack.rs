//! # Stack Operations
//!
//! - PUSH: SP ← SP - 1, memory[SP] ← current register
//! - POP: current register ← memory[SP], SP ← SP + 1
//!
//! The stack lives in the same 256 bytes as program and data and grows
//! downward. SP is general register 255, starts at 0, so the first PUSH
//! writes to address 0xFF. SP wraps in both directions.

use crate::alu::{AluOp, AluTarget};
use crate::opcodes::OpcodeMetadata;
use crate::registers::SP;
use crate::{ExecutionError, MemoryBus, Output, CPU};

/// Executes PUSH (0x0A).
pub(crate) fn execute_push<M: MemoryBus, O: Output>(
    cpu: &mut CPU<M, O>,
    metadata: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.alu(AluOp::Dec(AluTarget::Register(SP)));

    cpu.regs.mar = cpu.regs.sp();
    cpu.regs.mdr = cpu.regs.get(cpu.cur_reg);
    cpu.store_mem();

    cpu.advance_pc(metadata.size_bytes);

    Ok(())
}

/// Executes POP (0x0B).
pub(crate) fn execute_pop<M: MemoryBus, O: Output>(
    cpu: &mut CPU<M, O>,
    metadata: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.regs.mar = cpu.regs.sp();
    cpu.load_mem();
    cpu.regs.set(cpu.cur_reg, cpu.regs.mdr);

    cpu.alu(AluOp::Inc(AluTarget::Register(SP)));

    cpu.advance_pc(metadata.size_bytes);

    Ok(())
}
