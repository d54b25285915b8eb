//! # Load and Store Instructions
//!
//! - SAVE: current register ← immediate
//! - LD: current register ← memory[operand]
//! - ST: memory[operand] ← current register
//!
//! LD and ST go through the MAR/MDR pair: the operand is fetched into MDR,
//! moved to MAR, and the data cell is then loaded into or stored from MDR.

use crate::opcodes::OpcodeMetadata;
use crate::{ExecutionError, MemoryBus, Output, CPU};

/// Executes SAVE (0x04): current register ← operand byte.
pub(crate) fn execute_save<M: MemoryBus, O: Output>(
    cpu: &mut CPU<M, O>,
    metadata: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(1);
    cpu.regs.set(cpu.cur_reg, value);
    cpu.advance_pc(metadata.size_bytes);

    Ok(())
}

/// Executes LD (0x08): indirect load from the address named by the operand.
pub(crate) fn execute_ld<M: MemoryBus, O: Output>(
    cpu: &mut CPU<M, O>,
    metadata: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let address = cpu.read_operand(1);

    cpu.regs.mar = address;
    cpu.load_mem();
    cpu.regs.set(cpu.cur_reg, cpu.regs.mdr);

    cpu.advance_pc(metadata.size_bytes);

    Ok(())
}

/// Executes ST (0x09): store the current register at the operand address.
pub(crate) fn execute_st<M: MemoryBus, O: Output>(
    cpu: &mut CPU<M, O>,
    metadata: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let address = cpu.read_operand(1);

    cpu.regs.mar = address;
    cpu.regs.mdr = cpu.regs.get(cpu.cur_reg);
    cpu.store_mem();

    cpu.advance_pc(metadata.size_bytes);

    Ok(())
}
