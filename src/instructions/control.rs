//! # Control Flow Instructions
//!
//! - HALT: stop the clock
//! - INIT: select register 0
//! - SET: select the register named by the operand
//! - JMP: jump to an absolute address
//! - JEQ / JNE: jump if the `equal` flag is set / clear
//!
//! Jump targets are read through MAR/MDR. A conditional jump that is not
//! taken falls through by its instruction size.

use crate::opcodes::OpcodeMetadata;
use crate::{ExecutionError, MemoryBus, Output, RunState, CPU};

/// Executes HALT (0x00).
///
/// Moves the CPU to HALTED without advancing PC, so PC keeps pointing at
/// the HALT instruction.
pub(crate) fn execute_halt<M: MemoryBus, O: Output>(
    cpu: &mut CPU<M, O>,
    _metadata: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.state = RunState::Halted;
    log::debug!("halted at PC 0x{:02X}", cpu.regs.pc);

    Ok(())
}

/// Executes INIT (0x01): current register ← 0.
pub(crate) fn execute_init<M: MemoryBus, O: Output>(
    cpu: &mut CPU<M, O>,
    metadata: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.cur_reg = 0;
    cpu.advance_pc(metadata.size_bytes);

    Ok(())
}

/// Executes SET (0x02): current register ← operand.
pub(crate) fn execute_set<M: MemoryBus, O: Output>(
    cpu: &mut CPU<M, O>,
    metadata: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.cur_reg = cpu.read_operand(1);
    cpu.advance_pc(metadata.size_bytes);

    Ok(())
}

/// Executes JMP (0x11): PC ← operand address.
pub(crate) fn execute_jmp<M: MemoryBus, O: Output>(
    cpu: &mut CPU<M, O>,
    _metadata: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.regs.pc = cpu.read_operand(1);

    Ok(())
}

/// Executes JEQ (0x13): jump if the last CMP found its operands equal.
pub(crate) fn execute_jeq<M: MemoryBus, O: Output>(
    cpu: &mut CPU<M, O>,
    metadata: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let taken = cpu.flags.equal;
    branch(cpu, metadata, taken);

    Ok(())
}

/// Executes JNE (0x14): jump if the last CMP found its operands different.
pub(crate) fn execute_jne<M: MemoryBus, O: Output>(
    cpu: &mut CPU<M, O>,
    metadata: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let taken = !cpu.flags.equal;
    branch(cpu, metadata, taken);

    Ok(())
}

fn branch<M: MemoryBus, O: Output>(cpu: &mut CPU<M, O>, metadata: &OpcodeMetadata, taken: bool) {
    if taken {
        cpu.regs.pc = cpu.read_operand(1);
    } else {
        cpu.advance_pc(metadata.size_bytes);
    }
}
