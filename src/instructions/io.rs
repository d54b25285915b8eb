//! # Output Instructions

use crate::opcodes::OpcodeMetadata;
use crate::{ExecutionError, MemoryBus, Output, CPU};

/// Executes PRN (0x06): emits the current register to the output.
pub(crate) fn execute_prn<M: MemoryBus, O: Output>(
    cpu: &mut CPU<M, O>,
    metadata: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let value = cpu.regs.get(cpu.cur_reg);
    cpu.output.print(value);

    cpu.advance_pc(metadata.size_bytes);

    Ok(())
}
