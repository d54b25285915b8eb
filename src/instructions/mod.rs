//! # Instruction Implementations
//!
//! One handler per opcode, grouped by category. Each handler takes the CPU and
//! the opcode's table entry, performs the state transition and leaves PC on
//! the next instruction to fetch.
//!
//! ## Categories
//!
//! - **control**: HALT, INIT, SET, JMP, JEQ, JNE
//! - **load_store**: SAVE, LD, ST
//! - **alu**: ADD, MUL, CMP
//! - **stack**: PUSH, POP
//! - **io**: PRN

pub mod alu;
pub mod control;
pub mod io;
pub mod load_store;
pub mod stack;

use crate::opcodes::{Instruction, OpcodeMetadata};
use crate::{ExecutionError, MemoryBus, Output, CPU};

/// Runs the handler for a decoded opcode.
pub(crate) fn execute<M: MemoryBus, O: Output>(
    cpu: &mut CPU<M, O>,
    metadata: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    match metadata.instruction {
        Instruction::Halt => control::execute_halt(cpu, metadata),
        Instruction::Init => control::execute_init(cpu, metadata),
        Instruction::Set => control::execute_set(cpu, metadata),
        Instruction::Jmp => control::execute_jmp(cpu, metadata),
        Instruction::Jeq => control::execute_jeq(cpu, metadata),
        Instruction::Jne => control::execute_jne(cpu, metadata),
        Instruction::Save => load_store::execute_save(cpu, metadata),
        Instruction::Ld => load_store::execute_ld(cpu, metadata),
        Instruction::St => load_store::execute_st(cpu, metadata),
        Instruction::Add => alu::execute_add(cpu, metadata),
        Instruction::Mul => alu::execute_mul(cpu, metadata),
        Instruction::Cmp => alu::execute_cmp(cpu, metadata),
        Instruction::Push => stack::execute_push(cpu, metadata),
        Instruction::Pop => stack::execute_pop(cpu, metadata),
        Instruction::Prn => io::execute_prn(cpu, metadata),
    }
}
