//! # 8-bit Stored-Program Computer Simulator
//!
//! A simulator for a minimal 8-bit machine: 256 bytes of memory, 256 general
//! registers, a program counter, a byte-addressed stack and a single `equal`
//! flag. Instructions are fetched from memory, decoded against a fixed opcode
//! table and executed one per clock tick.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib8bit::{BufferedOutput, FlatMemory, CPU};
//!
//! // SET R0, SAVE 5, SET R1, SAVE 3, SET R0, ADD R0 R1, PRN, HALT
//! let program = [
//!     0x02, 0x00, 0x04, 0x05, 0x02, 0x01, 0x04, 0x03, 0x02, 0x00, 0x0C, 0x00, 0x01, 0x06, 0x00,
//! ];
//!
//! let mut cpu = CPU::new(FlatMemory::new(), BufferedOutput::new());
//! cpu.load_program(&program);
//!
//! cpu.run_until_halt(100).unwrap();
//!
//! assert!(cpu.is_halted());
//! assert_eq!(cpu.output().printed(), &[8]);
//! ```
//!
//! ## Architecture
//!
//! - **Table-driven decode**: every opcode byte maps to an entry in `OPCODE_TABLE`
//! - **Memory abstraction**: the CPU talks to memory through the `MemoryBus` trait
//! - **Observation channel**: PRN values and decode faults go to an `Output` sink
//! - **Host-driven timing**: `CPU::tick` runs one cycle; `Clock` drives ticks periodically
//!
//! ## Modules
//!
//! - `cpu` - execution context and the fetch-decode-execute cycle
//! - `memory` - MemoryBus trait and the flat 256-byte memory
//! - `registers` - register file and flags
//! - `alu` - arithmetic and compare operations
//! - `opcodes` - opcode constants and metadata table
//! - `clock` - periodic tick driver
//! - `output` - PRN/fault sinks
//! - `disassembler` - instruction decoding for traces and tooling

pub mod alu;
pub mod clock;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod output;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use alu::{AluOp, AluTarget};
pub use clock::{Clock, ClockConfig, ClockReport};
pub use cpu::{RunState, CPU};
pub use disassembler::{disassemble, disassemble_at, DecodedInstruction};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{dispatch, Instruction, OpcodeMetadata, PcAdvance, OPCODE_TABLE};
pub use output::{BufferedOutput, CallbackOutput, LogOutput, Output};
pub use registers::{Flags, RegisterFile, SP};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The byte at PC has no entry in the opcode table.
    ///
    /// Fatal: the CPU halts when this is raised.
    #[error("invalid instruction 0x{opcode:02X} at PC 0x{pc:02X}")]
    InvalidInstruction {
        /// The unrecognized opcode byte.
        opcode: u8,
        /// Program counter at the time of the fault.
        pc: u8,
    },
}
