//! # CPU State and Execution
//!
//! This module contains the CPU struct, the execution context every
//! instruction handler works against, and the fetch-decode-execute cycle.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Register file**: 256 general registers, PC, MAR, MDR (SP is register 255)
//! - **Flags**: the `equal` flag set by CMP
//! - **Current register**: implicit source/destination selected by SET
//! - **Run state**: RUNNING or HALTED
//! - **Tick counter**: number of instructions executed
//!
//! ## Execution Model
//!
//! - `tick()`: execute one instruction
//! - `run_for_ticks()`: execute a bounded number of instructions
//! - `start()` / `stop()`: move between RUNNING and HALTED
//!
//! Ticks are strictly sequential. Every method that executes takes `&mut self`,
//! so a tick can never begin while another is in progress.

use crate::alu::{self, AluOp, AluTarget};
use crate::disassembler::disassemble_at;
use crate::instructions;
use crate::opcodes::dispatch;
use crate::registers::{Flags, RegisterFile};
use crate::{ExecutionError, MemoryBus, Output};

/// Whether the clock is allowed to advance the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Halted,
}

/// CPU state and execution context.
///
/// Generic over the memory implementation (`MemoryBus`) and the observation
/// channel (`Output`).
///
/// # Examples
///
/// ```
/// use lib8bit::{BufferedOutput, FlatMemory, RunState, CPU};
///
/// let cpu = CPU::new(FlatMemory::new(), BufferedOutput::new());
///
/// assert_eq!(cpu.state(), RunState::Running);
/// assert_eq!(cpu.pc(), 0);
/// assert_eq!(cpu.sp(), 0);
/// assert_eq!(cpu.cur_reg(), 0);
/// assert!(!cpu.flag_equal());
/// ```
pub struct CPU<M: MemoryBus, O: Output> {
    pub(crate) regs: RegisterFile,

    pub(crate) flags: Flags,

    /// Register selected by the last SET (or INIT)
    pub(crate) cur_reg: u8,

    pub(crate) state: RunState,

    /// Instructions executed since creation or reset
    pub(crate) ticks: u64,

    pub(crate) memory: M,

    pub(crate) output: O,
}

impl<M: MemoryBus, O: Output> CPU<M, O> {
    /// Creates a new CPU in the power-on state.
    ///
    /// - State is RUNNING
    /// - PC, SP, MAR, MDR and every general register are zero
    /// - `equal` is false and the current register is 0
    pub fn new(memory: M, output: O) -> Self {
        Self {
            regs: RegisterFile::new(),
            flags: Flags::default(),
            cur_reg: 0,
            state: RunState::Running,
            ticks: 0,
            memory,
            output,
        }
    }

    /// Executes one fetch-decode-execute cycle.
    ///
    /// 1. Fetch: MAR ← PC, MDR ← memory[MAR]
    /// 2. Decode: look up MDR in the opcode table
    /// 3. Execute: run the handler, which leaves PC on the next instruction
    ///
    /// A halted CPU ignores ticks and nothing is mutated.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::InvalidInstruction`] when the fetched byte has
    /// no opcode table entry. The CPU halts and the fault is reported to the
    /// output before returning.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8bit::{BufferedOutput, ExecutionError, FlatMemory, CPU};
    ///
    /// let mut cpu = CPU::new(FlatMemory::with_image(&[0xFF]), BufferedOutput::new());
    ///
    /// assert_eq!(
    ///     cpu.tick(),
    ///     Err(ExecutionError::InvalidInstruction { opcode: 0xFF, pc: 0x00 })
    /// );
    /// assert!(cpu.is_halted());
    /// ```
    pub fn tick(&mut self) -> Result<(), ExecutionError> {
        if self.state == RunState::Halted {
            return Ok(());
        }

        let pc = self.regs.pc;

        // Fetch
        self.regs.mar = pc;
        self.load_mem();
        let opcode = self.regs.mdr;

        // Decode
        let metadata = match dispatch(opcode, pc) {
            Ok(metadata) => metadata,
            Err(err) => {
                self.state = RunState::Halted;
                log::error!("{}", err);
                self.output.fault(&err);
                return Err(err);
            }
        };

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("0x{:02X}: {}", pc, disassemble_at(&self.memory, pc));
        }

        // Execute
        self.ticks += 1;
        instructions::execute(self, metadata)
    }

    /// Executes up to `max_ticks` instructions, stopping early on HALT.
    ///
    /// Returns the number of instructions executed.
    pub fn run_for_ticks(&mut self, max_ticks: u64) -> Result<u64, ExecutionError> {
        let start_ticks = self.ticks;

        for _ in 0..max_ticks {
            if self.is_halted() {
                break;
            }
            self.tick()?;
        }

        Ok(self.ticks - start_ticks)
    }

    /// Ticks until the CPU halts or `max_ticks` instructions have run.
    ///
    /// Returns `true` if the CPU is halted afterwards.
    pub fn run_until_halt(&mut self, max_ticks: u64) -> Result<bool, ExecutionError> {
        self.run_for_ticks(max_ticks)?;
        Ok(self.is_halted())
    }

    /// Lets the clock advance the CPU from its current state.
    pub fn start(&mut self) {
        if self.state != RunState::Running {
            log::debug!("clock started at PC 0x{:02X}", self.regs.pc);
        }
        self.state = RunState::Running;
    }

    /// Stops the CPU. Calling it on a halted CPU does nothing.
    pub fn stop(&mut self) {
        if self.state != RunState::Halted {
            log::debug!("clock stopped at PC 0x{:02X}", self.regs.pc);
        }
        self.state = RunState::Halted;
    }

    /// Restores the power-on register state, keeping memory contents.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::new();
        self.flags = Flags::default();
        self.cur_reg = 0;
        self.state = RunState::Running;
        self.ticks = 0;
    }

    /// Writes `value` to memory at `addr`.
    pub fn poke(&mut self, addr: u8, value: u8) {
        self.memory.write(addr, value);
    }

    /// Pokes `program` into memory starting at address 0.
    ///
    /// Bytes past address 255 are ignored.
    pub fn load_program(&mut self, program: &[u8]) {
        for (addr, &byte) in (0..=u8::MAX).zip(program) {
            self.poke(addr, byte);
        }
    }

    // ========== Micro-operations used by handlers ==========

    /// MDR ← memory[MAR]
    pub(crate) fn load_mem(&mut self) {
        self.regs.mdr = self.memory.read(self.regs.mar);
    }

    /// memory[MAR] ← MDR
    pub(crate) fn store_mem(&mut self) {
        self.memory.write(self.regs.mar, self.regs.mdr);
    }

    /// Reads the operand byte at PC + `offset` through MAR/MDR.
    pub(crate) fn read_operand(&mut self, offset: u8) -> u8 {
        self.regs.mar = self.regs.pc.wrapping_add(offset);
        self.load_mem();
        self.regs.mdr
    }

    pub(crate) fn alu(&mut self, op: AluOp) -> Option<u8> {
        alu::apply(&mut self.regs, &mut self.flags, op)
    }

    /// Moves PC forward `bytes` times through the ALU.
    pub(crate) fn advance_pc(&mut self, bytes: u8) {
        for _ in 0..bytes {
            self.alu(AluOp::Inc(AluTarget::Pc));
        }
    }

    // ========== Register Getters ==========

    /// Returns the program counter.
    pub fn pc(&self) -> u8 {
        self.regs.pc
    }

    /// Returns the stack pointer (general register 255).
    pub fn sp(&self) -> u8 {
        self.regs.sp()
    }

    /// Returns the memory address register.
    pub fn mar(&self) -> u8 {
        self.regs.mar
    }

    /// Returns the memory data register.
    pub fn mdr(&self) -> u8 {
        self.regs.mdr
    }

    /// Returns general register `id`.
    pub fn register(&self, id: u8) -> u8 {
        self.regs.get(id)
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    /// Returns the register selected by the last SET.
    pub fn cur_reg(&self) -> u8 {
        self.cur_reg
    }

    /// Returns true if the last CMP found its operands equal.
    pub fn flag_equal(&self) -> bool {
        self.flags.equal
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Returns the number of instructions executed.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    // ========== Register Setters ==========

    pub fn set_pc(&mut self, value: u8) {
        self.regs.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs.set_sp(value);
    }

    pub fn set_register(&mut self, id: u8, value: u8) {
        self.regs.set(id, value);
    }

    pub fn set_cur_reg(&mut self, id: u8) {
        self.cur_reg = id;
    }

    pub fn set_flag_equal(&mut self, value: bool) {
        self.flags.equal = value;
    }
}
