//! # Register File and Flags
//!
//! The machine has 256 general-purpose 8-bit registers plus four special
//! registers:
//!
//! - **PC**: address of the next instruction byte
//! - **SP**: stack pointer, stored in general register 255
//! - **MAR**: memory address register
//! - **MDR**: memory data register
//!
//! SP is not a separate storage cell. Reading or writing SP is the same as
//! reading or writing general register [`SP`].

/// General register that holds the stack pointer.
pub const SP: u8 = 0xFF;

/// 256 general registers plus PC, MAR and MDR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    general: [u8; 256],

    /// Program counter (address of next instruction byte)
    pub(crate) pc: u8,

    /// Memory address register
    pub(crate) mar: u8,

    /// Memory data register
    pub(crate) mdr: u8,
}

impl RegisterFile {
    /// Creates a register file with every register zeroed.
    pub fn new() -> Self {
        Self {
            general: [0; 256],
            pc: 0,
            mar: 0,
            mdr: 0,
        }
    }

    /// Returns the value of general register `id`.
    pub fn get(&self, id: u8) -> u8 {
        self.general[id as usize]
    }

    /// Sets general register `id` to `value`.
    pub fn set(&mut self, id: u8, value: u8) {
        self.general[id as usize] = value;
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u8 {
        self.pc
    }

    /// Returns the stack pointer (general register 255).
    pub fn sp(&self) -> u8 {
        self.get(SP)
    }

    /// Sets the stack pointer (general register 255).
    pub fn set_sp(&mut self, value: u8) {
        self.set(SP, value);
    }

    /// Returns the memory address register.
    pub fn mar(&self) -> u8 {
        self.mar
    }

    /// Returns the memory data register.
    pub fn mdr(&self) -> u8 {
        self.mdr
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Condition flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Set by CMP when both operands are equal. Read by JEQ/JNE.
    pub equal: bool,
}
