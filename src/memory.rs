//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from a
//! specific memory implementation, and `FlatMemory`, the 256-cell array the
//! machine normally runs against.
//!
//! ## Design Principles
//!
//! - Addresses are `u8`, so every address is in range by construction
//! - No bus errors: reads and writes always succeed
//! - Instructions and data share the same address space

/// Memory bus trait for the CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use lib8bit::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x42, 0x99);
/// assert_eq!(mem.read(0x42), 0x99);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use lib8bit::MemoryBus;
///
/// /// Memory whose upper half ignores writes.
/// struct HalfRom {
///     cells: [u8; 256],
/// }
///
/// impl MemoryBus for HalfRom {
///     fn read(&self, addr: u8) -> u8 {
///         self.cells[addr as usize]
///     }
///
///     fn write(&mut self, addr: u8, value: u8) {
///         if addr < 0x80 {
///             self.cells[addr as usize] = value;
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads the byte stored at `addr`.
    ///
    /// Must never panic.
    fn read(&self, addr: u8) -> u8;

    /// Writes `value` to `addr`.
    ///
    /// Must never panic. Implementations may ignore writes to read-only cells.
    fn write(&mut self, addr: u8, value: u8);
}

/// Number of addressable memory cells.
pub const MEMORY_SIZE: usize = 256;

/// Flat 256-byte memory.
///
/// All cells are writable and start at zero.
///
/// # Examples
///
/// ```
/// use lib8bit::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0xFF, 0x01);
/// assert_eq!(mem.read(0xFF), 0x01);
/// assert_eq!(mem.read(0x00), 0x00);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatMemory {
    cells: [u8; MEMORY_SIZE],
}

impl FlatMemory {
    /// Creates a new memory with every cell set to zero.
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Creates memory pre-loaded with `image` starting at address 0.
    ///
    /// Bytes past the end of the address space are ignored.
    pub fn with_image(image: &[u8]) -> Self {
        let mut mem = Self::new();
        for (addr, &byte) in image.iter().take(MEMORY_SIZE).enumerate() {
            mem.cells[addr] = byte;
        }
        mem
    }

    /// Returns the raw memory contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u8) -> u8 {
        self.cells[addr as usize]
    }

    fn write(&mut self, addr: u8, value: u8) {
        self.cells[addr as usize] = value;
    }
}
