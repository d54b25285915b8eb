//! Memory bus trait tests
//!
//! Verifies FlatMemory and that the CPU works with a custom MemoryBus.

use lib8bit::{BufferedOutput, FlatMemory, MemoryBus, CPU};

#[test]
fn test_flat_memory_initialization() {
    let memory = FlatMemory::new();

    for addr in 0..=255u8 {
        assert_eq!(memory.read(addr), 0x00, "Memory at 0x{:02X} should be 0", addr);
    }
}

#[test]
fn test_flat_memory_read_write_round_trip() {
    let mut memory = FlatMemory::new();

    let test_data = [(0x00, 0x01), (0x7F, 0x7F), (0x80, 0x80), (0xFF, 0xFF)];

    for &(addr, value) in test_data.iter() {
        memory.write(addr, value);
    }

    for &(addr, value) in test_data.iter() {
        assert_eq!(memory.read(addr), value);
    }
}

/// Memory that counts writes, to check the CPU goes through the bus.
struct CountingMemory {
    cells: [u8; 256],
    writes: usize,
}

impl MemoryBus for CountingMemory {
    fn read(&self, addr: u8) -> u8 {
        self.cells[addr as usize]
    }

    fn write(&mut self, addr: u8, value: u8) {
        self.writes += 1;
        self.cells[addr as usize] = value;
    }
}

#[test]
fn test_cpu_uses_custom_memory_bus() {
    let mut cells = [0u8; 256];
    // SAVE 9, ST 0x80, HALT
    cells[..5].copy_from_slice(&[0x04, 0x09, 0x09, 0x80, 0x00]);

    let memory = CountingMemory { cells, writes: 0 };
    let mut cpu = CPU::new(memory, BufferedOutput::new());

    cpu.run_until_halt(10).unwrap();

    assert_eq!(cpu.memory().writes, 1);
    assert_eq!(cpu.memory().read(0x80), 0x09);
}

#[test]
fn test_poke_writes_memory() {
    let mut cpu = CPU::new(FlatMemory::new(), BufferedOutput::new());

    cpu.poke(0x10, 0xAB);

    assert_eq!(cpu.memory().read(0x10), 0xAB);
}
