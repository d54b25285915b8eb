//! Fuzz target for CPU execution.
//!
//! Builds an arbitrary machine state and memory image, then runs a bounded
//! number of ticks looking for panics.

#![no_main]

use arbitrary::Arbitrary;
use lib8bit::{BufferedOutput, FlatMemory, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    pc: u8,
    sp: u8,
    cur_reg: u8,
    flag_equal: bool,
    /// A few general registers to seed
    registers: [u8; 8],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: [u8; 256],
    ticks: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut cpu = CPU::new(FlatMemory::with_image(&input.memory), BufferedOutput::new());

    cpu.set_pc(input.cpu_state.pc);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_cur_reg(input.cpu_state.cur_reg);
    cpu.set_flag_equal(input.cpu_state.flag_equal);
    for (id, &value) in input.cpu_state.registers.iter().enumerate() {
        cpu.set_register(id as u8, value);
    }

    // Decode errors are expected; panics are not
    let result = cpu.run_for_ticks(input.ticks as u64);

    if result.is_err() {
        assert!(cpu.is_halted());
        assert_eq!(cpu.output().faults().len(), 1);
    }
    assert!(cpu.ticks() <= input.ticks as u64);
});
