//! Fuzz target for the disassembler.
//!
//! Disassembles arbitrary memory images and checks every decoded
//! instruction is 1-3 bytes and formats without panicking.

#![no_main]

use lib8bit::{disassemble, FlatMemory};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let memory = FlatMemory::with_image(&data[1..]);
    let instructions = disassemble(&memory, data[0], 256);

    for instr in &instructions {
        assert!((1..=3).contains(&instr.size_bytes()));
        let _ = instr.to_string();
    }
});
