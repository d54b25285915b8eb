//! Tests for PUSH (0x0A) and POP (0x0B).
//!
//! Tests cover:
//! - PUSH pre-decrements SP then stores the current register at SP
//! - POP loads from SP then post-increments SP
//! - SP wraps in both directions
//! - LIFO ordering and SP restoration
//! - PC advances by 1

use lib8bit::{BufferedOutput, FlatMemory, MemoryBus, CPU, SP};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory, BufferedOutput> {
    CPU::new(FlatMemory::with_image(program), BufferedOutput::new())
}

// ========== PUSH ==========

#[test]
fn test_push_basic_operation() {
    let mut cpu = setup_cpu(&[0x0A]);
    cpu.set_register(0, 0x42);

    cpu.tick().unwrap();

    // SP starts at 0 and wraps to 0xFF before the store
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.memory().read(0xFF), 0x42);
    assert_eq!(cpu.pc(), 0x01);
}

#[test]
fn test_push_uses_register_255_as_sp() {
    let mut cpu = setup_cpu(&[0x0A]);
    cpu.set_register(SP, 0x80);
    cpu.set_register(0, 0x11);

    cpu.tick().unwrap();

    assert_eq!(cpu.register(SP), 0x7F);
    assert_eq!(cpu.memory().read(0x7F), 0x11);
}

#[test]
fn test_push_current_register() {
    // SET 5, PUSH
    let mut cpu = setup_cpu(&[0x02, 0x05, 0x0A]);
    cpu.set_sp(0xF0);
    cpu.set_register(5, 0xAB);

    cpu.run_for_ticks(2).unwrap();

    assert_eq!(cpu.memory().read(0xEF), 0xAB);
}

// ========== POP ==========

#[test]
fn test_pop_basic_operation() {
    let mut cpu = setup_cpu(&[0x0B]);
    cpu.set_sp(0xF0);
    cpu.poke(0xF0, 0x99);

    cpu.tick().unwrap();

    assert_eq!(cpu.register(0), 0x99);
    assert_eq!(cpu.sp(), 0xF1);
    assert_eq!(cpu.pc(), 0x01);
}

#[test]
fn test_pop_wraps_sp() {
    let mut cpu = setup_cpu(&[0x0B]);
    cpu.set_sp(0xFF);
    cpu.poke(0xFF, 0x01);

    cpu.tick().unwrap();

    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.register(0), 0x01);
}

// ========== Stack law ==========

#[test]
fn test_push_pop_is_lifo() {
    // SET 1, PUSH, SET 2, PUSH, SET 3, POP, SET 4, POP, HALT
    let program = [
        0x02, 0x01, 0x0A, 0x02, 0x02, 0x0A, 0x02, 0x03, 0x0B, 0x02, 0x04, 0x0B, 0x00,
    ];
    let mut cpu = setup_cpu(&program);
    cpu.set_sp(0xF8);
    cpu.set_register(1, 0x10);
    cpu.set_register(2, 0x20);

    assert!(cpu.run_until_halt(20).unwrap());

    assert_eq!(cpu.register(3), 0x20, "Last pushed comes out first");
    assert_eq!(cpu.register(4), 0x10);
    assert_eq!(cpu.sp(), 0xF8, "SP restored after balanced push/pop");
}
