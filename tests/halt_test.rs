//! Tests for the HALT instruction (0x00).

use lib8bit::{BufferedOutput, FlatMemory, RunState, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory, BufferedOutput> {
    CPU::new(FlatMemory::with_image(program), BufferedOutput::new())
}

#[test]
fn test_halt_stops_cpu() {
    let mut cpu = setup_cpu(&[0x00]);

    cpu.tick().unwrap();

    assert_eq!(cpu.state(), RunState::Halted);
    assert_eq!(cpu.pc(), 0x00, "HALT does not advance PC");
    assert_eq!(cpu.ticks(), 1);
}

#[test]
fn test_ticks_after_halt_mutate_nothing() {
    // SAVE 1, HALT, SAVE 2
    let mut cpu = setup_cpu(&[0x04, 0x01, 0x00, 0x04, 0x02]);
    cpu.run_until_halt(10).unwrap();

    let pc = cpu.pc();
    let mar = cpu.mar();
    let mdr = cpu.mdr();
    let ticks = cpu.ticks();
    let memory = cpu.memory().clone();

    for _ in 0..10 {
        cpu.tick().unwrap();
    }

    assert_eq!(cpu.pc(), pc);
    assert_eq!(cpu.mar(), mar);
    assert_eq!(cpu.mdr(), mdr);
    assert_eq!(cpu.ticks(), ticks);
    assert_eq!(cpu.register(0), 0x01);
    assert_eq!(cpu.memory(), &memory);
}

#[test]
fn test_restart_after_halt_executes_halt_again() {
    let mut cpu = setup_cpu(&[0x00]);
    cpu.tick().unwrap();

    cpu.start();
    cpu.tick().unwrap();

    assert!(cpu.is_halted());
    assert_eq!(cpu.ticks(), 2);
}

#[test]
fn test_restart_after_moving_pc() {
    // HALT, SAVE 7, HALT
    let mut cpu = setup_cpu(&[0x00, 0x04, 0x07, 0x00]);
    cpu.run_until_halt(5).unwrap();

    cpu.set_pc(0x01);
    cpu.start();
    cpu.run_until_halt(5).unwrap();

    assert_eq!(cpu.register(0), 0x07);
    assert_eq!(cpu.pc(), 0x03);
}
