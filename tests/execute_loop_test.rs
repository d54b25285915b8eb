//! Execution loop tests
//!
//! Verifies the fetch-decode-execute cycle, decode errors and run helpers.

use lib8bit::{BufferedOutput, ExecutionError, FlatMemory, RunState, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory, BufferedOutput> {
    let mut cpu = CPU::new(FlatMemory::new(), BufferedOutput::new());
    cpu.load_program(program);
    cpu
}

#[test]
fn test_tick_fetches_through_mar_mdr() {
    // INIT at 0x00, SET 0x05 at 0x01
    let mut cpu = setup_cpu(&[0x01, 0x02, 0x05]);

    cpu.tick().unwrap();
    assert_eq!(cpu.pc(), 0x01);

    cpu.tick().unwrap();

    // MAR/MDR were last used to read the SET operand
    assert_eq!(cpu.mar(), 0x02);
    assert_eq!(cpu.mdr(), 0x05);
    assert_eq!(cpu.pc(), 0x03);
}

#[test]
fn test_invalid_opcode_halts_immediately() {
    let mut cpu = setup_cpu(&[0xFF]);

    match cpu.tick() {
        Err(ExecutionError::InvalidInstruction { opcode: 0xFF, pc: 0x00 }) => {}
        other => panic!("Expected InvalidInstruction(0xFF), got {:?}", other),
    }

    assert_eq!(cpu.state(), RunState::Halted);
    assert_eq!(cpu.pc(), 0x00, "PC should stay on the faulting byte");
    assert_eq!(
        cpu.output().faults(),
        &[ExecutionError::InvalidInstruction { opcode: 0xFF, pc: 0x00 }]
    );
}

#[test]
fn test_invalid_opcode_reports_pc_of_fault() {
    // SET 1, SAVE 2, then garbage
    let mut cpu = setup_cpu(&[0x02, 0x01, 0x04, 0x02, 0x03]);

    let err = cpu.run_for_ticks(10).unwrap_err();

    assert_eq!(err, ExecutionError::InvalidInstruction { opcode: 0x03, pc: 0x04 });
    assert_eq!(err.to_string(), "invalid instruction 0x03 at PC 0x04");
    assert!(cpu.is_halted());
}

#[test]
fn test_run_for_ticks_counts_instructions() {
    // INIT x4, HALT
    let mut cpu = setup_cpu(&[0x01, 0x01, 0x01, 0x01, 0x00]);

    let ticks = cpu.run_for_ticks(3).unwrap();
    assert_eq!(ticks, 3);
    assert_eq!(cpu.pc(), 0x03);

    // Remaining INIT and HALT; stops early at HALT
    let ticks = cpu.run_for_ticks(100).unwrap();
    assert_eq!(ticks, 2);
    assert!(cpu.is_halted());
}

#[test]
fn test_run_until_halt_reports_limit() {
    // JMP 0x00 forever
    let mut cpu = setup_cpu(&[0x11, 0x00]);

    let halted = cpu.run_until_halt(50).unwrap();

    assert!(!halted);
    assert_eq!(cpu.ticks(), 50);
}

#[test]
fn test_stop_then_tick_does_nothing() {
    let mut cpu = setup_cpu(&[0x02, 0x09]);
    cpu.stop();

    cpu.tick().unwrap();

    assert_eq!(cpu.pc(), 0x00);
    assert_eq!(cpu.cur_reg(), 0);
}

#[test]
fn test_start_resumes_after_stop() {
    let mut cpu = setup_cpu(&[0x02, 0x09]);
    cpu.stop();
    cpu.start();

    cpu.tick().unwrap();

    assert_eq!(cpu.cur_reg(), 0x09);
    assert_eq!(cpu.pc(), 0x02);
}

#[test]
fn test_pc_wraps_at_end_of_memory() {
    let mut cpu = setup_cpu(&[]);
    cpu.poke(0xFF, 0x01); // INIT
    cpu.set_pc(0xFF);

    cpu.tick().unwrap();

    assert_eq!(cpu.pc(), 0x00);
}
