//! WASM API for the simulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection
//! and disassembly. PRN output is delivered to a JavaScript callback.

use crate::{disassemble_at, FlatMemory, MemoryBus, Output, CPU};
use wasm_bindgen::prelude::*;

/// Output that forwards PRN values to a JavaScript callback.
///
/// Faults are returned from `tick` as a `JsError`.
struct JsOutput {
    on_print: js_sys::Function,
}

impl Output for JsOutput {
    fn print(&mut self, value: u8) {
        let _ = self.on_print.call1(&JsValue::NULL, &JsValue::from(value));
    }
}

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator {
    cpu: CPU<FlatMemory, JsOutput>,
}

#[wasm_bindgen]
impl Emulator {
    /// Create a new emulator whose PRN output goes to `on_print`
    #[wasm_bindgen(constructor)]
    pub fn new(on_print: js_sys::Function) -> Self {
        Emulator {
            cpu: CPU::new(FlatMemory::new(), JsOutput { on_print }),
        }
    }

    /// Execute a single instruction
    pub fn tick(&mut self) -> Result<(), JsError> {
        self.cpu.tick().map_err(|e| JsError::new(&e.to_string()))
    }

    /// Execute up to `ticks` instructions and return how many ran
    pub fn run_for_ticks(&mut self, ticks: u32) -> Result<u32, JsError> {
        self.cpu
            .run_for_ticks(ticks as u64)
            .map(|t| t as u32)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn start(&mut self) {
        self.cpu.start();
    }

    pub fn stop(&mut self) {
        self.cpu.stop();
    }

    /// Reset registers and flags, keeping memory
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u8 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn mar(&self) -> u8 {
        self.cpu.mar()
    }

    #[wasm_bindgen(getter)]
    pub fn mdr(&self) -> u8 {
        self.cpu.mdr()
    }

    #[wasm_bindgen(getter)]
    pub fn cur_reg(&self) -> u8 {
        self.cpu.cur_reg()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_equal(&self) -> bool {
        self.cpu.flag_equal()
    }

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.cpu.is_halted()
    }

    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> f64 {
        self.cpu.ticks() as f64 // Convert u64 to f64 for JavaScript
    }

    /// Read general register `id`
    pub fn register(&self, id: u8) -> u8 {
        self.cpu.register(id)
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u8) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn poke(&mut self, addr: u8, value: u8) {
        self.cpu.poke(addr, value);
    }

    /// Copy the whole 256-byte memory (for display)
    pub fn memory(&self) -> Vec<u8> {
        self.cpu.memory().as_slice().to_vec()
    }

    /// Load a program at address 0
    pub fn load_program(&mut self, program: &[u8]) {
        self.cpu.load_program(program);
    }

    /// Disassemble the instruction at `addr`
    pub fn disassemble(&self, addr: u8) -> String {
        disassemble_at(self.cpu.memory(), addr).to_string()
    }
}
