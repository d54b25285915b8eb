//! WebAssembly bindings for the lib8bit simulator.
//!
//! This module provides JavaScript-callable interfaces to the CPU, enabling
//! browser-based single-stepping and inspection of programs.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator;
