//! Observation channel for PRN and decode faults.
//!
//! The CPU never renders anything itself. PRN hands the byte to an [`Output`]
//! and a decode fault hands over the [`ExecutionError`]; how they are shown is
//! up to the host.

use crate::ExecutionError;

/// Sink for values printed by PRN and for fatal faults.
pub trait Output {
    /// Called by PRN with the value of the current register.
    fn print(&mut self, value: u8);

    /// Called once when the CPU halts on a fatal error.
    fn fault(&mut self, _error: &ExecutionError) {}
}

/// Output that records everything it receives.
///
/// # Examples
///
/// ```
/// use lib8bit::{BufferedOutput, Output};
///
/// let mut out = BufferedOutput::new();
/// out.print(8);
/// assert_eq!(out.printed(), &[8]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedOutput {
    printed: Vec<u8>,
    faults: Vec<ExecutionError>,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values printed so far, oldest first.
    pub fn printed(&self) -> &[u8] {
        &self.printed
    }

    /// Faults reported so far.
    pub fn faults(&self) -> &[ExecutionError] {
        &self.faults
    }

    /// Removes and returns the printed values.
    pub fn take_printed(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.printed)
    }
}

impl Output for BufferedOutput {
    fn print(&mut self, value: u8) {
        self.printed.push(value);
    }

    fn fault(&mut self, error: &ExecutionError) {
        self.faults.push(*error);
    }
}

/// Output that forwards printed values to a closure.
///
/// Faults are ignored; they are still logged and returned from `tick`.
pub struct CallbackOutput<F: FnMut(u8)> {
    on_print: F,
}

impl<F: FnMut(u8)> CallbackOutput<F> {
    pub fn new(on_print: F) -> Self {
        Self { on_print }
    }
}

impl<F: FnMut(u8)> Output for CallbackOutput<F> {
    fn print(&mut self, value: u8) {
        (self.on_print)(value);
    }
}

/// Output that writes through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOutput;

impl Output for LogOutput {
    fn print(&mut self, value: u8) {
        log::info!("{}", value);
    }

    fn fault(&mut self, error: &ExecutionError) {
        log::error!("{}", error);
    }
}
