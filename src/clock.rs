//! # Clock
//!
//! Drives the CPU one tick per period until it halts. The clock owns no
//! machine state; it only borrows the CPU mutably for the length of a run, so
//! ticks can never overlap.

use std::thread;
use std::time::Duration;

use crate::{ExecutionError, MemoryBus, Output, CPU};

/// Clock configuration.
///
/// # Examples
///
/// ```
/// use lib8bit::ClockConfig;
/// use std::time::Duration;
///
/// let config = ClockConfig::default()
///     .with_period(Duration::ZERO)
///     .with_tick_limit(1_000);
///
/// assert_eq!(config.period, Duration::ZERO);
/// assert_eq!(config.tick_limit, Some(1_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    /// Delay between ticks. Zero runs ticks back to back.
    pub period: Duration,

    /// Maximum ticks per run, or `None` to run until halted.
    pub tick_limit: Option<u64>,
}

impl ClockConfig {
    /// Default tick period (1 ms).
    pub const DEFAULT_PERIOD: Duration = Duration::from_millis(1);

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn with_tick_limit(mut self, limit: u64) -> Self {
        self.tick_limit = Some(limit);
        self
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            period: Self::DEFAULT_PERIOD,
            tick_limit: None,
        }
    }
}

/// Summary of a clock run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReport {
    /// Instructions executed during the run
    pub ticks: u64,

    /// Whether the CPU was halted when the run ended
    pub halted: bool,
}

/// Periodic tick driver.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    config: ClockConfig,
}

impl Clock {
    pub fn new(config: ClockConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Starts the CPU and ticks it once per period.
    ///
    /// Returns when the CPU halts or the tick limit is reached.
    ///
    /// # Errors
    ///
    /// Propagates the decode error that halted the CPU.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8bit::{BufferedOutput, Clock, ClockConfig, FlatMemory, CPU};
    /// use std::time::Duration;
    ///
    /// // SAVE 42, PRN, HALT
    /// let memory = FlatMemory::with_image(&[0x04, 42, 0x06, 0x00]);
    /// let mut cpu = CPU::new(memory, BufferedOutput::new());
    ///
    /// let clock = Clock::new(ClockConfig::default().with_period(Duration::ZERO));
    /// let report = clock.run(&mut cpu).unwrap();
    ///
    /// assert!(report.halted);
    /// assert_eq!(report.ticks, 3);
    /// assert_eq!(cpu.output().printed(), &[42]);
    /// ```
    pub fn run<M: MemoryBus, O: Output>(
        &self,
        cpu: &mut CPU<M, O>,
    ) -> Result<ClockReport, ExecutionError> {
        cpu.start();
        let start_ticks = cpu.ticks();

        while !cpu.is_halted() {
            if let Some(limit) = self.config.tick_limit {
                if cpu.ticks() - start_ticks >= limit {
                    break;
                }
            }

            cpu.tick()?;

            if !self.config.period.is_zero() && !cpu.is_halted() {
                thread::sleep(self.config.period);
            }
        }

        let report = ClockReport {
            ticks: cpu.ticks() - start_ticks,
            halted: cpu.is_halted(),
        };
        log::debug!("clock run finished: {:?}", report);

        Ok(report)
    }
}
