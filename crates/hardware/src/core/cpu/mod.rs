//! CPU State Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for all
//! processor state. It coordinates the following:
//! 1. **State Management:** The register file and program counter, exclusively
//!    owned and threaded through every step call.
//! 2. **Console Integration:** An injectable byte sink for environment-call
//!    output, so tests can capture what a program prints.
//! 3. **Termination:** A latch for the exit status set by the `exit`
//!    environment call, polled by the run loop.

/// Environment-call (syscall) handling.
pub mod ecall;

/// Instruction execution dispatch.
pub mod execute;

use std::fmt;
use std::io::{self, Write};

use crate::common::RegisterFile;
use crate::config::Config;
use crate::stats::SimStats;

/// Processor state: register file, program counter, console sink, and
/// run-termination latch.
///
/// Allocated once per simulated program run and mutated in place by every
/// [`Cpu::step`](crate::core::cpu::execute) call. The simulator is fully
/// single-threaded: one instruction is decoded and applied before the next
/// fetch occurs.
pub struct Cpu {
    /// General-purpose registers (x0 is writable in this design).
    pub regs: RegisterFile,
    /// Program counter (word-aligned address).
    pub pc: u32,
    /// Execution statistics.
    pub stats: SimStats,
    /// Exit status latched by the `exit` environment call.
    pub exit_code: Option<i32>,
    /// Console sink for environment-call output.
    console: Box<dyn Write>,
}

impl Cpu {
    /// Creates a CPU with a zeroed register file, the configured start PC,
    /// and stdout as the console sink.
    pub fn new(config: &Config) -> Self {
        Self::with_console(config, Box::new(io::stdout()))
    }

    /// Creates a CPU writing environment-call output to the given sink.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration (start PC).
    /// * `console` - Byte sink for `ecall` output.
    pub fn with_console(config: &Config, console: Box<dyn Write>) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: config.general.start_pc,
            stats: SimStats::new(),
            exit_code: None,
            console,
        }
    }

    /// Returns a mutable handle to the console sink.
    pub(crate) fn console(&mut self) -> &mut dyn Write {
        self.console.as_mut()
    }

    /// Retrieves the exit status if the program has finished.
    pub fn take_exit(&mut self) -> Option<i32> {
        self.exit_code.take()
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("regs", &self.regs)
            .field("pc", &self.pc)
            .field("stats", &self.stats)
            .field("exit_code", &self.exit_code)
            .finish_non_exhaustive()
    }
}
