//! Simulator: owns the CPU and the flat memory side-by-side.
//!
//! The run loop is the external driver the execution engine expects:
//! repeatedly fetch the 32-bit word at PC, hand it to the dispatcher, and
//! stop on the exit latch or the first fatal error.

use crate::config::Config;
use crate::core::Cpu;
use crate::isa::disasm::disassemble;
use crate::memory::Memory;
use crate::common::error::SimError;

/// Top-level simulator: processor state plus flat memory.
#[derive(Debug)]
pub struct Simulator {
    /// Processor architectural state (registers, PC, exit latch).
    pub cpu: Cpu,
    /// Flat byte-addressable memory.
    pub memory: Memory,
}

impl Simulator {
    /// Creates a simulator with zeroed state from the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            memory: Memory::new(config.memory.size),
        }
    }

    /// Creates a simulator whose environment-call output goes to `console`.
    pub fn with_console(config: &Config, console: Box<dyn std::io::Write>) -> Self {
        Self {
            cpu: Cpu::with_console(config, console),
            memory: Memory::new(config.memory.size),
        }
    }

    /// Runs the loaded program to completion.
    ///
    /// One instruction is fully decoded and applied before the next fetch;
    /// the only termination paths are the `exit` environment call (returns
    /// the latched status) and a fatal error.
    ///
    /// # Errors
    ///
    /// The first fatal [`SimError`] raised by a fetch or a step.
    pub fn run(&mut self) -> Result<i32, SimError> {
        loop {
            if let Some(code) = self.cpu.take_exit() {
                let stats = self.cpu.stats;
                tracing::info!(
                    instructions = stats.instructions_retired,
                    loads = stats.inst_load,
                    stores = stats.inst_store,
                    branches = stats.inst_branch,
                    taken = stats.branches_taken,
                    "run finished"
                );
                return Ok(code);
            }

            let raw = self.memory.fetch(self.cpu.pc)?;
            self.cpu.step(raw, &mut self.memory)?;
        }
    }
}

/// Renders the disassembly listing of a program image, one instruction per
/// line, in load order.
///
/// # Errors
///
/// The same fatal decode errors execution would produce for the first
/// non-representable word.
pub fn disassemble_program(words: &[u32]) -> Result<String, SimError> {
    let mut listing = String::new();
    for word in words {
        listing.push_str(&disassemble(*word)?);
        listing.push('\n');
    }
    Ok(listing)
}
