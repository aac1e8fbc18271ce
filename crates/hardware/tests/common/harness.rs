//! Test harness: CPU + memory + capturable console.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use riscv32_core::common::error::SimError;
use riscv32_core::{Config, Cpu, Memory};

/// A console sink whose contents remain inspectable after the CPU takes
/// ownership of its writer half.
#[derive(Clone, Debug, Default)]
pub struct SharedConsole(Arc<Mutex<Vec<u8>>>);

impl SharedConsole {
    /// Returns everything written to the console so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedConsole {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Bundles the processor state, a default-sized memory, and a capturable
/// console for execution tests.
pub struct TestContext {
    /// Processor state under test.
    pub cpu: Cpu,
    /// Flat memory under test.
    pub memory: Memory,
    /// Handle to everything the program printed.
    pub console: SharedConsole,
}

impl TestContext {
    /// Creates a context with default configuration and a captured console.
    pub fn new() -> Self {
        let config = Config::default();
        let console = SharedConsole::default();
        Self {
            cpu: Cpu::with_console(&config, Box::new(console.clone())),
            memory: Memory::new(config.memory.size),
            console,
        }
    }

    /// Executes one raw instruction word against the context.
    pub fn step(&mut self, raw: u32) -> Result<(), SimError> {
        self.cpu.step(raw, &mut self.memory)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
