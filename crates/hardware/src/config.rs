//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline constants (memory size, start PC).
//! 2. **Structures:** Hierarchical config for general and memory settings.
//!
//! Configuration is supplied as JSON by the CLI (`--config`) or built with
//! `Config::default()`.

use serde::Deserialize;

use crate::common::constants::{DEFAULT_MEMORY_SIZE, DEFAULT_START_PC};

/// Top-level simulator configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// High-level run settings.
    pub general: GeneralConfig,
    /// Memory settings.
    pub memory: MemoryConfig,
}

/// High-level run settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    /// Initial program counter.
    pub start_pc: u32,
    /// Dump the register file to stdout when the program exits.
    pub dump_registers: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_pc: DEFAULT_START_PC,
            dump_registers: false,
        }
    }
}

/// Memory settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryConfig {
    /// Size of the flat memory in bytes.
    pub size: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_MEMORY_SIZE,
        }
    }
}
