//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the simulator. It provides:
//! 1. **Instruction mix:** Counts by category (ALU, load, store, branch, system).
//! 2. **Control flow:** Branches retired vs. branches taken.
//! 3. **Memory traffic:** Bytes read and written through the memory unit.
//!
//! The run loop logs a summary of these counters when a program exits.

/// Execution statistics for one simulated program run.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimStats {
    /// Number of instructions committed (retired).
    pub instructions_retired: u64,

    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of branch/jump instructions retired.
    pub inst_branch: u64,
    /// Count of ALU (register/immediate arithmetic) instructions retired.
    pub inst_alu: u64,
    /// Count of environment-call instructions retired.
    pub inst_system: u64,

    /// Number of conditional branches whose condition held.
    pub branches_taken: u64,

    /// Bytes read from memory by load instructions.
    pub bytes_read: u64,
    /// Bytes written to memory by store instructions.
    pub bytes_written: u64,
}

impl SimStats {
    /// Creates a zeroed statistics record.
    pub fn new() -> Self {
        Self::default()
    }
}
