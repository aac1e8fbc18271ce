//! Fatal error taxonomy.
//!
//! This module defines the error handling model of the simulator. It provides:
//! 1. **Error Representation:** One variant per fatal condition the engine can hit.
//! 2. **Stable Diagnostics:** `Display` output is a compatibility contract
//!    (zero-padded 8-hex-digit raw words, 8-hex-digit addresses).
//! 3. **Propagation Policy:** Every variant is fatal. Errors are returned as values
//!    up to the top-level driver, which prints the diagnostic and terminates with a
//!    non-zero status; there is no instruction-level recovery or trap model.

use thiserror::Error;

use super::data::AccessType;

/// A fatal simulation error.
///
/// The simulator has no recoverable faults: any of these ends the run.
/// Successful termination happens only through the `exit` environment call.
#[derive(Debug, Error)]
pub enum SimError {
    /// The low 7 bits of a fetched word match no known opcode.
    #[error("Invalid Instruction: 0x{0:08x}")]
    InvalidOpcode(u32),

    /// A recognized opcode carries an unknown funct3/funct7 combination.
    #[error("Invalid Instruction: 0x{0:08x}")]
    InvalidInstruction(u32),

    /// An environment call with an unknown syscall number in `a0`.
    #[error("Illegal ecall number {0}")]
    InvalidEcall(u32),

    /// A fetch, load, or store touched memory outside the flat buffer.
    #[error("Bad {access}. Address: 0x{addr:08x}")]
    OutOfBoundsMemoryAccess {
        /// The kind of access that went out of bounds.
        access: AccessType,
        /// The first offending byte address.
        addr: u32,
    },

    /// The program file could not be read.
    #[error("could not read program '{path}': {source}")]
    ProgramRead {
        /// Path of the program file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A line of the program file is not an 8-hex-digit instruction word.
    #[error("{path}:{line}: invalid instruction word '{text}'")]
    ProgramParse {
        /// Path of the program file.
        path: String,
        /// 1-based line number of the offending word.
        line: usize,
        /// The offending text.
        text: String,
    },

    /// The program image does not fit in the configured memory.
    #[error("program of {program} bytes does not fit in {memory} bytes of memory")]
    ProgramTooLarge {
        /// Size of the program image in bytes.
        program: usize,
        /// Size of the simulated memory in bytes.
        memory: usize,
    },

    /// Writing to the console sink failed.
    #[error("console write failed: {0}")]
    Console(#[from] std::io::Error),
}
