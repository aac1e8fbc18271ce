//! Common constants used throughout the simulator.

/// Number of general-purpose registers in the architectural register file.
pub const NUM_REGISTERS: usize = 32;

/// Width of one instruction in bytes. The PC advances by this amount for
/// every non-branching instruction.
pub const INSTRUCTION_BYTES: u32 = 4;

/// Width of an instruction (and of a register) in bits.
pub const WORD_BITS: u32 = 32;

/// Default size of the flat simulated memory in bytes (64 KiB).
///
/// Programs are loaded at address 0; anything at or beyond this bound
/// is an out-of-bounds access.
pub const DEFAULT_MEMORY_SIZE: usize = 64 * 1024;

/// Default initial program counter.
pub const DEFAULT_START_PC: u32 = 0;
