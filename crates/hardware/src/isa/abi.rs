//! RISC-V Application Binary Interface (ABI) register name constants.
//!
//! Defines the register indices the environment-call convention uses:
//! the syscall number travels in the first argument register, the argument
//! in the second.

/// Register x10 (first argument/return value, a0). Holds the syscall number.
pub const REG_A0: usize = 10;
/// Register x11 (second argument, a1). Holds the syscall argument.
pub const REG_A1: usize = 11;
