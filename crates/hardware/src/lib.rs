//! RV32 functional simulator library.
//!
//! This crate implements a functional simulator for a 32-bit RISC-V-derived
//! instruction set with the following:
//! 1. **Core:** Decode of raw 32-bit words into typed instruction records, and an
//!    execute dispatcher applying exact RV32I + M-subset + custom-op semantics.
//! 2. **Immediates:** Bit-for-bit reassembly of the scrambled branch/jump/store
//!    offset encodings, and one explicit sign-extension operation shared by
//!    decode, offsets, and every memory load width.
//! 3. **Memory:** A flat, zero-initialized, bounds-checked little-endian byte
//!    buffer with width-parameterized load/store.
//! 4. **Environment:** Console ecalls (print integer/string/character) and the
//!    `exit` call, the sole successful-termination path.
//! 5. **Simulation:** Hex program loader, fetch/step run loop, disassembly
//!    listing mode, and run statistics.

/// Common types and constants (access types, registers, errors).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// CPU state and the execution dispatcher.
pub mod core;
/// Instruction set (decode, instruction records, offsets, disassembler).
pub mod isa;
/// Flat bounds-checked memory unit.
pub mod memory;
/// Program loader and run loop.
pub mod sim;
/// Run statistics collection.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Processor state container; holds registers, PC, and the exit latch.
pub use crate::core::Cpu;
/// Flat memory; construct with `Memory::new(size)`.
pub use crate::memory::Memory;
/// Fatal error taxonomy; every variant halts the run.
pub use crate::common::error::SimError;
