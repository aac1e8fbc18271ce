//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, decoding logic, and the
//! offset-reassembly rules, organized by extension.
//!
//! # Extensions
//!
//! * `rv32i`: Base Integer Instruction Set (32-bit).
//! * `rv32m`: Multiply/divide subset of the M extension (MUL, MULH, DIV, REM).
//! * `custom`: Fused operations on opcode 0x2b (MAC, ACC, GEP).

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Bit-width-aware sign extension, shared by every component.
pub mod bits;

/// Custom fused-operation extension (MAC, ACC, GEP).
pub mod custom;

/// Instruction decoding logic for all instruction formats.
pub mod decode;

/// Instruction disassembler for the textual listing mode.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Branch/jump/store offset assembly from scrambled immediate fragments.
pub mod offsets;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;

/// Integer multiply/divide subset (MUL, MULH, DIV, REM).
pub mod rv32m;
