//! RV32 Base Integer (I) Opcodes.
//!
//! Defines the major opcodes (bits 6-0) recognized by this simulator.
//! The opcode is always read from bits [6:0] of the raw word before any
//! other field extraction.

/// Load instructions (LB, LH, LW).
pub const OP_LOAD: u32 = 0b0000011;

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const OP_IMM: u32 = 0b0010011;

/// Store instructions (SB, SH, SW).
pub const OP_STORE: u32 = 0b0100011;

/// Register-Register arithmetic (ADD, SUB, SLL, etc.), including the
/// M-extension subset selected by funct7.
pub const OP_REG: u32 = 0b0110011;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0b0110111;

/// Conditional Branch instructions (BEQ, BNE).
pub const OP_BRANCH: u32 = 0b1100011;

/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0b1101111;

/// Environment call (ECALL).
pub const OP_SYSTEM: u32 = 0b1110011;
