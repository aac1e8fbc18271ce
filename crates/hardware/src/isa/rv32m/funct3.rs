//! RV32 M-Extension Function Codes (funct3).
//!
//! Identifies the specific multiply or divide operation when
//! `opcode == OP_REG` and `funct7 == MULDIV`.

/// Multiply (signed * signed) -> lower 32 bits.
pub const MUL: u32 = 0b000;

/// Multiply High (signed * signed) -> upper 32 bits of the 64-bit product.
pub const MULH: u32 = 0b001;

/// Divide (signed).
pub const DIV: u32 = 0b100;

/// Remainder (signed).
pub const REM: u32 = 0b110;
