//! RV32 M-Extension subset (integer multiply/divide).
//!
//! This simulator implements the signed half of the M extension: MUL, MULH,
//! DIV, and REM. The operations share `OP_REG` with the base set and are
//! selected by `funct7 == MULDIV`.

/// Function code 3 definitions for the multiply/divide subset.
pub mod funct3;

/// Function code 7 definitions for the multiply/divide subset.
pub mod funct7;
