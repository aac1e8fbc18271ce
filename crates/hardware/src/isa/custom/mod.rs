//! Custom fused-operation extension.
//!
//! Three R-format instructions on the custom opcode `0x2b`, each performing a
//! fused read-modify-write involving the destination register:
//!
//! - `mac rd, rs1, rs2`: rd += rs1 * rs2
//! - `acc rd, rs1, rs2`: rd += rs1 + rs2
//! - `gep rd, rs1, rs2`: rd = rs1 + (rs2 << 4)

/// Function code 3 definitions for the fused operations.
pub mod funct3;

/// Custom extension opcode.
pub mod opcodes;
