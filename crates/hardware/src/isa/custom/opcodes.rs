//! Custom extension opcode.

/// Fused operations (MAC, ACC, GEP). Uses the RISC-V custom-1 opcode space.
pub const OP_CUSTOM: u32 = 0b0101011;
