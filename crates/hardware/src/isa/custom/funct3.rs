//! Custom extension Function Codes (funct3).

/// Multiply-Accumulate: rd += rs1 * rs2.
pub const MAC: u32 = 0b000;

/// Accumulate: rd += rs1 + rs2.
pub const ACC: u32 = 0b001;

/// Get-Element-Pointer: rd = rs1 + (rs2 << 4).
pub const GEP: u32 = 0b010;
