//! RV32 M-Extension Function Codes (funct7).

/// Selects the multiply/divide family within `OP_REG`.
pub const MULDIV: u32 = 0b0000001;
