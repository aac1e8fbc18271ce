//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout
//! the simulator. These types are used for the following:
//! 1. **Fault Reporting:** Naming the offending operation in out-of-bounds diagnostics.
//! 2. **Width Selection:** Choosing how many bytes a load or store moves.
//! 3. **Statistics Tracking:** Categorizing memory operations for the run summary.

use std::fmt;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data
/// stores when generating out-of-bounds diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access, performed by the run loop at the PC.
    Fetch,

    /// Data read access, performed by load instructions.
    Read,

    /// Data write access, performed by store instructions.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "Fetch"),
            Self::Read => write!(f, "Read"),
            Self::Write => write!(f, "Write"),
        }
    }
}

/// Width of a memory access in bytes.
///
/// The ISA supports byte, halfword, and word accesses; all multi-byte
/// accesses are little-endian.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessWidth {
    /// One byte.
    Byte,
    /// Two bytes (halfword).
    Half,
    /// Four bytes (full register width).
    Word,
}

impl AccessWidth {
    /// Number of bytes moved by an access of this width.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }

    /// Number of value bits carried by an access of this width.
    #[inline]
    pub const fn bits(self) -> u32 {
        (self.bytes() as u32) * 8
    }
}
