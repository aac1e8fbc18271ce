//! General-Purpose Register File.
//!
//! This module implements the architectural register file of the simulated
//! processor. It performs the following:
//! 1. **Storage:** Maintains 32 word-sized integer registers (`x0`-`x31`).
//! 2. **Threaded State:** The file is a plain owned value threaded through every
//!    dispatcher step; there is no ambient global state.
//! 3. **Debugging:** Provides a utility for dumping the complete register state.
//!
//! Unlike a conforming RV32 core, register `x0` is *writable* in this design;
//! programs for this ISA subset may use it as ordinary scratch storage.

use crate::common::constants::NUM_REGISTERS;

/// General-purpose register file.
///
/// Contains 32 word-sized registers. All registers, including `x0`, are
/// ordinary storage.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: [u32; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    /// Writes a value to a register.
    ///
    /// Writes to `x0` take effect like any other register write.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx] = val;
    }

    /// Dumps the contents of all registers to stdout.
    ///
    /// Displays registers in pairs with hexadecimal formatting for debugging
    /// purposes.
    pub fn dump(&self) {
        for i in (0..NUM_REGISTERS).step_by(2) {
            println!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
