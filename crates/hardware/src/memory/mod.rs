//! Flat Memory Unit.
//!
//! This module provides the byte-addressable flat store of the simulator.
//! It performs the following:
//! 1. **Storage:** A fixed-size, zero-initialized, owned byte buffer. No growth,
//!    no paging; populated by the loader before the first step.
//! 2. **Width-Parameterized Access:** Little-endian load/store of 1, 2, or 4 bytes.
//! 3. **Uniform Sign Extension:** Every load width is widened to register width
//!    through the one explicit sign-extension operation (a no-op at word width).
//! 4. **Bounds Checking:** Every access is range-checked up front and fails
//!    with `OutOfBoundsMemoryAccess`; no access can touch memory outside the
//!    buffer.

use crate::common::data::{AccessType, AccessWidth};
use crate::common::error::SimError;
use crate::isa::bits::sign_extend;

/// Byte-addressable flat memory with bounds-checked, width-parameterized access.
#[derive(Clone, Debug)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Creates a zero-initialized memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Returns the size of the memory in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the memory has zero size.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Loads a value of the given width from `addr`, little-endian, and
    /// sign-extends it to register width.
    ///
    /// Byte and halfword reads are sign-extended exactly like word reads;
    /// at word width the extension is the identity.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address of the lowest byte.
    /// * `width` - Access width (1, 2, or 4 bytes).
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfBoundsMemoryAccess`] if `addr + width` exceeds the
    /// memory size.
    pub fn load(&self, addr: u32, width: AccessWidth) -> Result<i32, SimError> {
        let range = self.checked_range(addr, width, AccessType::Read)?;
        let mut value: u32 = 0;
        for (i, byte) in self.bytes[range].iter().enumerate() {
            value |= u32::from(*byte) << (8 * i);
        }
        Ok(sign_extend(value, width.bits()))
    }

    /// Stores the low `width` bytes of `value` at `addr`, little-endian.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address of the lowest byte.
    /// * `width` - Access width (1, 2, or 4 bytes).
    /// * `value` - Source value; bits above the access width are ignored.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfBoundsMemoryAccess`] if `addr + width` exceeds the
    /// memory size.
    pub fn store(&mut self, addr: u32, width: AccessWidth, value: u32) -> Result<(), SimError> {
        let range = self.checked_range(addr, width, AccessType::Write)?;
        for (i, byte) in self.bytes[range].iter_mut().enumerate() {
            *byte = (value >> (8 * i)) as u8;
        }
        Ok(())
    }

    /// Fetches the 32-bit instruction word at `addr`.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfBoundsMemoryAccess`] (fetch kind) if the word does
    /// not lie inside memory.
    pub fn fetch(&self, addr: u32) -> Result<u32, SimError> {
        let range = self.checked_range(addr, AccessWidth::Word, AccessType::Fetch)?;
        let mut value: u32 = 0;
        for (i, byte) in self.bytes[range].iter().enumerate() {
            value |= u32::from(*byte) << (8 * i);
        }
        Ok(value)
    }

    /// Bounds-checks an access and returns its byte range.
    fn checked_range(
        &self,
        addr: u32,
        width: AccessWidth,
        access: AccessType,
    ) -> Result<std::ops::Range<usize>, SimError> {
        let start = addr as usize;
        let end = start.checked_add(width.bytes());
        match end {
            Some(end) if end <= self.bytes.len() => Ok(start..end),
            _ => Err(SimError::OutOfBoundsMemoryAccess { access, addr }),
        }
    }
}
