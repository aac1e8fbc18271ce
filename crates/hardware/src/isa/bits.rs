//! Bit-width-aware sign extension.
//!
//! Every component of the decode-execute engine widens narrow two's-complement
//! fields through this one function: I-type immediates at decode time, the
//! reassembled branch/jump/store offsets, and every memory load width. Keeping
//! a single explicit extension point removes any reliance on
//! representation-dependent casts.

use crate::common::constants::WORD_BITS;

/// Sign-extends an `width`-bit two's-complement field to a signed 32-bit value.
///
/// Bit `width - 1` of `field` is the sign bit: if set, all bits above it are
/// filled with ones; otherwise `field` is returned unchanged. Implemented by
/// left-aligning the field and arithmetically shifting back, which stays
/// defined for `width == 32` (the shift amount is `32 - width`, never 32).
///
/// # Arguments
///
/// * `field` - The raw field value; bits at or above `width` are ignored.
/// * `width` - Number of valid bits in `field`, in `[1, 32]`.
#[inline]
pub fn sign_extend(field: u32, width: u32) -> i32 {
    debug_assert!((1..=WORD_BITS).contains(&width));
    let shift = WORD_BITS - width;
    ((field << shift) as i32) >> shift
}
