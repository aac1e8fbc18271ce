//! Branch, jump, and store offset assembly.
//!
//! The SB, UJ, and S instruction formats scatter their immediates across the
//! encoding in a bit order mandated by the ISA. Decode keeps the raw fragments
//! untouched; these three functions recombine them into signed byte offsets at
//! use-site. The permutations are reproduced bit-for-bit; any reordering
//! breaks binary compatibility with real RISC-V encodings.

use crate::isa::bits::sign_extend;

/// Width of the reassembled branch offset in bits (sign bit included).
const BRANCH_OFFSET_BITS: u32 = 13;

/// Width of the reassembled jump offset in bits (sign bit included).
const JUMP_OFFSET_BITS: u32 = 21;

/// Width of the reassembled store offset in bits (sign bit included).
const STORE_OFFSET_BITS: u32 = 12;

/// Assembles the branch offset from the SB-type immediate fragments.
///
/// Layout of the 13-bit offset (bit 0 is implicitly zero):
/// - offset[4:1]  = imm5[4:1]
/// - offset[11]   = imm5[0]
/// - offset[10:5] = imm7[5:0]
/// - offset[12]   = imm7[6]
///
/// # Arguments
///
/// * `imm5` - The 5-bit fragment from instruction bits [11:7].
/// * `imm7` - The 7-bit fragment from instruction bits [31:25].
pub fn branch_offset(imm5: u32, imm7: u32) -> i32 {
    let combined = (imm5 & 0b11110)
        | ((imm5 & 0b00001) << 11)
        | ((imm7 & 0b0111111) << 5)
        | ((imm7 & 0b1000000) << 6);
    sign_extend(combined, BRANCH_OFFSET_BITS)
}

/// Assembles the jump offset from the 20-bit UJ-type immediate field.
///
/// The field holds instruction bits [31:12]. Layout of the 21-bit offset
/// (bit 0 is implicitly zero):
/// - offset[10:1]  = field[18:9]
/// - offset[11]    = field[8]
/// - offset[19:12] = field[7:0]
/// - offset[20]    = field[19]
///
/// # Arguments
///
/// * `imm` - The raw 20-bit UJ immediate field.
pub fn jump_offset(imm: u32) -> i32 {
    let combined = (((imm >> 9) & 0x3FF) << 1)
        | (((imm >> 8) & 0x1) << 11)
        | ((imm & 0xFF) << 12)
        | (((imm >> 19) & 0x1) << 20);
    sign_extend(combined, JUMP_OFFSET_BITS)
}

/// Assembles the store offset from the S-type immediate fragments.
///
/// The 12-bit offset is simply `imm7 << 5 | imm5`, sign-extended.
///
/// # Arguments
///
/// * `imm5` - The 5-bit fragment from instruction bits [11:7].
/// * `imm7` - The 7-bit fragment from instruction bits [31:25].
pub fn store_offset(imm5: u32, imm7: u32) -> i32 {
    sign_extend((imm7 << 5) | imm5, STORE_OFFSET_BITS)
}
