//! Offset reassembly round-trip properties.
//!
//! For every representable offset, scrambling it into the encoding's
//! fragments with the forward encoders and then running the assembly
//! function must recover the original value exactly. Any deviation breaks
//! binary compatibility with real RISC-V encodings.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use riscv32_core::isa::offsets::{branch_offset, jump_offset, store_offset};

/// Scrambles a branch offset into its (imm5, imm7) fragments.
fn encode_branch(offset: i32) -> (u32, u32) {
    let v = offset as u32;
    let imm5 = (((v >> 1) & 0xF) << 1) | ((v >> 11) & 1);
    let imm7 = ((v >> 5) & 0x3F) | (((v >> 12) & 1) << 6);
    (imm5, imm7)
}

/// Scrambles a jump offset into the raw 20-bit UJ field.
fn encode_jump(offset: i32) -> u32 {
    let v = offset as u32;
    (((v >> 1) & 0x3FF) << 9) | (((v >> 11) & 1) << 8) | ((v >> 12) & 0xFF) | (((v >> 20) & 1) << 19)
}

/// Splits a store offset into its (imm5, imm7) fragments.
fn encode_store(offset: i32) -> (u32, u32) {
    let v = offset as u32;
    (v & 0x1F, (v >> 5) & 0x7F)
}

proptest! {
    /// Every even branch offset in [-4096, 4094] survives the round trip.
    #[test]
    fn branch_offsets_round_trip(half in -2048i32..=2047) {
        let offset = half * 2;
        let (imm5, imm7) = encode_branch(offset);
        prop_assert_eq!(branch_offset(imm5, imm7), offset);
    }

    /// Every even jump offset in [-1048576, 1048574] survives the round trip.
    #[test]
    fn jump_offsets_round_trip(half in -524288i32..=524287) {
        let offset = half * 2;
        prop_assert_eq!(jump_offset(encode_jump(offset)), offset);
    }

    /// Every store offset in [-2048, 2047] survives the round trip.
    #[test]
    fn store_offsets_round_trip(offset in -2048i32..=2047) {
        let (imm5, imm7) = encode_store(offset);
        prop_assert_eq!(store_offset(imm5, imm7), offset);
    }
}

#[test]
fn branch_offset_extremes() {
    let (imm5, imm7) = encode_branch(-4096);
    assert_eq!(branch_offset(imm5, imm7), -4096);
    let (imm5, imm7) = encode_branch(4094);
    assert_eq!(branch_offset(imm5, imm7), 4094);
}

#[test]
fn branch_offset_bit_zero_is_implicitly_clear() {
    // imm5 bit 0 is offset bit 11, not offset bit 0.
    assert_eq!(branch_offset(0b00001, 0), 1 << 11);
    assert_eq!(branch_offset(0b00010, 0), 2);
}

#[test]
fn jump_offset_extremes() {
    assert_eq!(jump_offset(encode_jump(-1048576)), -1048576);
    assert_eq!(jump_offset(encode_jump(1048574)), 1048574);
}

#[test]
fn jump_offset_field_permutation() {
    // field[7:0] carries offset[19:12].
    assert_eq!(jump_offset(0x01), 1 << 12);
    // field[8] carries offset[11].
    assert_eq!(jump_offset(1 << 8), 1 << 11);
    // field[9] carries offset[1].
    assert_eq!(jump_offset(1 << 9), 2);
}

#[test]
fn store_offset_sign_extends() {
    assert_eq!(store_offset(0x1F, 0x7F), -1);
    assert_eq!(store_offset(0, 0x40), -2048);
    assert_eq!(store_offset(0x1F, 0x3F), 2047);
}
