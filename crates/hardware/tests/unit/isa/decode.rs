//! Decoder unit tests.
//!
//! Verifies that each opcode maps to the correct instruction record, that
//! I-type immediates are sign-extended at decode time, that the scrambled
//! formats keep their raw fragments, and that unknown opcodes are rejected.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::encode;
use riscv32_core::SimError;
use riscv32_core::isa::decode::decode;
use riscv32_core::isa::instruction::Instruction;
use riscv32_core::isa::rv32i::{funct3 as i_f3, funct7 as i_f7, opcodes};

#[test]
fn rtype_fields_are_extracted() {
    let raw = encode::r_type(opcodes::OP_REG, 1, i_f3::ADD_SUB, 2, 3, i_f7::SUB);
    match decode(raw) {
        Ok(Instruction::RType { rd, rs1, rs2, funct3, funct7, .. }) => {
            assert_eq!(rd, 1);
            assert_eq!(rs1, 2);
            assert_eq!(rs2, 3);
            assert_eq!(funct3, i_f3::ADD_SUB);
            assert_eq!(funct7, i_f7::SUB);
        }
        other => panic!("expected RType, got {other:?}"),
    }
}

#[rstest]
#[case(10, 10)]
#[case(-1, -1)]
#[case(-2048, -2048)]
#[case(2047, 2047)]
fn itype_immediate_is_sign_extended(#[case] imm: i32, #[case] expected: i32) {
    let raw = encode::i_type(opcodes::OP_IMM, 5, i_f3::ADD_SUB, 6, imm);
    match decode(raw) {
        Ok(Instruction::IType { imm, .. }) => assert_eq!(imm, expected),
        other => panic!("expected IType, got {other:?}"),
    }
}

#[test]
fn loads_decode_as_itype() {
    let raw = encode::i_type(opcodes::OP_LOAD, 1, i_f3::LW, 2, -4);
    match decode(raw) {
        Ok(Instruction::IType { rd, rs1, funct3, imm, .. }) => {
            assert_eq!(rd, 1);
            assert_eq!(rs1, 2);
            assert_eq!(funct3, i_f3::LW);
            assert_eq!(imm, -4);
        }
        other => panic!("expected IType, got {other:?}"),
    }
}

#[test]
fn store_keeps_raw_fragments() {
    let raw = encode::s_type(opcodes::OP_STORE, i_f3::SW, 2, 3, -4);
    match decode(raw) {
        Ok(Instruction::SType { rs1, rs2, funct3, imm5, imm7, .. }) => {
            assert_eq!(rs1, 2);
            assert_eq!(rs2, 3);
            assert_eq!(funct3, i_f3::SW);
            // -4 = 0xFFC split across the fields; no assembly at decode time.
            assert_eq!(imm5, 0x1C);
            assert_eq!(imm7, 0x7F);
        }
        other => panic!("expected SType, got {other:?}"),
    }
}

#[test]
fn branch_keeps_raw_fragments() {
    let raw = encode::b_type(opcodes::OP_BRANCH, i_f3::BNE, 4, 5, 8);
    match decode(raw) {
        Ok(Instruction::SBType { rs1, rs2, funct3, imm5, imm7, .. }) => {
            assert_eq!(rs1, 4);
            assert_eq!(rs2, 5);
            assert_eq!(funct3, i_f3::BNE);
            assert_eq!(imm5, 0b01000);
            assert_eq!(imm7, 0);
        }
        other => panic!("expected SBType, got {other:?}"),
    }
}

#[test]
fn lui_keeps_raw_twenty_bit_field() {
    let raw = encode::u_type(opcodes::OP_LUI, 7, 0xF_F000);
    match decode(raw) {
        Ok(Instruction::UType { rd, imm, .. }) => {
            assert_eq!(rd, 7);
            assert_eq!(imm, 0xF_F000);
        }
        other => panic!("expected UType, got {other:?}"),
    }
}

#[test]
fn jal_keeps_raw_twenty_bit_field() {
    let raw = encode::j_type(opcodes::OP_JAL, 1, 16);
    match decode(raw) {
        Ok(Instruction::UJType { rd, imm, .. }) => {
            assert_eq!(rd, 1);
            // offset 16 lands in field bits [18:9] as 8.
            assert_eq!(imm, 8 << 9);
        }
        other => panic!("expected UJType, got {other:?}"),
    }
}

#[test]
fn system_opcode_decodes_as_ecall() {
    assert!(matches!(decode(0x0000_0073), Ok(Instruction::Ecall { .. })));
}

#[test]
fn custom_opcode_decodes_as_rtype() {
    let raw = encode::r_type(
        riscv32_core::isa::custom::opcodes::OP_CUSTOM,
        1,
        riscv32_core::isa::custom::funct3::MAC,
        2,
        3,
        0,
    );
    assert!(matches!(decode(raw), Ok(Instruction::RType { .. })));
}

#[test]
fn decoded_records_retain_the_raw_word() {
    let raw = encode::r_type(opcodes::OP_REG, 1, i_f3::ADD_SUB, 2, 3, i_f7::DEFAULT);
    let inst = decode(raw).unwrap();
    assert_eq!(inst.raw(), raw);
}

#[rstest]
#[case(0x0000_007F)]
#[case(0x0000_0000)]
#[case(0xFFFF_FFFF)]
fn unknown_opcodes_are_rejected(#[case] raw: u32) {
    match decode(raw) {
        Err(SimError::InvalidOpcode(word)) => assert_eq!(word, raw),
        other => panic!("expected InvalidOpcode, got {other:?}"),
    }
}

#[test]
fn invalid_opcode_error_formats_the_word() {
    let err = decode(0x0000_007F).unwrap_err();
    assert_eq!(err.to_string(), "Invalid Instruction: 0x0000007f");
}
