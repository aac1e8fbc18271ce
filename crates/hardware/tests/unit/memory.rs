//! Memory unit tests.
//!
//! Covers the little-endian byte layout, sign-extending loads at every
//! width, and the bounds-check errors with their exact diagnostic text.

use pretty_assertions::assert_eq;
use rstest::rstest;

use riscv32_core::common::data::{AccessType, AccessWidth};
use riscv32_core::{Memory, SimError};

#[test]
fn new_memory_is_zero_initialized() {
    let memory = Memory::new(256);
    assert_eq!(memory.len(), 256);
    assert_eq!(memory.load(0, AccessWidth::Word).unwrap(), 0);
    assert_eq!(memory.load(252, AccessWidth::Word).unwrap(), 0);
}

#[test]
fn words_are_stored_little_endian() {
    let mut memory = Memory::new(256);
    memory.store(100, AccessWidth::Word, 0xDEAD_BEEF).unwrap();
    assert_eq!(memory.load(100, AccessWidth::Byte).unwrap() as u8, 0xEF);
    assert_eq!(memory.load(101, AccessWidth::Byte).unwrap() as u8, 0xBE);
    assert_eq!(memory.load(102, AccessWidth::Byte).unwrap() as u8, 0xAD);
    assert_eq!(memory.load(103, AccessWidth::Byte).unwrap() as u8, 0xDE);
}

#[test]
fn word_load_is_sign_extended_identity() {
    let mut memory = Memory::new(256);
    memory.store(100, AccessWidth::Word, 0xDEAD_BEEF).unwrap();
    assert_eq!(memory.load(100, AccessWidth::Word).unwrap(), -559_038_737);
}

#[rstest]
#[case(AccessWidth::Byte, 0xFF, -1)]
#[case(AccessWidth::Byte, 0x7F, 127)]
#[case(AccessWidth::Half, 0x8000, -32768)]
#[case(AccessWidth::Half, 0x7FFF, 32767)]
fn narrow_loads_sign_extend(#[case] width: AccessWidth, #[case] value: u32, #[case] expected: i32) {
    let mut memory = Memory::new(256);
    memory.store(50, width, value).unwrap();
    assert_eq!(memory.load(50, width).unwrap(), expected);
}

#[test]
fn narrow_stores_truncate_the_value() {
    let mut memory = Memory::new(256);
    memory.store(0, AccessWidth::Word, 0xFFFF_FFFF).unwrap();
    memory.store(0, AccessWidth::Byte, 0x1_0042).unwrap();
    assert_eq!(memory.load(0, AccessWidth::Word).unwrap() as u32, 0xFFFF_FF42);
}

#[test]
fn fetch_reads_a_word() {
    let mut memory = Memory::new(256);
    memory.store(8, AccessWidth::Word, 0x0000_0073).unwrap();
    assert_eq!(memory.fetch(8).unwrap(), 0x0000_0073);
}

#[test]
fn load_past_the_end_is_rejected() {
    let memory = Memory::new(256);
    match memory.load(256, AccessWidth::Byte) {
        Err(SimError::OutOfBoundsMemoryAccess { access, addr }) => {
            assert_eq!(access, AccessType::Read);
            assert_eq!(addr, 256);
        }
        other => panic!("expected OutOfBoundsMemoryAccess, got {other:?}"),
    }
}

#[test]
fn load_straddling_the_end_is_rejected() {
    let memory = Memory::new(256);
    assert!(memory.load(254, AccessWidth::Word).is_err());
    assert!(memory.load(255, AccessWidth::Half).is_err());
}

#[test]
fn store_past_the_end_is_rejected() {
    let mut memory = Memory::new(256);
    match memory.store(300, AccessWidth::Word, 0) {
        Err(SimError::OutOfBoundsMemoryAccess { access, addr }) => {
            assert_eq!(access, AccessType::Write);
            assert_eq!(addr, 300);
        }
        other => panic!("expected OutOfBoundsMemoryAccess, got {other:?}"),
    }
}

#[test]
fn fetch_past_the_end_is_rejected() {
    let memory = Memory::new(256);
    match memory.fetch(256) {
        Err(SimError::OutOfBoundsMemoryAccess { access, .. }) => {
            assert_eq!(access, AccessType::Fetch);
        }
        other => panic!("expected OutOfBoundsMemoryAccess, got {other:?}"),
    }
}

#[test]
fn address_overflow_is_rejected_not_wrapped() {
    let memory = Memory::new(256);
    assert!(memory.load(u32::MAX, AccessWidth::Word).is_err());
}

#[test]
fn bounds_errors_format_the_access_and_address() {
    let memory = Memory::new(256);
    let err = memory.load(0x400, AccessWidth::Byte).unwrap_err();
    assert_eq!(err.to_string(), "Bad Read. Address: 0x00000400");
    let err = memory.fetch(0x400).unwrap_err();
    assert_eq!(err.to_string(), "Bad Fetch. Address: 0x00000400");
}
