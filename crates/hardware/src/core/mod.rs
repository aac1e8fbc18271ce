//! Core processor implementation.
//!
//! This module contains the processor state container and the
//! decode-dispatch-execute engine that mutates it one instruction at a time.

/// CPU state container and execution dispatch.
pub mod cpu;

pub use self::cpu::Cpu;
