//! Common utilities and types used throughout the RV32 simulator.
//!
//! This module provides fundamental building blocks shared across all
//! components of the simulator. It includes:
//! 1. **Constants:** System-wide constants for memory, instructions, and registers.
//! 2. **Memory Access:** Definitions for categorizing memory operations (Fetch/Read/Write)
//!    and for the three architectural access widths (byte, halfword, word).
//! 3. **Error Handling:** The fatal-error taxonomy of the simulator.
//! 4. **Register Management:** The general-purpose register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type and access width definitions.
pub mod data;

/// Fatal error taxonomy.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use data::{AccessType, AccessWidth};
pub use error::SimError;
pub use reg::RegisterFile;
