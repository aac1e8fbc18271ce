//! Program loading and the top-level run loop.

/// Hex program file loader.
pub mod loader;

/// Fetch/step loop and the disassembly listing mode.
pub mod simulator;

pub use simulator::Simulator;
