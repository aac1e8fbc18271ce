//! Environment-Call Handling.
//!
//! Dispatches `ecall` on the syscall number in `a0` (x10), with the argument
//! in `a1` (x11). Four services exist: print integer, print NUL-terminated
//! string, exit, and print character. Any other number is a fatal
//! [`SimError::InvalidEcall`].

use super::Cpu;
use crate::common::constants::INSTRUCTION_BYTES;
use crate::common::data::AccessWidth;
use crate::common::error::SimError;
use crate::isa::abi;
use crate::memory::Memory;

/// Print the argument as a signed decimal integer.
const SYS_PRINT_INT: u32 = 1;
/// Print the NUL-terminated string starting at the argument address.
const SYS_PRINT_STRING: u32 = 4;
/// Print the exit message and terminate the run with success status.
const SYS_EXIT: u32 = 10;
/// Print the argument as a single character.
const SYS_PRINT_CHAR: u32 = 11;

/// Message printed by the `exit` environment call.
const EXIT_MESSAGE: &str = "exiting the simulator";

impl Cpu {
    /// Executes an environment call.
    ///
    /// All services except `exit` advance the PC by one instruction; `exit`
    /// latches a zero status and leaves the PC untouched.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidEcall`] for an unknown syscall number, or a console
    /// write failure.
    pub(crate) fn execute_ecall(&mut self, memory: &Memory) -> Result<(), SimError> {
        let number = self.regs.read(abi::REG_A0);
        let arg = self.regs.read(abi::REG_A1);

        match number {
            SYS_PRINT_INT => write!(self.console(), "{}", arg as i32)?,

            SYS_PRINT_STRING => {
                // NUL-terminated, bounded by the memory size.
                let mut addr = arg;
                while (addr as usize) < memory.len() {
                    let byte = memory.load(addr, AccessWidth::Byte)? as u8;
                    if byte == 0 {
                        break;
                    }
                    self.console().write_all(&[byte])?;
                    addr = addr.wrapping_add(1);
                }
            }

            SYS_EXIT => {
                writeln!(self.console(), "{EXIT_MESSAGE}")?;
                self.exit_code = Some(0);
                return Ok(());
            }

            SYS_PRINT_CHAR => self.console().write_all(&[arg as u8])?,

            _ => return Err(SimError::InvalidEcall(number)),
        }

        self.pc = self.pc.wrapping_add(INSTRUCTION_BYTES);
        Ok(())
    }
}
