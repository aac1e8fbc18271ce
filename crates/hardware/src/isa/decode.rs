//! Instruction Decoder.
//!
//! This module reconstructs a typed [`Instruction`] record from a raw 32-bit
//! word. It extracts the opcode from bits [6:0] first, then the remaining
//! fields of the format that opcode selects. I-type immediates (the
//! arithmetic-immediate and load opcodes) are sign-extended to register width
//! here; the store/branch/upper-immediate/jump immediates keep their raw
//! unscrambled fragments for lazy assembly in [`crate::isa::offsets`].

use crate::common::error::SimError;
use crate::isa::bits::sign_extend;
use crate::isa::custom::opcodes as custom_op;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::rv32i::opcodes;

/// Width of the I-type immediate field in bits.
const I_IMM_BITS: u32 = 12;

/// Decodes a raw 32-bit word into a typed instruction record.
///
/// # Arguments
///
/// * `raw` - The 32-bit instruction encoding to decode.
///
/// # Errors
///
/// Returns [`SimError::InvalidOpcode`] when bits [6:0] match no opcode this
/// simulator knows. The error is fatal: the driver reports the raw word and
/// halts, since a non-representable encoding is an input error, not a
/// runtime fault.
pub fn decode(raw: u32) -> Result<Instruction, SimError> {
    match raw.opcode() {
        opcodes::OP_REG | custom_op::OP_CUSTOM => Ok(Instruction::RType {
            raw,
            rd: raw.rd(),
            rs1: raw.rs1(),
            rs2: raw.rs2(),
            funct3: raw.funct3(),
            funct7: raw.funct7(),
        }),

        opcodes::OP_IMM | opcodes::OP_LOAD => Ok(Instruction::IType {
            raw,
            rd: raw.rd(),
            rs1: raw.rs1(),
            funct3: raw.funct3(),
            imm: sign_extend(raw.imm12(), I_IMM_BITS),
        }),

        opcodes::OP_STORE => Ok(Instruction::SType {
            raw,
            rs1: raw.rs1(),
            rs2: raw.rs2(),
            funct3: raw.funct3(),
            imm5: (raw >> 7) & 0x1F,
            imm7: raw.funct7(),
        }),

        opcodes::OP_BRANCH => Ok(Instruction::SBType {
            raw,
            rs1: raw.rs1(),
            rs2: raw.rs2(),
            funct3: raw.funct3(),
            imm5: (raw >> 7) & 0x1F,
            imm7: raw.funct7(),
        }),

        opcodes::OP_LUI => Ok(Instruction::UType {
            raw,
            rd: raw.rd(),
            imm: raw.imm20(),
        }),

        opcodes::OP_JAL => Ok(Instruction::UJType {
            raw,
            rd: raw.rd(),
            imm: raw.imm20(),
        }),

        opcodes::OP_SYSTEM => Ok(Instruction::Ecall { raw }),

        _ => Err(SimError::InvalidOpcode(raw)),
    }
}
