//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction encoding into its display string for the
//! textual listing mode. The output is a compatibility contract: fixed
//! templates per category, numeric register names, decimal immediates.
//!
//! # Templates
//!
//! - R-type / custom: `name xD, xS1, xS2`
//! - I-type:          `name xD, xS1, imm`
//! - Load / store:    `name xD, imm(xS1)`
//! - Branch:          `name xS1, xS2, offset`
//! - LUI:             `lui xD, imm` (raw 20-bit field, decimal)
//! - JAL:             `jal xD, offset`
//! - ECALL:           `ecall`
//!
//! # Usage
//!
//! ```
//! use riscv32_core::isa::disasm::disassemble;
//! let text = disassemble(0x00A00513).unwrap(); // ADDI x10, x0, 10
//! assert_eq!(text, "addi x10, x0, 10");
//! ```

use crate::common::error::SimError;
use crate::isa::custom::funct3 as c_f3;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::isa::offsets::{branch_offset, jump_offset, store_offset};
use crate::isa::rv32i::{funct3 as i_f3, funct7 as i_f7, opcodes as i_op};
use crate::isa::rv32m::funct7 as m_f7;

/// Mask selecting the 5-bit shift amount from an I-type immediate.
const SHAMT_MASK: i32 = 0x1F;

/// Disassembles a raw 32-bit word into its display string.
///
/// # Arguments
///
/// * `raw` - The 32-bit instruction encoding.
///
/// # Errors
///
/// Unknown encodings produce the same [`SimError::InvalidOpcode`] /
/// [`SimError::InvalidInstruction`] errors the execution path produces.
pub fn disassemble(raw: u32) -> Result<String, SimError> {
    match decode(raw)? {
        Instruction::RType {
            raw,
            rd,
            rs1,
            rs2,
            funct3,
            funct7,
        } => {
            let name = if raw & 0x7F == i_op::OP_REG {
                rtype_name(raw, funct3, funct7)?
            } else {
                custom_name(raw, funct3)?
            };
            Ok(format!("{name} x{rd}, x{rs1}, x{rs2}"))
        }

        Instruction::IType {
            raw,
            rd,
            rs1,
            funct3,
            imm,
        } => {
            if raw & 0x7F == i_op::OP_LOAD {
                let name = match funct3 {
                    i_f3::LB => "lb",
                    i_f3::LH => "lh",
                    i_f3::LW => "lw",
                    _ => return Err(SimError::InvalidInstruction(raw)),
                };
                Ok(format!("{name} x{rd}, {imm}(x{rs1})"))
            } else {
                let (name, imm) = itype_name(raw, funct3, imm)?;
                Ok(format!("{name} x{rd}, x{rs1}, {imm}"))
            }
        }

        Instruction::SType {
            raw,
            rs1,
            rs2,
            funct3,
            imm5,
            imm7,
        } => {
            let name = match funct3 {
                i_f3::SB => "sb",
                i_f3::SH => "sh",
                i_f3::SW => "sw",
                _ => return Err(SimError::InvalidInstruction(raw)),
            };
            let offset = store_offset(imm5, imm7);
            Ok(format!("{name} x{rs2}, {offset}(x{rs1})"))
        }

        Instruction::SBType {
            raw,
            rs1,
            rs2,
            funct3,
            imm5,
            imm7,
        } => {
            let name = match funct3 {
                i_f3::BEQ => "beq",
                i_f3::BNE => "bne",
                _ => return Err(SimError::InvalidInstruction(raw)),
            };
            let offset = branch_offset(imm5, imm7);
            Ok(format!("{name} x{rs1}, x{rs2}, {offset}"))
        }

        Instruction::UType { rd, imm, .. } => Ok(format!("lui x{rd}, {imm}")),

        Instruction::UJType { rd, imm, .. } => {
            let offset = jump_offset(imm);
            Ok(format!("jal x{rd}, {offset}"))
        }

        Instruction::Ecall { .. } => Ok("ecall".to_owned()),
    }
}

/// Mnemonic for an `OP_REG` instruction, base set and M subset.
fn rtype_name(raw: u32, funct3: u32, funct7: u32) -> Result<&'static str, SimError> {
    let name = match (funct3, funct7) {
        (i_f3::ADD_SUB, i_f7::DEFAULT) => "add",
        (i_f3::ADD_SUB, m_f7::MULDIV) => "mul",
        (i_f3::ADD_SUB, i_f7::SUB) => "sub",
        (i_f3::SLL, i_f7::DEFAULT) => "sll",
        (i_f3::SLL, m_f7::MULDIV) => "mulh",
        // funct7 is ignored for SLT and AND; see the execute dispatcher.
        (i_f3::SLT, _) => "slt",
        (i_f3::XOR, i_f7::DEFAULT) => "xor",
        (i_f3::XOR, m_f7::MULDIV) => "div",
        (i_f3::SRL_SRA, i_f7::DEFAULT) => "srl",
        (i_f3::SRL_SRA, i_f7::SRA) => "sra",
        (i_f3::OR, i_f7::DEFAULT) => "or",
        (i_f3::OR, m_f7::MULDIV) => "rem",
        (i_f3::AND, _) => "and",
        _ => return Err(SimError::InvalidInstruction(raw)),
    };
    Ok(name)
}

/// Mnemonic for a custom fused operation.
fn custom_name(raw: u32, funct3: u32) -> Result<&'static str, SimError> {
    match funct3 {
        c_f3::MAC => Ok("mac"),
        c_f3::ACC => Ok("acc"),
        c_f3::GEP => Ok("gep"),
        _ => Err(SimError::InvalidInstruction(raw)),
    }
}

/// Mnemonic and display immediate for an `OP_IMM` instruction.
///
/// Shift instructions display the 5-bit shift amount instead of the full
/// immediate; SRLI and SRAI are disambiguated by immediate bits [11:5].
fn itype_name(raw: u32, funct3: u32, imm: i32) -> Result<(&'static str, i32), SimError> {
    match funct3 {
        0x0 => Ok(("addi", imm)),
        0x1 => Ok(("slli", imm & SHAMT_MASK)),
        0x2 => Ok(("slti", imm)),
        0x4 => Ok(("xori", imm)),
        0x5 => match ((imm as u32) >> 5) & 0x7F {
            i_f7::DEFAULT => Ok(("srli", imm & SHAMT_MASK)),
            i_f7::SRA => Ok(("srai", imm & SHAMT_MASK)),
            _ => Err(SimError::InvalidInstruction(raw)),
        },
        0x6 => Ok(("ori", imm)),
        0x7 => Ok(("andi", imm)),
        _ => Err(SimError::InvalidInstruction(raw)),
    }
}
