//! Execution Dispatcher.
//!
//! This module implements the top-level step function of the simulator:
//! decode one raw word, dispatch on (opcode, funct3, funct7), and mutate the
//! processor state in place. It performs the following:
//! 1. **Arithmetic:** RV32I register/immediate operations with two's-complement
//!    wrapping, plus the signed M-subset (MUL, MULH, DIV, REM).
//! 2. **Memory:** Width-parameterized loads and stores through the bounds-checked
//!    memory unit, with addresses formed from rs1 plus the reassembled offsets.
//! 3. **Control Flow:** BEQ/BNE, JAL, and the sequential PC advance.
//! 4. **Fused Operations:** The custom MAC/ACC/GEP read-modify-write ops.
//!
//! Any unmatched funct3/funct7 combination is a fatal
//! [`SimError::InvalidInstruction`]; there is no trap or resumption model.

use super::Cpu;
use crate::common::data::AccessWidth;
use crate::common::error::SimError;
use crate::common::constants::INSTRUCTION_BYTES;
use crate::isa::custom::{funct3 as c_f3, opcodes as custom_op};
use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::offsets::{branch_offset, jump_offset, store_offset};
use crate::isa::rv32i::{funct3 as i_f3, funct7 as i_f7, opcodes as i_op};
use crate::isa::rv32m::funct7 as m_f7;
use crate::memory::Memory;

/// Mask selecting a 5-bit shift amount.
const SHAMT_MASK: u32 = 0x1F;

/// Number of bits LUI shifts its immediate into the upper word.
const LUI_SHIFT: u32 = 12;

impl Cpu {
    /// Executes one instruction: decode `raw`, apply its semantics to the
    /// register file, PC, and memory.
    ///
    /// # Arguments
    ///
    /// * `raw` - The fetched 32-bit instruction word.
    /// * `memory` - The flat memory, mutated by stores and ecall output reads.
    ///
    /// # Errors
    ///
    /// Every error is fatal: [`SimError::InvalidOpcode`],
    /// [`SimError::InvalidInstruction`], [`SimError::InvalidEcall`], or
    /// [`SimError::OutOfBoundsMemoryAccess`].
    pub fn step(&mut self, raw: u32, memory: &mut Memory) -> Result<(), SimError> {
        tracing::trace!(pc = self.pc, raw = format_args!("{raw:#010x}"), "step");
        self.stats.instructions_retired += 1;

        match decode(raw)? {
            Instruction::RType {
                raw,
                rd,
                rs1,
                rs2,
                funct3,
                funct7,
            } => {
                if raw.opcode() == custom_op::OP_CUSTOM {
                    self.execute_custom(raw, rd, rs1, rs2, funct3)
                } else {
                    self.execute_rtype(raw, rd, rs1, rs2, funct3, funct7)
                }
            }

            Instruction::IType {
                raw,
                rd,
                rs1,
                funct3,
                imm,
            } => {
                if raw.opcode() == i_op::OP_LOAD {
                    self.execute_load(raw, rd, rs1, funct3, imm, memory)
                } else {
                    self.execute_itype(raw, rd, rs1, funct3, imm)
                }
            }

            Instruction::SType {
                raw,
                rs1,
                rs2,
                funct3,
                imm5,
                imm7,
            } => self.execute_store(raw, rs1, rs2, funct3, imm5, imm7, memory),

            Instruction::SBType {
                raw,
                rs1,
                rs2,
                funct3,
                imm5,
                imm7,
            } => self.execute_branch(raw, rs1, rs2, funct3, imm5, imm7),

            Instruction::UType { rd, imm, .. } => {
                self.regs.write(rd, imm << LUI_SHIFT);
                self.advance_pc();
                self.stats.inst_alu += 1;
                Ok(())
            }

            Instruction::UJType { rd, imm, .. } => {
                self.regs
                    .write(rd, self.pc.wrapping_add(INSTRUCTION_BYTES));
                self.pc = self.pc.wrapping_add(jump_offset(imm) as u32);
                self.stats.inst_branch += 1;
                Ok(())
            }

            Instruction::Ecall { .. } => {
                self.stats.inst_system += 1;
                self.execute_ecall(memory)
            }
        }
    }

    /// Register-register arithmetic: base set plus the M subset.
    fn execute_rtype(
        &mut self,
        raw: u32,
        rd: usize,
        rs1: usize,
        rs2: usize,
        funct3: u32,
        funct7: u32,
    ) -> Result<(), SimError> {
        let a = self.regs.read(rs1) as i32;
        let b = self.regs.read(rs2) as i32;
        let shamt = (b as u32) & SHAMT_MASK;

        let value = match (funct3, funct7) {
            (i_f3::ADD_SUB, i_f7::DEFAULT) => a.wrapping_add(b),
            (i_f3::ADD_SUB, m_f7::MULDIV) => a.wrapping_mul(b),
            (i_f3::ADD_SUB, i_f7::SUB) => a.wrapping_sub(b),

            (i_f3::SLL, i_f7::DEFAULT) => a << shamt,
            // High 32 bits of the full 64-bit signed product.
            (i_f3::SLL, m_f7::MULDIV) => ((i64::from(a) * i64::from(b)) >> 32) as i32,

            // funct7 is not consulted for SLT and AND.
            (i_f3::SLT, _) => i32::from(a < b),

            (i_f3::XOR, i_f7::DEFAULT) => a ^ b,
            (i_f3::XOR, m_f7::MULDIV) => div(a, b),

            (i_f3::SRL_SRA, i_f7::DEFAULT) => ((a as u32) >> shamt) as i32,
            (i_f3::SRL_SRA, i_f7::SRA) => a >> shamt,

            (i_f3::OR, i_f7::DEFAULT) => a | b,
            (i_f3::OR, m_f7::MULDIV) => rem(a, b),

            (i_f3::AND, _) => a & b,

            _ => return Err(SimError::InvalidInstruction(raw)),
        };

        self.regs.write(rd, value as u32);
        self.advance_pc();
        self.stats.inst_alu += 1;
        Ok(())
    }

    /// Immediate arithmetic. The immediate is already sign-extended; shifts
    /// use its low 5 bits, with SRLI/SRAI disambiguated by bits [11:5].
    fn execute_itype(
        &mut self,
        raw: u32,
        rd: usize,
        rs1: usize,
        funct3: u32,
        imm: i32,
    ) -> Result<(), SimError> {
        let a = self.regs.read(rs1) as i32;
        let shamt = (imm as u32) & SHAMT_MASK;

        let value = match funct3 {
            0x0 => a.wrapping_add(imm),
            0x1 => a << shamt,
            0x2 => i32::from(a < imm),
            0x4 => a ^ imm,
            0x5 => match ((imm as u32) >> 5) & 0x7F {
                i_f7::DEFAULT => ((a as u32) >> shamt) as i32,
                i_f7::SRA => a >> shamt,
                _ => return Err(SimError::InvalidInstruction(raw)),
            },
            0x6 => a | imm,
            0x7 => a & imm,
            _ => return Err(SimError::InvalidInstruction(raw)),
        };

        self.regs.write(rd, value as u32);
        self.advance_pc();
        self.stats.inst_alu += 1;
        Ok(())
    }

    /// Loads: address = rs1 + sign-extended immediate; the loaded value is
    /// sign-extended to register width as part of the load.
    fn execute_load(
        &mut self,
        raw: u32,
        rd: usize,
        rs1: usize,
        funct3: u32,
        imm: i32,
        memory: &Memory,
    ) -> Result<(), SimError> {
        let width = match funct3 {
            i_f3::LB => AccessWidth::Byte,
            i_f3::LH => AccessWidth::Half,
            i_f3::LW => AccessWidth::Word,
            _ => return Err(SimError::InvalidInstruction(raw)),
        };

        let addr = self.regs.read(rs1).wrapping_add(imm as u32);
        let value = memory.load(addr, width)?;

        self.regs.write(rd, value as u32);
        self.advance_pc();
        self.stats.inst_load += 1;
        self.stats.bytes_read += width.bytes() as u64;
        Ok(())
    }

    /// Stores: address = rs1 + assembled store offset; the low bytes of rs2
    /// are written little-endian.
    fn execute_store(
        &mut self,
        raw: u32,
        rs1: usize,
        rs2: usize,
        funct3: u32,
        imm5: u32,
        imm7: u32,
        memory: &mut Memory,
    ) -> Result<(), SimError> {
        let width = match funct3 {
            i_f3::SB => AccessWidth::Byte,
            i_f3::SH => AccessWidth::Half,
            i_f3::SW => AccessWidth::Word,
            _ => return Err(SimError::InvalidInstruction(raw)),
        };

        let addr = self
            .regs
            .read(rs1)
            .wrapping_add(store_offset(imm5, imm7) as u32);
        memory.store(addr, width, self.regs.read(rs2))?;

        self.advance_pc();
        self.stats.inst_store += 1;
        self.stats.bytes_written += width.bytes() as u64;
        Ok(())
    }

    /// Conditional branches: full 32-bit equality/inequality on rs1 and rs2.
    fn execute_branch(
        &mut self,
        raw: u32,
        rs1: usize,
        rs2: usize,
        funct3: u32,
        imm5: u32,
        imm7: u32,
    ) -> Result<(), SimError> {
        let taken = match funct3 {
            i_f3::BEQ => self.regs.read(rs1) == self.regs.read(rs2),
            i_f3::BNE => self.regs.read(rs1) != self.regs.read(rs2),
            _ => return Err(SimError::InvalidInstruction(raw)),
        };

        if taken {
            self.pc = self.pc.wrapping_add(branch_offset(imm5, imm7) as u32);
            self.stats.branches_taken += 1;
        } else {
            self.advance_pc();
        }
        self.stats.inst_branch += 1;
        Ok(())
    }

    /// Custom fused read-modify-write operations on opcode 0x2b.
    fn execute_custom(
        &mut self,
        raw: u32,
        rd: usize,
        rs1: usize,
        rs2: usize,
        funct3: u32,
    ) -> Result<(), SimError> {
        let a = self.regs.read(rs1) as i32;
        let b = self.regs.read(rs2) as i32;
        let d = self.regs.read(rd) as i32;

        let value = match funct3 {
            c_f3::MAC => d.wrapping_add(a.wrapping_mul(b)),
            c_f3::ACC => d.wrapping_add(a.wrapping_add(b)),
            c_f3::GEP => a.wrapping_add(b << 4),
            _ => return Err(SimError::InvalidInstruction(raw)),
        };

        self.regs.write(rd, value as u32);
        self.advance_pc();
        self.stats.inst_alu += 1;
        Ok(())
    }

    /// Advances the PC past the current instruction.
    #[inline]
    fn advance_pc(&mut self) {
        self.pc = self.pc.wrapping_add(INSTRUCTION_BYTES);
    }
}

/// Signed division with the RISC-V M totalization: division by zero yields
/// -1; `i32::MIN / -1` wraps to `i32::MIN`.
fn div(a: i32, b: i32) -> i32 {
    if b == 0 { -1 } else { a.wrapping_div(b) }
}

/// Signed remainder with the RISC-V M totalization: remainder by zero yields
/// the dividend; `i32::MIN % -1` is 0.
fn rem(a: i32, b: i32) -> i32 {
    if b == 0 { a } else { a.wrapping_rem(b) }
}
