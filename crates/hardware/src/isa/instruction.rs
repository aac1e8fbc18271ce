//! Instruction encoding structures and bit extraction utilities.
//!
//! Provides the field-extraction trait over raw 32-bit encodings and the
//! typed `Instruction` record produced by decode. Each instruction format is
//! its own variant, so a field can never be read through the wrong format's
//! layout.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for a 5-bit register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for a 12-bit I-type immediate.
pub const IMM12_MASK: u32 = 0xFFF;
/// Bit mask for a 20-bit U/UJ-type immediate.
pub const IMM20_MASK: u32 = 0xFFFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract the standard RISC-V instruction fields from a
/// 32-bit encoding. The opcode is always extracted first; all other fields
/// are shifted-and-masked fixed-width slices.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// Extracts the raw 12-bit I-type immediate field (bits 20-31), unextended.
    fn imm12(&self) -> u32;

    /// Extracts the raw 20-bit U/UJ-type immediate field (bits 12-31), unshifted.
    fn imm20(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn imm12(&self) -> u32 {
        (self >> 20) & IMM12_MASK
    }

    #[inline(always)]
    fn imm20(&self) -> u32 {
        (self >> 12) & IMM20_MASK
    }
}

/// A decoded instruction, tagged by encoding format.
///
/// Every variant retains the original 32-bit word for diagnostics. Register
/// indices are in `[0, 31]` by construction (5-bit field width); no further
/// bounds are enforced.
///
/// I-type immediates arrive already sign-extended to register width. The
/// S/SB/U/UJ immediates are kept as the raw unscrambled fragments and are
/// only assembled into signed offsets at use-site (see [`crate::isa::offsets`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Register-register format (`OP_REG` and the custom fused opcode).
    RType {
        /// Original 32-bit encoding.
        raw: u32,
        /// Destination register index.
        rd: usize,
        /// First source register index.
        rs1: usize,
        /// Second source register index.
        rs2: usize,
        /// Minor function code (bits 12-14).
        funct3: u32,
        /// Major function code (bits 25-31).
        funct7: u32,
    },

    /// Immediate format (arithmetic-immediate and load opcodes).
    IType {
        /// Original 32-bit encoding.
        raw: u32,
        /// Destination register index.
        rd: usize,
        /// Source register index.
        rs1: usize,
        /// Minor function code (bits 12-14).
        funct3: u32,
        /// Immediate, sign-extended from 12 bits at decode time.
        imm: i32,
    },

    /// Store format. Offset fragments are raw and unscrambled.
    SType {
        /// Original 32-bit encoding.
        raw: u32,
        /// Base address register index.
        rs1: usize,
        /// Source data register index.
        rs2: usize,
        /// Minor function code (bits 12-14).
        funct3: u32,
        /// Raw immediate fragment from bits [11:7].
        imm5: u32,
        /// Raw immediate fragment from bits [31:25].
        imm7: u32,
    },

    /// Branch format. Offset fragments are raw and unscrambled.
    SBType {
        /// Original 32-bit encoding.
        raw: u32,
        /// First comparison register index.
        rs1: usize,
        /// Second comparison register index.
        rs2: usize,
        /// Minor function code (bits 12-14).
        funct3: u32,
        /// Raw immediate fragment from bits [11:7].
        imm5: u32,
        /// Raw immediate fragment from bits [31:25].
        imm7: u32,
    },

    /// Upper-immediate format (LUI). The 20-bit field is unshifted.
    UType {
        /// Original 32-bit encoding.
        raw: u32,
        /// Destination register index.
        rd: usize,
        /// Raw 20-bit immediate field.
        imm: u32,
    },

    /// Jump format (JAL). The 20-bit field uses the scrambled jump encoding.
    UJType {
        /// Original 32-bit encoding.
        raw: u32,
        /// Link register index.
        rd: usize,
        /// Raw 20-bit immediate field.
        imm: u32,
    },

    /// Environment call. Carries no operand fields in this ISA subset.
    Ecall {
        /// Original 32-bit encoding.
        raw: u32,
    },
}

impl Instruction {
    /// Returns the original 32-bit encoding of the instruction.
    pub const fn raw(&self) -> u32 {
        match *self {
            Self::RType { raw, .. }
            | Self::IType { raw, .. }
            | Self::SType { raw, .. }
            | Self::SBType { raw, .. }
            | Self::UType { raw, .. }
            | Self::UJType { raw, .. }
            | Self::Ecall { raw } => raw,
        }
    }
}
