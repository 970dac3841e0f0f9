//! Bit-exact R-type encoding of the multiply instructions.
//!
//! These constants are the single source of truth: the invoker feeds them to
//! the assembler as `const` operands, and the simulator decodes the words
//! built here.

use crate::variant::MulVariant;

/// Major opcode for register-register integer operations.
pub const OPCODE_OP: u32 = 0x33;

/// Function-group value selecting the M extension under `OPCODE_OP`.
pub const FUNCT7_MULDIV: u32 = 0x01;

pub const FUNCT3_MUL: u32 = MulVariant::Mul.funct3();
pub const FUNCT3_MULH: u32 = MulVariant::Mulh.funct3();
pub const FUNCT3_MULHSU: u32 = MulVariant::Mulhsu.funct3();
pub const FUNCT3_MULHU: u32 = MulVariant::Mulhu.funct3();

/// A decoded multiply: which variant and which registers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MulInsn {
    pub variant: MulVariant,
    pub rd: u8,
    pub rs1: u8,
    pub rs2: u8,
}

fn encode_r(funct7: u32, rs2: u32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
    (funct7 << 25) | (rs2 << 20) | (rs1 << 15) | (funct3 << 12) | (rd << 7) | opcode
}

/// Encode `variant rd, rs1, rs2`. Register numbers are masked to 5 bits.
pub fn encode(variant: MulVariant, rd: u8, rs1: u8, rs2: u8) -> u32 {
    encode_r(
        FUNCT7_MULDIV,
        (rs2 & 0x1F) as u32,
        (rs1 & 0x1F) as u32,
        variant.funct3(),
        (rd & 0x1F) as u32,
        OPCODE_OP,
    )
}

/// Recognise one of the four multiply words. DIV/REM and everything outside
/// the M group yield `None`.
pub fn decode(insn: u32) -> Option<MulInsn> {
    let opcode = insn & 0x7F;
    let funct3 = (insn >> 12) & 0x7;
    let funct7 = (insn >> 25) & 0x7F;

    if opcode != OPCODE_OP || funct7 != FUNCT7_MULDIV {
        return None;
    }
    Some(MulInsn {
        variant: MulVariant::from_funct3(funct3)?,
        rd: ((insn >> 7) & 0x1F) as u8,
        rs1: ((insn >> 15) & 0x1F) as u8,
        rs2: ((insn >> 20) & 0x1F) as u8,
    })
}

impl MulInsn {
    pub fn encode(&self) -> u32 {
        encode(self.variant, self.rd, self.rs1, self.rs2)
    }
}
