use mulcheck::MulVariant;
use mulcheck::encoding::{FUNCT7_MULDIV, OPCODE_OP};
use thiserror::Error;

/// An integer register number, `x0`..`x31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register(u8);

impl Register {
    pub const ZERO: Register = Register(0);
    pub const A0: Register = Register(10);
    pub const A1: Register = Register(11);
    pub const A2: Register = Register(12);

    pub fn from_u32(v: u32) -> Self {
        Register((v & 0x1F) as u8)
    }

    pub fn to_usize(&self) -> usize {
        self.0 as usize
    }

    pub fn number(&self) -> u8 {
        self.0
    }
}

/// Decoding failures for words the hart does not execute.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unsupported opcode {opcode:#04x} in {insn:#010x}")]
    UnsupportedOpcode { insn: u32, opcode: u32 },

    #[error("illegal instruction {0:#010x}")]
    IllegalInstruction(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Mul {
        variant: MulVariant,
        rd: Register,
        rs1: Register,
        rs2: Register,
    },
}

/// Decode one 32-bit word. Only the OP-major M-group multiplies are accepted.
pub fn decode(insn: u32) -> Result<Op, DecodeError> {
    let opcode = insn & 0x7F;
    let rd = Register::from_u32((insn >> 7) & 0x1F);
    let funct3 = (insn >> 12) & 0x7;
    let rs1 = Register::from_u32((insn >> 15) & 0x1F);
    let rs2 = Register::from_u32((insn >> 20) & 0x1F);
    let funct7 = (insn >> 25) & 0x7F;

    if opcode != OPCODE_OP {
        return Err(DecodeError::UnsupportedOpcode { insn, opcode });
    }
    match (funct3, funct7) {
        (f3, FUNCT7_MULDIV) => MulVariant::from_funct3(f3)
            .map(|variant| Op::Mul { variant, rd, rs1, rs2 })
            .ok_or(DecodeError::IllegalInstruction(insn)),
        _ => Err(DecodeError::IllegalInstruction(insn)),
    }
}
