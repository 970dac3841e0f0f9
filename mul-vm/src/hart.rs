use std::cell::Cell;
use std::rc::Rc;

use mulcheck::encoding::encode;
use mulcheck::{MulUnit, MulVariant};

use crate::decoder::{DecodeError, Op, Register, decode};

/// Shared view of a hart's retired-instruction count.
///
/// Handed to the LED bank so every output write can be stamped with how
/// much work had completed when it happened.
#[derive(Debug, Clone, Default)]
pub struct InstretProbe(Rc<Cell<u64>>);

impl InstretProbe {
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// A deliberately broken multiplier: `xor_mask` is flipped into every
/// result of `variant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault {
    pub variant: MulVariant,
    pub xor_mask: u32,
}

/// Minimal RV32 hart that executes the M-extension multiplies.
pub struct SimHart {
    regs: [u32; 32],
    instret: InstretProbe,
    fault: Option<Fault>,
}

impl SimHart {
    pub fn new() -> Self {
        Self {
            regs: [0; 32],
            instret: InstretProbe::default(),
            fault: None,
        }
    }

    pub fn with_fault(fault: Fault) -> Self {
        Self {
            fault: Some(fault),
            ..Self::new()
        }
    }

    pub fn probe(&self) -> InstretProbe {
        self.instret.clone()
    }

    pub fn instret(&self) -> u64 {
        self.instret.get()
    }

    pub fn read_reg(&self, reg: Register) -> u32 {
        self.regs[reg.to_usize()]
    }

    pub fn write_reg(&mut self, reg: Register, val: u32) {
        if reg != Register::ZERO {
            self.regs[reg.to_usize()] = val;
        }
    }

    /// Decode and execute one instruction word.
    pub fn step(&mut self, insn: u32) -> Result<(), DecodeError> {
        let op = decode(insn).inspect_err(|e| log::warn!("trap: {}", e))?;
        self.execute(op);
        self.instret.bump();
        Ok(())
    }

    fn execute(&mut self, op: Op) {
        match op {
            Op::Mul { variant, rd, rs1, rs2 } => {
                let a = self.read_reg(rs1);
                let b = self.read_reg(rs2);
                let mut val = match variant {
                    // MUL: low 32 bits; identical for any signedness
                    MulVariant::Mul => (a as i32 as i64).wrapping_mul(b as i32 as i64) as u32,
                    // MULH: high 32 bits of signed * signed
                    MulVariant::Mulh => {
                        ((a as i32 as i64).wrapping_mul(b as i32 as i64) >> 32) as u32
                    }
                    // MULHSU: high 32 bits of signed * unsigned
                    MulVariant::Mulhsu => {
                        ((a as i32 as i64).wrapping_mul(b as u64 as i64) >> 32) as u32
                    }
                    // MULHU: high 32 bits of unsigned * unsigned
                    MulVariant::Mulhu => ((a as u64).wrapping_mul(b as u64) >> 32) as u32,
                };
                if let Some(fault) = self.fault.filter(|f| f.variant == variant) {
                    val ^= fault.xor_mask;
                }
                self.write_reg(rd, val);
            }
        }
    }

    /// Stage operands in a0/a1, run `variant a2, a0, a1`, read a2.
    fn run(&mut self, variant: MulVariant, a: u32, b: u32) -> u32 {
        self.write_reg(Register::A0, a);
        self.write_reg(Register::A1, b);
        let insn = encode(
            variant,
            Register::A2.number(),
            Register::A0.number(),
            Register::A1.number(),
        );
        if let Err(e) = self.step(insn) {
            unreachable!("encoder produced an undecodable word: {e}");
        }
        self.read_reg(Register::A2)
    }
}

impl Default for SimHart {
    fn default() -> Self {
        Self::new()
    }
}

impl MulUnit for SimHart {
    fn mul(&mut self, a: u32, b: u32) -> u32 {
        self.run(MulVariant::Mul, a, b)
    }

    fn mulh(&mut self, a: i32, b: i32) -> u32 {
        self.run(MulVariant::Mulh, a as u32, b as u32)
    }

    fn mulhsu(&mut self, a: i32, b: u32) -> u32 {
        self.run(MulVariant::Mulhsu, a as u32, b)
    }

    fn mulhu(&mut self, a: u32, b: u32) -> u32 {
        self.run(MulVariant::Mulhu, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mulcheck::reference::reference;

    #[test]
    fn test_m_extension_mul_family() {
        let mut hart = SimHart::new();

        // MUL x3, x1, x2: 3 * 4 = 12
        hart.write_reg(Register::from_u32(1), 3);
        hart.write_reg(Register::from_u32(2), 4);
        hart.step(0x0220_81B3).unwrap();
        assert_eq!(hart.read_reg(Register::from_u32(3)), 12);

        // MULH / MULHSU / MULHU with x1 = i32::MIN, x2 = 2
        hart.write_reg(Register::from_u32(1), 0x8000_0000);
        hart.write_reg(Register::from_u32(2), 2);
        hart.step(encode(MulVariant::Mulh, 4, 1, 2)).unwrap();
        hart.step(encode(MulVariant::Mulhsu, 5, 1, 2)).unwrap();
        hart.step(encode(MulVariant::Mulhu, 6, 1, 2)).unwrap();

        assert_eq!(hart.read_reg(Register::from_u32(4)), 0xFFFF_FFFF);
        assert_eq!(hart.read_reg(Register::from_u32(5)), 0xFFFF_FFFF);
        assert_eq!(hart.read_reg(Register::from_u32(6)), 0x0000_0001);
        assert_eq!(hart.instret(), 4);
    }

    #[test]
    fn test_x0_invariant() {
        let mut hart = SimHart::new();
        hart.write_reg(Register::A0, 9);
        hart.write_reg(Register::A1, 9);
        hart.step(encode(MulVariant::Mul, 0, 10, 11)).unwrap();
        assert_eq!(hart.read_reg(Register::ZERO), 0);
    }

    #[test]
    fn undecodable_words_do_not_retire() {
        let mut hart = SimHart::new();
        assert!(hart.step(0x0220_C3B3).is_err());
        assert_eq!(hart.instret(), 0);
    }

    #[test]
    fn matches_reference_across_edges() {
        let edges = [0, 1, 7, 0x7FFF_FFFF, 0x8000_0000, 0xAAAA_AAAB, 0xFFFF_FFF9, 0xFFFF_FFFF];
        let mut hart = SimHart::new();
        for v in MulVariant::ALL {
            for &a in &edges {
                for &b in &edges {
                    assert_eq!(hart.issue(v, a, b), reference(v, a, b), "{v} {a:#x} {b:#x}");
                }
            }
        }
    }

    #[test]
    fn fault_only_touches_its_variant() {
        let mut hart = SimHart::with_fault(Fault { variant: MulVariant::Mulhsu, xor_mask: 1 });
        assert_eq!(hart.issue(MulVariant::Mulhsu, -7i32 as u32, 3), 0xFFFF_FFFE);
        assert_eq!(hart.issue(MulVariant::Mulh, -7i32 as u32, 3), 0xFFFF_FFFF);
    }

    #[test]
    fn probe_tracks_retired_instructions() {
        let mut hart = SimHart::new();
        let probe = hart.probe();
        hart.mul(2, 3);
        hart.mulhu(2, 3);
        assert_eq!(probe.get(), 2);
    }
}
