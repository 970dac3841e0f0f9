//! Issuing the multiply instructions themselves.
//!
//! [`MulUnit`] is the seam between the protocol and whatever executes the
//! instruction: [`Hart`] on the RISC-V target, a simulated hart in tests.

use crate::variant::MulVariant;

/// Something that executes the four multiply instructions and returns the
/// raw destination register.
pub trait MulUnit {
    fn mul(&mut self, a: u32, b: u32) -> u32;
    fn mulh(&mut self, a: i32, b: i32) -> u32;
    fn mulhsu(&mut self, a: i32, b: u32) -> u32;
    fn mulhu(&mut self, a: u32, b: u32) -> u32;

    /// Dispatch on `variant`, reinterpreting the operand bits as needed.
    fn issue(&mut self, variant: MulVariant, a: u32, b: u32) -> u32 {
        match variant {
            MulVariant::Mul => self.mul(a, b),
            MulVariant::Mulh => self.mulh(a as i32, b as i32),
            MulVariant::Mulhsu => self.mulhsu(a as i32, b),
            MulVariant::Mulhu => self.mulhu(a, b),
        }
    }
}

impl<U: MulUnit + ?Sized> MulUnit for &mut U {
    fn mul(&mut self, a: u32, b: u32) -> u32 {
        (**self).mul(a, b)
    }
    fn mulh(&mut self, a: i32, b: i32) -> u32 {
        (**self).mulh(a, b)
    }
    fn mulhsu(&mut self, a: i32, b: u32) -> u32 {
        (**self).mulhsu(a, b)
    }
    fn mulhu(&mut self, a: u32, b: u32) -> u32 {
        (**self).mulhu(a, b)
    }
}

/// Emit one OP/M-group instruction with the given function select.
///
/// `.insn` bypasses the assembler's extension check, so this builds for
/// `riscv32i` targets where the compiler itself never selects `mul`. The
/// block is not `pure`: it is never merged, hoisted or dropped.
#[cfg(target_arch = "riscv32")]
macro_rules! m_insn {
    ($funct3:expr, $a:expr, $b:expr) => {{
        let rd: u32;
        // SAFETY: a register-register ALU instruction with no memory or
        // stack effects; only `rd` is written.
        unsafe {
            core::arch::asm!(
                ".insn r {opcode}, {funct3}, {funct7}, {rd}, {rs1}, {rs2}",
                opcode = const $crate::encoding::OPCODE_OP,
                funct3 = const $funct3,
                funct7 = const $crate::encoding::FUNCT7_MULDIV,
                rd = lateout(reg) rd,
                rs1 = in(reg) $a,
                rs2 = in(reg) $b,
                options(nomem, nostack),
            );
        }
        rd
    }};
}

/// The executing RV32 hart's own multiplier.
#[cfg(target_arch = "riscv32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct Hart;

#[cfg(target_arch = "riscv32")]
impl Hart {
    pub const fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "riscv32")]
impl MulUnit for Hart {
    #[inline(always)]
    fn mul(&mut self, a: u32, b: u32) -> u32 {
        m_insn!(crate::encoding::FUNCT3_MUL, a, b)
    }

    #[inline(always)]
    fn mulh(&mut self, a: i32, b: i32) -> u32 {
        m_insn!(crate::encoding::FUNCT3_MULH, a, b)
    }

    #[inline(always)]
    fn mulhsu(&mut self, a: i32, b: u32) -> u32 {
        m_insn!(crate::encoding::FUNCT3_MULHSU, a, b)
    }

    #[inline(always)]
    fn mulhu(&mut self, a: u32, b: u32) -> u32 {
        m_insn!(crate::encoding::FUNCT3_MULHU, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;

    /// Records which method `issue` routed to.
    #[derive(Default)]
    struct Probe {
        last: Option<(MulVariant, u32, u32)>,
    }

    impl MulUnit for Probe {
        fn mul(&mut self, a: u32, b: u32) -> u32 {
            self.last = Some((MulVariant::Mul, a, b));
            reference::mul_lo(a, b)
        }
        fn mulh(&mut self, a: i32, b: i32) -> u32 {
            self.last = Some((MulVariant::Mulh, a as u32, b as u32));
            reference::mulh_ss(a, b)
        }
        fn mulhsu(&mut self, a: i32, b: u32) -> u32 {
            self.last = Some((MulVariant::Mulhsu, a as u32, b));
            reference::mulh_su(a, b)
        }
        fn mulhu(&mut self, a: u32, b: u32) -> u32 {
            self.last = Some((MulVariant::Mulhu, a, b));
            reference::mulh_uu(a, b)
        }
    }

    #[test]
    fn issue_routes_each_variant_with_unchanged_bits() {
        let mut probe = Probe::default();
        for v in MulVariant::ALL {
            probe.issue(v, 0xFFFF_FFF9, 3);
            assert_eq!(probe.last, Some((v, 0xFFFF_FFF9, 3)));
        }
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut probe = Probe::default();
        let mut unit: &mut Probe = &mut probe;
        let got = <&mut Probe as MulUnit>::issue(&mut unit, MulVariant::Mulh, (-7i32) as u32, 3);
        assert_eq!(got, 0xFFFF_FFFF);
        assert_eq!(probe.last.map(|l| l.0), Some(MulVariant::Mulh));
    }
}
