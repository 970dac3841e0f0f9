//! The four RV32M multiply variants under test.

/// How an operand's 32 bits are interpreted when widened to 64.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Signedness {
    /// Sign-extended
    Signed,
    /// Zero-extended
    Unsigned,
}

/// Which 32-bit half of the 64-bit product a variant returns.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Half {
    Low,
    High,
}

/// One of the multiply instructions, in test order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum MulVariant {
    /// Low 32 bits of the product
    Mul = 0,
    /// High 32 bits, signed × signed
    Mulh = 1,
    /// High 32 bits, signed × unsigned
    Mulhsu = 2,
    /// High 32 bits, unsigned × unsigned
    Mulhu = 3,
}

impl MulVariant {
    /// Fixed test order; the first entry owns the most significant status pair.
    pub const ALL: [MulVariant; 4] = [
        MulVariant::Mul,
        MulVariant::Mulh,
        MulVariant::Mulhsu,
        MulVariant::Mulhu,
    ];

    /// The 3-bit function-select field value.
    pub const fn funct3(self) -> u32 {
        self as u32
    }

    pub fn from_funct3(funct3: u32) -> Option<Self> {
        match funct3 {
            0 => Some(MulVariant::Mul),
            1 => Some(MulVariant::Mulh),
            2 => Some(MulVariant::Mulhsu),
            3 => Some(MulVariant::Mulhu),
            _ => None,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            MulVariant::Mul => "mul",
            MulVariant::Mulh => "mulh",
            MulVariant::Mulhsu => "mulhsu",
            MulVariant::Mulhu => "mulhu",
        }
    }

    /// Operand interpretation as `(rs1, rs2)`.
    ///
    /// MUL's low half is the same for either interpretation; it is tested
    /// with unsigned operands.
    pub fn signedness(&self) -> (Signedness, Signedness) {
        match self {
            MulVariant::Mul => (Signedness::Unsigned, Signedness::Unsigned),
            MulVariant::Mulh => (Signedness::Signed, Signedness::Signed),
            MulVariant::Mulhsu => (Signedness::Signed, Signedness::Unsigned),
            MulVariant::Mulhu => (Signedness::Unsigned, Signedness::Unsigned),
        }
    }

    pub fn half(&self) -> Half {
        match self {
            MulVariant::Mul => Half::Low,
            _ => Half::High,
        }
    }
}

impl core::fmt::Display for MulVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funct3_round_trips_for_every_variant() {
        for v in MulVariant::ALL {
            assert_eq!(MulVariant::from_funct3(v.funct3()), Some(v));
        }
        assert_eq!(MulVariant::from_funct3(4), None);
    }

    #[test]
    fn only_mul_returns_the_low_half() {
        assert_eq!(MulVariant::Mul.half(), Half::Low);
        assert!(MulVariant::ALL[1..].iter().all(|v| v.half() == Half::High));
    }
}
