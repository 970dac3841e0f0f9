//! Run parameters for the two entry sequences.
//!
//! Everything is `const`-constructible so the firmware keeps its defaults
//! in flash, while tests pass their own values through the same code.

use crate::platform::{Dwell, Marker};
use crate::variant::MulVariant;

/// Multiplies issued per workload iteration.
pub const MULS_PER_ITERATION: u32 = 16;

/// One variant and its operand bits.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TestVector {
    pub variant: MulVariant,
    pub a: u32,
    pub b: u32,
}

impl TestVector {
    pub const fn new(variant: MulVariant, a: u32, b: u32) -> Self {
        Self { variant, a, b }
    }
}

/// Verification path parameters.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SanityConfig {
    pub check_presence: bool,
    /// Shown in order before any test runs.
    pub orientation: [Marker; 3],
    /// Test order; entry 0 owns the top status pair.
    pub vectors: [TestVector; 4],
}

impl SanityConfig {
    pub const DEFAULT: SanityConfig = SanityConfig {
        check_presence: true,
        orientation: [
            Marker::new(0xAA, Dwell::from_millis(250)),
            Marker::new(0x55, Dwell::from_millis(250)),
            Marker::new(0x00, Dwell::from_millis(125)),
        ],
        // 7*3 = 21 -> low 0x15, high 0; -7*3 = -21 -> high 0xFFFFFFFF
        vectors: [
            TestVector::new(MulVariant::Mul, 7, 3),
            TestVector::new(MulVariant::Mulh, -7i32 as u32, 3),
            TestVector::new(MulVariant::Mulhsu, -7i32 as u32, 3),
            TestVector::new(MulVariant::Mulhu, 7, 3),
        ],
    };
}

impl Default for SanityConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Timing harness parameters.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StressConfig {
    pub check_presence: bool,
    /// Workload iterations. Tune so the run takes a few seconds.
    pub iterations: u32,
    /// Start and end marker pattern.
    pub marker: u8,
    /// Pattern shown between the start marker and the workload.
    pub clear: u8,
    /// Hold for both the start marker and the cleared state.
    pub dwell: Dwell,
    pub seed: u32,
    pub multiplier_a: u32,
    pub multiplier_b: u32,
}

impl StressConfig {
    pub const DEFAULT: StressConfig = StressConfig {
        check_presence: true,
        iterations: 1_800_000,
        marker: 0xFF,
        clear: 0x00,
        dwell: Dwell::from_millis(500),
        seed: 1,
        multiplier_a: 0xDEAD_BEEF,
        // Golden-ratio constant, not a power of two
        multiplier_b: 0x9E37_79B9,
    };

    /// Multiplies the workload will issue.
    pub fn total_multiplies(&self) -> u64 {
        self.iterations as u64 * MULS_PER_ITERATION as u64
    }
}

impl Default for StressConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
