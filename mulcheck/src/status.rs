//! Comparator and LED status word.
//!
//! Test `i` (0-based) owns the bit pair `(7 - 2i, 6 - 2i)`: the upper bit
//! lights on pass, the lower on fail. Exactly one bit of a pair is ever set.

use crate::variant::MulVariant;

/// Maximum number of tests one status byte can report.
pub const MAX_TESTS: usize = 4;

/// The outcome of one variant: hardware answer against reference answer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Verdict {
    pub variant: MulVariant,
    pub hardware: u32,
    pub reference: u32,
    pub passed: bool,
}

pub fn compare(variant: MulVariant, hardware: u32, reference: u32) -> Verdict {
    Verdict {
        variant,
        hardware,
        reference,
        passed: hardware == reference,
    }
}

/// Packed pass/fail report, two bits per test.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StatusWord(u8);

impl StatusWord {
    pub const EMPTY: StatusWord = StatusWord(0);

    pub const fn pass_bit(index: usize) -> u8 {
        1 << (7 - 2 * index)
    }

    pub const fn fail_bit(index: usize) -> u8 {
        1 << (6 - 2 * index)
    }

    const fn pair_mask(index: usize) -> u8 {
        Self::pass_bit(index) | Self::fail_bit(index)
    }

    /// Set the pair for test `index`, replacing anything recorded there.
    ///
    /// # Panics
    /// If `index >= MAX_TESTS`.
    pub fn record(self, index: usize, passed: bool) -> Self {
        assert!(index < MAX_TESTS, "status word holds {} tests", MAX_TESTS);
        let bit = if passed {
            Self::pass_bit(index)
        } else {
            Self::fail_bit(index)
        };
        StatusWord((self.0 & !Self::pair_mask(index)) | bit)
    }

    /// Fold verdicts in order; the first one lands in the top pair.
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        verdicts
            .iter()
            .take(MAX_TESTS)
            .enumerate()
            .fold(StatusWord::EMPTY, |word, (i, v)| word.record(i, v.passed))
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// `None` when nothing was recorded for `index`.
    pub fn passed(&self, index: usize) -> Option<bool> {
        if index >= MAX_TESTS {
            return None;
        }
        let pair = self.0 & Self::pair_mask(index);
        if pair == Self::pass_bit(index) {
            Some(true)
        } else if pair == Self::fail_bit(index) {
            Some(false)
        } else {
            None
        }
    }

    /// True if the first `count` tests all passed.
    pub fn all_passed(&self, count: usize) -> bool {
        (0..count).all(|i| self.passed(i) == Some(true))
    }
}

impl From<StatusWord> for u8 {
    fn from(word: StatusWord) -> u8 {
        word.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdicts(outcomes: [bool; 4]) -> [Verdict; 4] {
        let mut out = [compare(MulVariant::Mul, 0, 0); 4];
        for (i, v) in MulVariant::ALL.iter().enumerate() {
            let hw = if outcomes[i] { 5 } else { 6 };
            out[i] = compare(*v, hw, 5);
        }
        out
    }

    #[test]
    fn all_pass_lights_upper_bits() {
        let word = StatusWord::from_verdicts(&verdicts([true; 4]));
        assert_eq!(word.bits(), 0b1010_1010);
        assert!(word.all_passed(4));
    }

    #[test]
    fn all_fail_lights_lower_bits() {
        let word = StatusWord::from_verdicts(&verdicts([false; 4]));
        assert_eq!(word.bits(), 0b0101_0101);
        assert!(!word.all_passed(1));
    }

    #[test]
    fn exactly_one_bit_per_pair_for_every_outcome() {
        for mask in 0u8..16 {
            let outcomes = [mask & 8 != 0, mask & 4 != 0, mask & 2 != 0, mask & 1 != 0];
            let word = StatusWord::from_verdicts(&verdicts(outcomes));
            assert_eq!(word.bits().count_ones(), 4);
            for (i, &ok) in outcomes.iter().enumerate() {
                let pair = (word.bits() >> (6 - 2 * i)) & 0b11;
                assert_eq!(pair, if ok { 0b10 } else { 0b01 });
                assert_eq!(word.passed(i), Some(ok));
            }
        }
    }

    #[test]
    fn low_mismatch_sets_the_top_fail_bit() {
        let word = StatusWord::EMPTY.record(0, compare(MulVariant::Mul, 0x14, 0x15).passed);
        assert_eq!(word.bits(), 0x40);
    }

    #[test]
    fn re_recording_replaces_the_pair() {
        let word = StatusWord::EMPTY.record(2, false).record(2, true);
        assert_eq!(word.bits(), 0x08);
        assert_eq!(word.passed(3), None);
    }

    #[test]
    fn partial_runs_count_only_recorded_tests() {
        let v = verdicts([true, false, true, true]);
        let word = StatusWord::from_verdicts(&v[..2]);
        assert_eq!(word.bits(), 0x80 | 0x10);
        assert_eq!(word.bits().count_ones(), 2);
    }
}
