//! The verification path: check the four variants once and show the result.

use crate::config::{SanityConfig, TestVector};
use crate::invoker::MulUnit;
use crate::platform::{idle, Platform};
use crate::reference::reference;
use crate::status::{compare, StatusWord, Verdict};

/// How a verification run ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// The output peripheral is missing; nothing was written.
    PlatformAbsent,
    /// The status word was written to the output bank.
    Reported(StatusWord),
}

/// Issue every vector on `unit` and fold the verdicts.
///
/// All instructions are issued and compared before this returns, so callers
/// never see a partial status word.
pub fn evaluate<U: MulUnit>(unit: &mut U, vectors: &[TestVector; 4]) -> ([Verdict; 4], StatusWord) {
    let verdicts = (*vectors).map(|v| {
        let hardware = unit.issue(v.variant, v.a, v.b);
        let verdict = compare(v.variant, hardware, reference(v.variant, v.a, v.b));
        log::debug!(
            "{} {:#010x} {:#010x}: hw={:#010x} ref={:#010x} {}",
            v.variant,
            v.a,
            v.b,
            verdict.hardware,
            verdict.reference,
            if verdict.passed { "pass" } else { "FAIL" }
        );
        verdict
    });
    (verdicts, StatusWord::from_verdicts(&verdicts))
}

/// Presence check, orientation markers, tests, then a single status write.
pub fn run<P, U>(platform: &mut P, unit: &mut U, config: &SanityConfig) -> Outcome
where
    P: Platform + ?Sized,
    U: MulUnit,
{
    if config.check_presence && !platform.is_available() {
        log::warn!("output bank not present, halting");
        return Outcome::PlatformAbsent;
    }

    for marker in &config.orientation {
        marker.show(platform);
    }

    let (_, status) = evaluate(unit, &config.vectors);
    log::info!("status word {:#010b}", status.bits());
    platform.set_output(status.bits());
    Outcome::Reported(status)
}

/// Firmware entry: run once, then hold the result forever.
pub fn main_sequence<P, U>(platform: &mut P, unit: &mut U, config: &SanityConfig) -> !
where
    P: Platform + ?Sized,
    U: MulUnit,
{
    let _ = run(platform, unit, config);
    idle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Dwell;
    use crate::reference;
    use crate::variant::MulVariant;

    struct Exact;

    impl MulUnit for Exact {
        fn mul(&mut self, a: u32, b: u32) -> u32 {
            reference::mul_lo(a, b)
        }
        fn mulh(&mut self, a: i32, b: i32) -> u32 {
            reference::mulh_ss(a, b)
        }
        fn mulhsu(&mut self, a: i32, b: u32) -> u32 {
            reference::mulh_su(a, b)
        }
        fn mulhu(&mut self, a: u32, b: u32) -> u32 {
            reference::mulh_uu(a, b)
        }
    }

    #[derive(Default)]
    struct Bank {
        present: bool,
        writes: Vec<u8>,
        held: Vec<Dwell>,
    }

    impl Platform for Bank {
        fn is_available(&self) -> bool {
            self.present
        }
        fn set_output(&mut self, bits: u8) {
            self.writes.push(bits);
        }
        fn hold(&mut self, dwell: Dwell) {
            self.held.push(dwell);
        }
    }

    #[test]
    fn default_vectors_pass_on_an_exact_unit() {
        let (verdicts, status) = evaluate(&mut Exact, &SanityConfig::DEFAULT.vectors);
        assert_eq!(status.bits(), 0xAA);
        assert_eq!(verdicts[0].reference, 0x15);
        assert_eq!(verdicts[1].reference, 0xFFFF_FFFF);
        assert_eq!(verdicts[2].reference, 0xFFFF_FFFF);
        assert_eq!(verdicts[3].reference, 0);
        assert_eq!(verdicts.map(|v| v.variant), MulVariant::ALL);
    }

    #[test]
    fn run_writes_markers_then_one_status() {
        let mut bank = Bank { present: true, ..Default::default() };
        let outcome = run(&mut bank, &mut Exact, &SanityConfig::DEFAULT);
        assert!(matches!(outcome, Outcome::Reported(s) if s.bits() == 0xAA));
        assert_eq!(bank.writes, vec![0xAA, 0x55, 0x00, 0xAA]);
        assert_eq!(bank.held.len(), 3);
    }

    #[test]
    fn absent_platform_sees_no_writes() {
        let mut bank = Bank::default();
        assert_eq!(run(&mut bank, &mut Exact, &SanityConfig::DEFAULT), Outcome::PlatformAbsent);
        assert!(bank.writes.is_empty());
        assert!(bank.held.is_empty());
    }

    #[test]
    fn presence_check_can_be_skipped() {
        let mut bank = Bank::default();
        let config = SanityConfig { check_presence: false, ..SanityConfig::DEFAULT };
        assert!(matches!(run(&mut bank, &mut Exact, &config), Outcome::Reported(_)));
        assert_eq!(bank.writes.len(), 4);
    }
}
