//! What the harness needs from the board: one output bank, a presence
//! check, and a way to hold a pattern long enough to be seen.

use core::hint::spin_loop;

/// A calibrated hold time.
///
/// The harness only says how long a pattern should stay visible; turning
/// that into timer ticks or busy-wait iterations is the platform's job.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct Dwell {
    millis: u32,
}

impl Dwell {
    pub const ZERO: Dwell = Dwell { millis: 0 };

    pub const fn from_millis(millis: u32) -> Self {
        Self { millis }
    }

    pub const fn as_millis(&self) -> u32 {
        self.millis
    }

    pub const fn is_zero(&self) -> bool {
        self.millis == 0
    }
}

/// Board services used by both entry sequences.
pub trait Platform {
    /// Whether the output peripheral exists. Consulted once per run.
    fn is_available(&self) -> bool;

    /// Drive the output bank. Synchronous; never fails once the
    /// presence check has passed.
    fn set_output(&mut self, bits: u8);

    /// Keep the current output for `dwell`. Always runs to completion.
    fn hold(&mut self, dwell: Dwell);
}

/// A visible output pattern and how long it stays up.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Marker {
    pub pattern: u8,
    pub dwell: Dwell,
}

impl Marker {
    pub const fn new(pattern: u8, dwell: Dwell) -> Self {
        Self { pattern, dwell }
    }

    /// Write the pattern, then hold it for the full dwell.
    pub fn show<P: Platform + ?Sized>(&self, platform: &mut P) {
        log::trace!("marker {:#04x} for {} ms", self.pattern, self.dwell.as_millis());
        platform.set_output(self.pattern);
        platform.hold(self.dwell);
    }
}

/// Terminal state of both entry points.
pub fn idle() -> ! {
    loop {
        spin_loop();
    }
}
