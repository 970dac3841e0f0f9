//! Turning a [`Dwell`] into CPU time.
//!
//! The default backend is `riscv::asm::delay`, a busy loop whose cost per
//! iteration is only approximately one cycle. With the `cycle-counter`
//! feature the wait polls `mcycle` instead.

use mulcheck::Dwell;

pub struct Hold {
    cycles_per_ms: u64,
}

impl Hold {
    pub fn new(clock_hz: u32) -> Self {
        Self {
            cycles_per_ms: clock_hz as u64 / 1000,
        }
    }

    fn cycles(&self, dwell: Dwell) -> u64 {
        self.cycles_per_ms * dwell.as_millis() as u64
    }

    #[cfg(not(feature = "cycle-counter"))]
    pub fn wait(&self, dwell: Dwell) {
        let mut remaining = self.cycles(dwell);
        while remaining > 0 {
            let chunk = remaining.min(u32::MAX as u64) as u32;
            unsafe { riscv::asm::delay(chunk) };
            remaining -= chunk as u64;
        }
    }

    #[cfg(feature = "cycle-counter")]
    pub fn wait(&self, dwell: Dwell) {
        use riscv::register::mcycle;

        let start = mcycle::read64();
        let cycles = self.cycles(dwell);
        while mcycle::read64().wrapping_sub(start) < cycles {
            core::hint::spin_loop();
        }
    }
}
