use core::ptr::{read_volatile, write_volatile};

use mulcheck::{Dwell, Platform};

use crate::delay::Hold;

/// SYSINFO module base.
const SYSINFO_BASE: usize = 0xFFFF_E000;
/// Processor clock in Hz.
const SYSINFO_CLK: usize = SYSINFO_BASE;
/// SoC configuration flags.
const SYSINFO_SOC: usize = SYSINFO_BASE + 0x08;
/// GPIO implemented.
const SYSINFO_SOC_IO_GPIO: u32 = 1 << 16;

/// GPIO module base.
const GPIO_BASE: usize = 0xFFFC_0000;
const GPIO_PORT_OUT: usize = GPIO_BASE + 0x04;

/// Used when SYSINFO reports a zero clock (simulation builds).
const FALLBACK_CLOCK_HZ: u32 = 50_000_000;

#[inline(always)]
fn read_reg(addr: usize) -> u32 {
    unsafe { read_volatile(addr as *const u32) }
}

#[inline(always)]
fn write_reg(addr: usize, val: u32) {
    unsafe { write_volatile(addr as *mut u32, val) }
}

/// NEORV32 with LEDs on the low eight GPIO outputs.
pub struct Board {
    hold: Hold,
}

impl Board {
    pub fn new() -> Self {
        let clk = read_reg(SYSINFO_CLK);
        let clock_hz = if clk == 0 { FALLBACK_CLOCK_HZ } else { clk };
        Self {
            hold: Hold::new(clock_hz),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for Board {
    fn is_available(&self) -> bool {
        read_reg(SYSINFO_SOC) & SYSINFO_SOC_IO_GPIO != 0
    }

    fn set_output(&mut self, bits: u8) {
        write_reg(GPIO_PORT_OUT, bits as u32);
    }

    fn hold(&mut self, dwell: Dwell) {
        self.hold.wait(dwell);
    }
}
