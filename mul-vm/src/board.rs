use mulcheck::{Dwell, Platform};

use crate::hart::InstretProbe;

/// Something the LED bank saw, stamped with the hart's retired count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Output { bits: u8, retired: u64 },
    Hold { dwell: Dwell, retired: u64 },
}

/// Simulated 8-bit LED bank that records every write and hold.
pub struct LedBank {
    present: bool,
    value: u8,
    events: Vec<Event>,
    probe: Option<InstretProbe>,
}

impl LedBank {
    pub fn new() -> Self {
        Self {
            present: true,
            value: 0,
            events: Vec::new(),
            probe: None,
        }
    }

    /// A board whose presence check fails.
    pub fn absent() -> Self {
        Self {
            present: false,
            ..Self::new()
        }
    }

    /// Stamp events with `probe`'s count instead of zero.
    pub fn with_probe(mut self, probe: InstretProbe) -> Self {
        self.probe = Some(probe);
        self
    }

    /// What the LEDs currently show.
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Just the output writes, in order.
    pub fn writes(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Output { bits, .. } => Some(*bits),
                Event::Hold { .. } => None,
            })
            .collect()
    }

    fn retired(&self) -> u64 {
        self.probe.as_ref().map_or(0, InstretProbe::get)
    }
}

impl Default for LedBank {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for LedBank {
    fn is_available(&self) -> bool {
        self.present
    }

    fn set_output(&mut self, bits: u8) {
        let retired = self.retired();
        log::trace!("leds <- {:#010b} (retired {})", bits, retired);
        self.value = bits;
        self.events.push(Event::Output { bits, retired });
    }

    fn hold(&mut self, dwell: Dwell) {
        let retired = self.retired();
        self.events.push(Event::Hold { dwell, retired });
    }
}
