//! Throughput probe: a MUL-dominated workload bracketed by visible markers.
//!
//! Elapsed time is measured outside the system, from the start marker's
//! first appearance to the end marker. The harness itself keeps no time.

use core::hint::black_box;

use crate::config::StressConfig;
use crate::invoker::MulUnit;
use crate::platform::{idle, Marker, Platform};

/// How a timing run ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// The output peripheral is missing; nothing was written or issued.
    PlatformAbsent,
    /// Every iteration ran and the end marker is showing.
    Completed,
}

/// Eight dependent multiplies by the same constant.
#[inline(always)]
fn chain8<U: MulUnit>(unit: &mut U, mut s: u32, m: u32) -> u32 {
    s = unit.mul(s, m);
    s = unit.mul(s, m);
    s = unit.mul(s, m);
    s = unit.mul(s, m);
    s = unit.mul(s, m);
    s = unit.mul(s, m);
    s = unit.mul(s, m);
    unit.mul(s, m)
}

/// Run the workload and return the accumulator.
///
/// Each iteration issues 16 chained MULs, then mixes the loop counter into
/// one multiplier so the loop cannot be folded. The returned value carries
/// no meaning beyond keeping the chain alive.
pub fn workload<U: MulUnit>(unit: &mut U, config: &StressConfig) -> u32 {
    let mut a = config.multiplier_a;
    let b = config.multiplier_b;
    let mut s = config.seed;

    for i in 0..config.iterations {
        s = chain8(unit, s, b);
        s = chain8(unit, s, a);
        a ^= i | 1;
    }
    s
}

/// Start marker, cleared state, workload, end marker.
pub fn run<P, U>(platform: &mut P, unit: &mut U, config: &StressConfig) -> Outcome
where
    P: Platform + ?Sized,
    U: MulUnit,
{
    if config.check_presence && !platform.is_available() {
        log::warn!("output bank not present, halting");
        return Outcome::PlatformAbsent;
    }

    Marker::new(config.marker, config.dwell).show(platform);
    Marker::new(config.clear, config.dwell).show(platform);

    log::debug!(
        "workload start: {} iterations, {} multiplies",
        config.iterations,
        config.total_multiplies()
    );
    black_box(workload(unit, config));
    log::debug!("workload done");

    platform.set_output(config.marker);
    Outcome::Completed
}

/// Firmware entry: run once, then leave the end marker up forever.
pub fn main_sequence<P, U>(platform: &mut P, unit: &mut U, config: &StressConfig) -> !
where
    P: Platform + ?Sized,
    U: MulUnit,
{
    let _ = run(platform, unit, config);
    idle()
}
