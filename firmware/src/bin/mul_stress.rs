//! LED stopwatch microbenchmark for MUL throughput.
//!
//! Time from the first all-on pattern to the final all-on pattern; run once
//! on the stock core and once on the enhanced multiplier.

#![cfg_attr(target_arch = "riscv32", no_std, no_main)]

#[cfg(target_arch = "riscv32")]
use panic_halt as _;

#[cfg(target_arch = "riscv32")]
#[riscv_rt::entry]
fn main() -> ! {
    use mulcheck::invoker::Hart;
    use mulcheck::{timing, StressConfig};
    use mulcheck_firmware::Board;

    let mut board = Board::new();
    let mut hart = Hart::new();
    timing::main_sequence(&mut board, &mut hart, &StressConfig::DEFAULT)
}

#[cfg(not(target_arch = "riscv32"))]
fn main() {
    eprintln!("mul-stress only runs on riscv32 targets");
}
