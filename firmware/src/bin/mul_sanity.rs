//! LED-only sanity check of MUL, MULH, MULHSU and MULHU.
//!
//! Pair mapping (MSB -> LSB): [LED7 pass | LED6 fail] = MUL,
//! [LED5 | LED4] = MULH, [LED3 | LED2] = MULHSU, [LED1 | LED0] = MULHU.

#![cfg_attr(target_arch = "riscv32", no_std, no_main)]

#[cfg(target_arch = "riscv32")]
use panic_halt as _;

#[cfg(target_arch = "riscv32")]
#[riscv_rt::entry]
fn main() -> ! {
    use mulcheck::invoker::Hart;
    use mulcheck::{verify, SanityConfig};
    use mulcheck_firmware::Board;

    let mut board = Board::new();
    let mut hart = Hart::new();
    verify::main_sequence(&mut board, &mut hart, &SanityConfig::DEFAULT)
}

#[cfg(not(target_arch = "riscv32"))]
fn main() {
    eprintln!("mul-sanity only runs on riscv32 targets");
}
