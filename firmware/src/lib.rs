//! NEORV32 glue for the mulcheck entry points: the GPIO output port, the
//! SYSINFO presence check, and a calibrated hold.

#![no_std]

#[cfg(target_arch = "riscv32")]
pub mod board;
#[cfg(target_arch = "riscv32")]
pub mod delay;

#[cfg(target_arch = "riscv32")]
pub use board::Board;
