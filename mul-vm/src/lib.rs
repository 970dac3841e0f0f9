//! Off-target execution of the mulcheck harness.
//!
//! [`SimHart`] decodes and executes the encoded multiply words exactly as
//! the firmware emits them, and [`LedBank`] records every output write with
//! the number of instructions retired at that moment. Together they are the
//! instrumented variant used to check marker ordering and fault reporting.

pub mod board;
pub mod decoder;
pub mod hart;

pub use board::{Event, LedBank};
pub use decoder::{DecodeError, Op, Register};
pub use hart::{Fault, InstretProbe, SimHart};
