//! Verification and timing protocol for the RV32M multiply family.
//!
//! The crate is split the way the harness runs:
//! - [`reference`] computes what each multiply must return, at 64 bits.
//! - [`encoding`] and [`invoker`] describe and issue the raw instruction.
//! - [`status`] folds per-variant verdicts into the LED status word.
//! - [`verify`] and [`timing`] are the two entry sequences, driven through
//!   the [`platform::Platform`] trait so they run on hardware or in a test bench.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod encoding;
pub mod invoker;
pub mod platform;
pub mod reference;
pub mod status;
pub mod timing;
pub mod variant;
pub mod verify;

pub use config::{SanityConfig, StressConfig, TestVector};
pub use invoker::MulUnit;
pub use platform::{Dwell, Marker, Platform};
pub use status::{StatusWord, Verdict};
pub use variant::{Half, MulVariant, Signedness};
