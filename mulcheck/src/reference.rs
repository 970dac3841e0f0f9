//! Software reference results for the multiply family.
//!
//! Every product is formed at 64 bits with explicit wrapping arithmetic, then
//! narrowed with a bit-cast, so the answer never depends on how the build
//! handles integer overflow.

use crate::variant::MulVariant;

/// MUL: low 32 bits of the unsigned 64-bit product.
#[inline]
pub fn mul_lo(a: u32, b: u32) -> u32 {
    (a as u64).wrapping_mul(b as u64) as u32
}

/// MULH: high 32 bits of the signed × signed product.
#[inline]
pub fn mulh_ss(a: i32, b: i32) -> u32 {
    let p = (a as i64).wrapping_mul(b as i64);
    (p >> 32) as u32
}

/// MULHSU: high 32 bits of `a` sign-extended times `b` zero-extended.
#[inline]
pub fn mulh_su(a: i32, b: u32) -> u32 {
    let p = (a as i64).wrapping_mul(b as u64 as i64);
    (p >> 32) as u32
}

/// MULHU: high 32 bits of the unsigned × unsigned product.
#[inline]
pub fn mulh_uu(a: u32, b: u32) -> u32 {
    let p = (a as u64).wrapping_mul(b as u64);
    (p >> 32) as u32
}

/// Expected result of `variant` for raw operand bits, reinterpreted per the
/// variant's signedness.
pub fn reference(variant: MulVariant, a: u32, b: u32) -> u32 {
    match variant {
        MulVariant::Mul => mul_lo(a, b),
        MulVariant::Mulh => mulh_ss(a as i32, b as i32),
        MulVariant::Mulhsu => mulh_su(a as i32, b),
        MulVariant::Mulhu => mulh_uu(a, b),
    }
}
