//! Fixed-width integer helpers with explicit rounding direction.
//!
//! Every amount is a `U256`. Intermediate products are taken in `U512` so a
//! multiply-then-divide never loses precision before the single, directed
//! rounding step.

use alloy_primitives::{U256, U512};

/// Direction applied to the remainder of a division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Toward zero.
    Down,
    /// Away from zero when there is a remainder.
    Up,
}

/// Widen a `U256` to `U512`.
pub fn widen(value: U256) -> U512 {
    U512::from_limbs_slice(value.as_limbs())
}

/// Narrow a `U512` to `U256`, or `None` if it does not fit.
pub fn narrow(value: U512) -> Option<U256> {
    U256::checked_from_limbs_slice(value.as_limbs())
}

/// `10^exp`, or `None` if it does not fit in 512 bits.
pub fn pow10(exp: u32) -> Option<U512> {
    U512::from(10u64).checked_pow(U512::from(exp))
}

/// `value * num / den` rounded in the given direction.
///
/// Returns `None` when `den` is zero, the product exceeds 512 bits, or the
/// rounded result exceeds `U256::MAX`.
pub fn mul_div(value: U256, num: U512, den: U512, rounding: Rounding) -> Option<U256> {
    if den.is_zero() {
        return None;
    }

    let product = widen(value).checked_mul(num)?;
    let (quotient, remainder) = product.div_rem(den);

    let quotient = match rounding {
        Rounding::Up if !remainder.is_zero() => quotient.checked_add(U512::from(1u64))?,
        _ => quotient,
    };

    narrow(quotient)
}

/// `floor(sqrt(a * b))`.
pub fn geometric_mean(a: U256, b: U256) -> U256 {
    let root = (widen(a) * widen(b)).root(2);
    // sqrt(a * b) <= max(a, b), so this always fits.
    narrow(root).unwrap_or_else(|| a.max(b))
}
