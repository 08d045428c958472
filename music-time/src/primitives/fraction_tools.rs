//! Tools for treating fractions as exact musical quantities.
//!
//! `fraction::BigFraction` has unbounded numerator and denominator, keeps
//! the sign apart from the ratio, and can also hold NaN or infinities.
//! Everything in the crate goes through [canonical], so zero is always
//! positive and the non-finite values never leak out.

use std::collections::VecDeque;

use fraction::{BigFraction, BigUint, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{TimeError, TimeResult};

/// Build a signed fraction.
///
/// # Panics
///
/// On zero denominator. See [try_ratio] for the checked version.
pub fn ratio(numerator: i64, denominator: u64) -> BigFraction {
    match try_ratio(numerator, denominator) {
        Ok(frac) => frac,
        Err(err) => panic!("{}", err),
    }
}

pub fn try_ratio(numerator: i64, denominator: u64) -> TimeResult<BigFraction> {
    if denominator == 0 {
        return Err(TimeError::ZeroDenominator(numerator));
    }
    let frac = match numerator < 0 {
        true => BigFraction::new_neg(numerator.unsigned_abs(), denominator),
        false => BigFraction::new(numerator.unsigned_abs(), denominator),
    };
    Ok(canonical(frac))
}

pub fn zero() -> BigFraction {
    BigFraction::new(0_u64, 1_u64)
}

pub fn one() -> BigFraction {
    BigFraction::new(1_u64, 1_u64)
}

/// Replace negative zero by positive zero.
pub fn canonical(frac: BigFraction) -> BigFraction {
    let is_zero = matches!(frac.numer(), Some(num) if num.is_zero());
    match is_zero {
        true => zero(),
        false => frac,
    }
}

/// Reject NaN and infinities.
pub fn finite(frac: BigFraction) -> TimeResult<BigFraction> {
    match frac.numer().is_some() && frac.denom().is_some() {
        true => Ok(canonical(frac)),
        false => Err(TimeError::NonFinite(format!("{}", frac))),
    }
}

/// `(numerator, denominator)` with the sign carried by the numerator.
///
/// Fails if either part does not fit into the machine integers.
pub fn to_pair(frac: &BigFraction) -> TimeResult<(i64, u64)> {
    let (num, den) = match (frac.numer(), frac.denom()) {
        (Some(num), Some(den)) => (num, den),
        _ => return Err(TimeError::NonFinite(format!("{}", frac))),
    };
    let overflow = |_| TimeError::PairOverflow(format!("{}", frac));
    let num = i64::try_from(num).map_err(overflow)?;
    let den = u64::try_from(den).map_err(overflow)?;
    match frac.is_sign_negative() {
        true => Ok((-num, den)),
        false => Ok((num, den)),
    }
}

/// Write fraction as `[numerator, denominator]`.
pub(crate) fn serialize_pair<S: Serializer>(
    frac: &BigFraction,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let pair = to_pair(frac).map_err(serde::ser::Error::custom)?;
    pair.serialize(serializer)
}

pub(crate) fn deserialize_pair<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BigFraction, D::Error> {
    let (num, den) = <(i64, u64)>::deserialize(deserializer)?;
    try_ratio(num, den).map_err(serde::de::Error::custom)
}

/// Round fraction to the nearest multiple of `1/limit`.
///
/// Halves are rounded away from zero.
pub fn limit_denominator(
    frac: &BigFraction,
    limit: u64,
) -> TimeResult<BigFraction> {
    if limit < 1 {
        return Err(TimeError::InvalidQuantization(limit));
    }
    let (num, den) = match (frac.numer(), frac.denom()) {
        (Some(num), Some(den)) => (num, den),
        _ => return Err(TimeError::NonFinite(format!("{}", frac))),
    };
    let scaled = num * BigUint::from(limit);
    let mut rounded = &scaled / den;
    if (&scaled % den) * 2_u32 >= *den {
        rounded += 1_u32;
    }
    let quantized = match frac.is_sign_negative() {
        true => BigFraction::new_neg(rounded, limit),
        false => BigFraction::new(rounded, limit),
    };
    Ok(canonical(quantized))
}

fn power_of_two(num: &BigUint) -> BigUint {
    let mut power = BigUint::from(1_u32);
    while &power * 2_u32 <= *num {
        power *= 2_u32;
    }
    power
}

/// Split complex fraction by simple fractions, that could be interpreted as
/// musical lengths (plain or single-dotted).
///
/// # Returns
///
/// Vector of fractions, started with the smallest, up to the largest.
///
/// # Example
///
/// ```
/// # use fraction::BigFraction;
/// # use std::collections::VecDeque;
/// # use music_time::primitives::normalize_fraction;
/// assert_eq!(
///     normalize_fraction(BigFraction::new(13u64, 16u64), VecDeque::new()),
///         vec![
///             BigFraction::new(1u64, 16u64),
///             BigFraction::new(1u64, 4u64),
///             BigFraction::new(1u64, 2u64)
///         ]
/// );
/// ```
pub fn normalize_fraction(
    frac: BigFraction,
    mut head: VecDeque<BigFraction>,
) -> VecDeque<BigFraction> {
    let (num, den) = match (frac.numer(), frac.denom()) {
        (Some(num), Some(den)) => (num.clone(), den.clone()),
        _ => return head,
    };
    if num.is_zero() {
        return head;
    }
    let whole = power_of_two(&num);
    if den == BigUint::from(1_u32) || num < BigUint::from(5_u32) || num == whole
    {
        head.push_front(frac);
        return head;
    }
    let remainder = BigFraction::new(num - &whole, den.clone());
    head.push_front(BigFraction::new(whole, den));
    normalize_fraction(remainder, head)
}
