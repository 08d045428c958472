//! Duration: the vector of musical time, measured in whole notes.
//!
//! Arithmetic (`+ - * /`) is the plain rational one, on owned values and
//! on references alike. The monoid operation ([Monoid::combine]) is
//! multiplication with `1` as identity: durations compose as stretches,
//! they do not concatenate.
//!
//! # Examples
//!
//! ```
//! use music_time::{Duration, Monoid};
//!
//! let quarter = Duration::new(1, 4);
//! let eighth = Duration::new(1, 8);
//! assert_eq!(&quarter + &eighth, Duration::new(3, 8));
//! assert_eq!(quarter.combine(eighth), Duration::new(1, 32));
//! assert_eq!(Duration::empty(), Duration::one());
//! ```

use std::{
    cmp::Ordering,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

use fraction::BigFraction;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{
    fraction_tools::{
        canonical, deserialize_pair, finite, limit_denominator,
        normalize_fraction, one, ratio, serialize_pair, to_pair, try_ratio,
        zero,
    },
    Span,
};
use crate::{
    algebra::Monoid,
    error::{TimeError, TimeResult},
    transform::{HasDuration, Splittable, Transformable},
};

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Duration {
    fraction: BigFraction,
}
impl Duration {
    /// # Panics
    ///
    /// If denominator is zero.
    pub fn new(numerator: i64, denominator: u64) -> Self {
        Self {
            fraction: ratio(numerator, denominator),
        }
    }
    pub fn try_new(numerator: i64, denominator: u64) -> TimeResult<Self> {
        Ok(Self {
            fraction: try_ratio(numerator, denominator)?,
        })
    }
    pub fn from_integer(value: i64) -> Self {
        Self::new(value, 1)
    }
    pub fn zero() -> Self {
        Self { fraction: zero() }
    }
    pub fn one() -> Self {
        Self { fraction: one() }
    }

    /// Both operands of crate arithmetic are finite, so is the result.
    pub(crate) fn from_finite(fraction: BigFraction) -> Self {
        Self {
            fraction: canonical(fraction),
        }
    }

    pub fn get(&self) -> &BigFraction {
        &self.fraction
    }
    pub fn to_pair(&self) -> TimeResult<(i64, u64)> {
        to_pair(&self.fraction)
    }
    pub fn from_pair((numerator, denominator): (i64, u64)) -> TimeResult<Self> {
        Self::try_new(numerator, denominator)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
    pub fn is_positive(&self) -> bool {
        *self > Self::zero()
    }
    pub fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
    pub fn abs(self) -> Self {
        match self.is_negative() {
            true => -self,
            false => self,
        }
    }

    /// `1 / self`. Zero has no reciprocal: stretching by zero can not
    /// be undone.
    pub fn recip(&self) -> TimeResult<Self> {
        Self::one().checked_div(self)
    }
    pub fn checked_div(&self, rhs: &Self) -> TimeResult<Self> {
        if rhs.is_zero() {
            return Err(TimeError::DegenerateSpan(Span::stretching(
                rhs.clone(),
            )));
        }
        Ok(Self::from_finite(&self.fraction / &rhs.fraction))
    }

    /// Round to the nearest multiple of `1/limit`.
    ///
    /// ```
    /// # use music_time::Duration;
    /// assert_eq!(Duration::new(6, 25).quantize(128).unwrap(), Duration::new(31, 128));
    /// ```
    pub fn quantize(&self, limit: u64) -> TimeResult<Self> {
        Ok(Self {
            fraction: limit_denominator(&self.fraction, limit)?,
        })
    }

    /// Lengths, which could be written as plain or dotted notes and
    /// tied together. Smallest first. Tuplet ratios are kept as they are.
    ///
    /// ```
    /// # use music_time::Duration;
    /// assert_eq!(
    ///     Duration::new(5, 8).notated_parts().unwrap(),
    ///     vec![Duration::new(1, 8), Duration::new(1, 2)]
    /// );
    /// ```
    pub fn notated_parts(&self) -> TimeResult<Vec<Self>> {
        if !self.is_positive() {
            return Err(TimeError::NotNotatable(self.clone()));
        }
        Ok(normalize_fraction(self.fraction.clone(), Default::default())
            .into_iter()
            .map(|fraction| Self { fraction })
            .collect())
    }
}
impl Ord for Duration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fraction.cmp(&other.fraction)
    }
}
impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({})", self.fraction)
    }
}
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fraction)
    }
}
impl Default for Duration {
    fn default() -> Self {
        Self::zero()
    }
}
impl TryFrom<BigFraction> for Duration {
    type Error = TimeError;
    fn try_from(value: BigFraction) -> Result<Self, Self::Error> {
        Ok(Self {
            fraction: finite(value)?,
        })
    }
}
impl From<i64> for Duration {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl Add<&Duration> for &Duration {
    type Output = Duration;
    fn add(self, rhs: &Duration) -> Duration {
        Duration::from_finite(&self.fraction + &rhs.fraction)
    }
}
forward_binop!(impl Add<Duration> for Duration, add -> Duration);
impl Sub<&Duration> for &Duration {
    type Output = Duration;
    fn sub(self, rhs: &Duration) -> Duration {
        Duration::from_finite(&self.fraction - &rhs.fraction)
    }
}
forward_binop!(impl Sub<Duration> for Duration, sub -> Duration);
impl Mul<&Duration> for &Duration {
    type Output = Duration;
    fn mul(self, rhs: &Duration) -> Duration {
        Duration::from_finite(&self.fraction * &rhs.fraction)
    }
}
forward_binop!(impl Mul<Duration> for Duration, mul -> Duration);
impl Div<&Duration> for &Duration {
    type Output = Duration;
    /// # Panics
    ///
    /// On division by zero, as integer division does.
    /// Use [Duration::checked_div] when divisor can be zero.
    fn div(self, rhs: &Duration) -> Duration {
        match self.checked_div(rhs) {
            Ok(duration) => duration,
            Err(_) => panic!("attempt to divide {} by zero duration", self),
        }
    }
}
forward_binop!(impl Div<Duration> for Duration, div -> Duration);
impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        *self = &*self + &rhs
    }
}
impl AddAssign<&Duration> for Duration {
    fn add_assign(&mut self, rhs: &Duration) {
        *self = &*self + rhs
    }
}
impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Self) {
        *self = &*self - &rhs
    }
}
impl SubAssign<&Duration> for Duration {
    fn sub_assign(&mut self, rhs: &Duration) {
        *self = &*self - rhs
    }
}
impl Neg for Duration {
    fn neg(self) -> Self::Output {
        Self::from_finite(-self.fraction)
    }
    type Output = Self;
}
impl Neg for &Duration {
    fn neg(self) -> Self::Output {
        Duration::from_finite(-&self.fraction)
    }
    type Output = Duration;
}
impl Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, d| acc + d)
    }
}
impl<'a> Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Duration>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, d| acc + d)
    }
}

impl Monoid for Duration {
    fn empty() -> Self {
        Self::one()
    }
    fn combine(self, other: Self) -> Self {
        self * other
    }
}
impl Transformable for Duration {
    /// Durations ignore delay and are scaled by the stretch.
    fn transform(self, span: &Span) -> Self {
        span.duration() * self
    }
}
impl HasDuration for Duration {
    fn duration(&self) -> Duration {
        self.clone()
    }
}
impl Splittable for Duration {
    /// Saturating scalar split: the first part is `at` clamped into
    /// `[0, self]`.
    fn split(&self, at: Duration) -> (Self, Self) {
        let upper = self.clone().max(Self::zero());
        let first = at.max(Self::zero()).min(upper);
        let second = self - &first;
        (first, second)
    }
}
impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_pair(&self.fraction, serializer)
    }
}
impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self {
            fraction: deserialize_pair(deserializer)?,
        })
    }
}
