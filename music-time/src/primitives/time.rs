//! Time: points of the musical time-line.
//!
//! `Time` is an affine space over [Duration]: the difference of two points is
//! a duration, and a point can be moved by a duration. The origin is zero,
//! but music is free to start before it.
//!
//! # Examples
//!
//! ```
//! use music_time::{Duration, Time};
//!
//! let a = Time::new(1, 4);
//! let b = Time::new(7, 8);
//! let d: Duration = &b - &a;
//! assert_eq!(d, Duration::new(5, 8));
//! assert_eq!(&a + &d, b);
//! assert_eq!(&b - &d, a);
//! assert_eq!(Time::distance(a, b), Duration::new(5, 8));
//! ```

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use fraction::BigFraction;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{
    fraction_tools::{
        canonical, deserialize_pair, finite, ratio, serialize_pair, to_pair,
        try_ratio, zero,
    },
    Duration, Span, TimeInterval,
};
use crate::{
    algebra::Monoid,
    error::{TimeError, TimeResult},
    transform::{HasPosition, Transformable},
};

/// Absolute position in whole notes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Time {
    position: BigFraction,
}
impl Time {
    /// # Panics
    ///
    /// If denominator is zero.
    pub fn new(numerator: i64, denominator: u64) -> Self {
        Self {
            position: ratio(numerator, denominator),
        }
    }
    pub fn try_new(numerator: i64, denominator: u64) -> TimeResult<Self> {
        Ok(Self {
            position: try_ratio(numerator, denominator)?,
        })
    }
    pub fn from_integer(value: i64) -> Self {
        Self::new(value, 1)
    }
    pub fn origin() -> Self {
        Self { position: zero() }
    }

    pub fn get(&self) -> &BigFraction {
        &self.position
    }
    pub fn to_pair(&self) -> TimeResult<(i64, u64)> {
        to_pair(&self.position)
    }
    pub fn from_pair((numerator, denominator): (i64, u64)) -> TimeResult<Self> {
        Self::try_new(numerator, denominator)
    }

    /// Absolute distance, regardless of direction.
    pub fn distance(a: Self, b: Self) -> Duration {
        (a - b).abs()
    }

    /// Distance from the origin to this point.
    pub fn since_origin(&self) -> Duration {
        Duration::from_finite(self.position.clone())
    }
}
impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position.cmp(&other.position)
    }
}
impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl fmt::Debug for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time({})", self.position)
    }
}
impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position)
    }
}
impl Default for Time {
    fn default() -> Self {
        Self::origin()
    }
}
impl TryFrom<BigFraction> for Time {
    type Error = TimeError;
    fn try_from(value: BigFraction) -> Result<Self, Self::Error> {
        Ok(Self {
            position: finite(value)?,
        })
    }
}
impl From<i64> for Time {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl Add<&Duration> for &Time {
    type Output = Time;
    fn add(self, rhs: &Duration) -> Time {
        Time {
            position: canonical(&self.position + rhs.get()),
        }
    }
}
forward_binop!(impl Add<Duration> for Time, add -> Time);
impl Sub<&Duration> for &Time {
    type Output = Time;
    fn sub(self, rhs: &Duration) -> Time {
        Time {
            position: canonical(&self.position - rhs.get()),
        }
    }
}
forward_binop!(impl Sub<Duration> for Time, sub -> Time);
impl Sub<&Time> for &Time {
    type Output = Duration;
    fn sub(self, rhs: &Time) -> Duration {
        Duration::from_finite(&self.position - &rhs.position)
    }
}
forward_binop!(impl Sub<Time> for Time, sub -> Duration);
impl Add<&Time> for &Time {
    type Output = Time;
    fn add(self, rhs: &Time) -> Time {
        Time {
            position: canonical(&self.position + &rhs.position),
        }
    }
}
forward_binop!(impl Add<Time> for Time, add -> Time);
impl AddAssign<Duration> for Time {
    fn add_assign(&mut self, rhs: Duration) {
        *self = &*self + &rhs
    }
}
impl AddAssign<&Duration> for Time {
    fn add_assign(&mut self, rhs: &Duration) {
        *self = &*self + rhs
    }
}
impl SubAssign<Duration> for Time {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = &*self - &rhs
    }
}
impl SubAssign<&Duration> for Time {
    fn sub_assign(&mut self, rhs: &Duration) {
        *self = &*self - rhs
    }
}

impl Monoid for Time {
    fn empty() -> Self {
        Self::origin()
    }
    fn combine(self, other: Self) -> Self {
        self + other
    }
}
impl Transformable for Time {
    /// Apply span as an affine map: `onset + duration * t`.
    fn transform(self, span: &Span) -> Self {
        span.onset() + span.duration() * self.since_origin()
    }
}
impl HasPosition for Time {
    fn era(&self) -> TimeInterval {
        TimeInterval::from(Span::from_onset_duration(self.clone(), Duration::zero()))
    }
}
impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_pair(&self.position, serializer)
    }
}
impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self {
            position: deserialize_pair(deserializer)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use itertools::iproduct;

    use crate::{
        primitives::{Duration, Span, Time},
        transform::Transformable,
        Monoid,
    };

    fn points() -> Vec<Time> {
        vec![
            Time::new(-3, 2),
            Time::origin(),
            Time::new(1, 3),
            Time::from_integer(4),
        ]
    }

    fn durations() -> Vec<Duration> {
        vec![
            Duration::new(-1, 4),
            Duration::zero(),
            Duration::new(2, 5),
            Duration::from_integer(7),
        ]
    }

    #[test]
    fn affine_space_laws() {
        for (t, u, d) in iproduct!(points(), points(), durations()) {
            assert_eq!((&t + &d) - &t, d);
            assert_eq!(&t + (&u - &t), u);
            assert_eq!((&t + &d) - &d, t);
        }
    }

    #[test]
    fn additive_monoid() {
        assert_eq!(Time::concat(points()), Time::new(17, 6));
        assert_eq!(Time::new(1, 2).combine(Time::empty()), Time::new(1, 2));
    }

    #[test]
    fn since_origin() {
        assert_eq!(Time::new(-3, 2).since_origin(), Duration::new(-3, 2));
        assert_eq!(Time::origin().since_origin(), Duration::zero());
        for t in points() {
            assert_eq!(Time::origin() + t.since_origin(), t);
        }
    }

    #[test]
    fn transform_is_affine() {
        let span = Span::from_onset_duration(Time::from_integer(2), Duration::from_integer(3));
        assert_eq!(Time::new(1, 3).transform(&span), Time::from_integer(3));
        assert_eq!(Time::origin().transform(&span), Time::from_integer(2));
        assert_eq!(Time::new(1, 3).transform(&Span::identity()), Time::new(1, 3));
    }
}
