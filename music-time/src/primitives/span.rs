//! Span: an interval of time, which is at the same time an affine
//! transformation of time (delay by onset, then stretch by duration).
//!
//! Internally span is `(onset, duration)`, but can be built from, and seen
//! as, any of three pairs: onset/offset, onset/duration and
//! duration/offset.
//!
//! Span can be *forward* (positive duration), *backward* (negative duration)
//! or *degenerate* (zero duration). Exactly one holds for every span.
//!
//! # Examples
//!
//! ```
//! use music_time::{Duration, Span, Time};
//!
//! let s = Span::from_onset_duration(Time::from_integer(2), Duration::from_integer(3));
//! assert_eq!(s.offset(), Time::from_integer(5));
//! assert!(!s.contains(Time::from_integer(1)));
//! assert!(s.contains(Time::new(5, 2)));
//!
//! let whole = Span::from_onset_offset(Time::from_integer(0), Time::from_integer(10));
//! let part = Span::from_onset_offset(Time::from_integer(2), Time::from_integer(5));
//! assert!(whole.encloses(&part));
//!
//! let a = Span::from_onset_offset(Time::from_integer(0), Time::from_integer(2));
//! let b = Span::from_onset_offset(Time::from_integer(1), Time::from_integer(3));
//! let c = Span::from_onset_offset(Time::from_integer(2), Time::from_integer(3));
//! assert!(a.overlaps(&b));
//! let d = Span::from_onset_offset(Time::from_integer(0), Time::from_integer(1));
//! assert!(!d.overlaps(&c));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Duration, Time};
use crate::{
    algebra::Monoid,
    error::{TimeError, TimeResult},
    transform::{HasDuration, HasPosition, Reversible, Transformable},
};

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "OnsetOffset", into = "OnsetOffset")]
pub struct Span {
    onset: Time,
    duration: Duration,
}

/// Interchange view of span.
#[derive(Serialize, Deserialize)]
struct OnsetOffset {
    onset: Time,
    offset: Time,
}
impl From<OnsetOffset> for Span {
    fn from(value: OnsetOffset) -> Self {
        Self::from_onset_offset(value.onset, value.offset)
    }
}
impl From<Span> for OnsetOffset {
    fn from(span: Span) -> Self {
        let (onset, offset) = span.onset_and_offset();
        Self { onset, offset }
    }
}

impl Span {
    pub fn from_onset_offset(onset: Time, offset: Time) -> Self {
        Self {
            duration: offset - &onset,
            onset,
        }
    }
    pub fn from_onset_duration(onset: Time, duration: Duration) -> Self {
        Self { onset, duration }
    }
    pub fn from_duration_offset(duration: Duration, offset: Time) -> Self {
        Self {
            onset: offset - &duration,
            duration,
        }
    }

    /// `(0, 1)`: unit span, which transforms nothing.
    pub fn identity() -> Self {
        Self::from_onset_duration(Time::origin(), Duration::one())
    }
    /// Span, which only delays.
    pub fn delaying(by: Duration) -> Self {
        Self::from_onset_duration(Time::origin() + by, Duration::one())
    }
    /// Span, which only stretches.
    pub fn stretching(by: Duration) -> Self {
        Self::from_onset_duration(Time::origin(), by)
    }

    pub fn onset_and_offset(&self) -> (Time, Time) {
        (self.onset.clone(), self.offset())
    }
    pub fn onset_and_duration(&self) -> (Time, Duration) {
        (self.onset.clone(), self.duration.clone())
    }
    pub fn duration_and_offset(&self) -> (Duration, Time) {
        (self.duration.clone(), self.offset())
    }

    pub fn onset(&self) -> Time {
        self.onset.clone()
    }
    pub fn offset(&self) -> Time {
        &self.onset + &self.duration
    }
    pub fn duration(&self) -> Duration {
        self.duration.clone()
    }
    pub fn midpoint(&self) -> Time {
        &self.onset + &self.duration * Duration::new(1, 2)
    }
    /// How far span moves the origin.
    pub fn delay_component(&self) -> Duration {
        self.onset.since_origin()
    }
    /// How much span scales durations.
    pub fn stretch_component(&self) -> Duration {
        self.duration.clone()
    }

    /// Apply `self` as an affine map to the coordinates of `other`:
    /// `(t1, d1) ⊕ (t2, d2) = (t1 + d1*t2, d1*d2)`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            onset: other.onset.clone().transform(self),
            duration: &self.duration * &other.duration,
        }
    }

    /// Span, which undoes `self`: `(-t/d, 1/d)`.
    pub fn inverse(&self) -> TimeResult<Self> {
        let recip = self
            .duration
            .recip()
            .map_err(|_| TimeError::DegenerateSpan(self.clone()))?;
        Ok(Self {
            onset: Time::origin() - self.delay_component() * &recip,
            duration: recip,
        })
    }

    /// Scale both components.
    pub fn scale(&self, by: Duration) -> Self {
        Self {
            onset: Time::origin() + self.delay_component() * &by,
            duration: &self.duration * &by,
        }
    }

    pub fn is_forward(&self) -> bool {
        self.duration.is_positive()
    }
    pub fn is_backward(&self) -> bool {
        self.duration.is_negative()
    }
    pub fn is_degenerate(&self) -> bool {
        self.duration.is_zero()
    }

    /// The same span, if it is forward.
    pub fn forward(self) -> TimeResult<Self> {
        match self.is_forward() {
            true => Ok(self),
            false => Err(TimeError::NotForward(self)),
        }
    }

    /// Reflect through midpoint: onset and offset swap their places.
    pub fn reverse(&self) -> Self {
        let midpoint = self.midpoint();
        self.reflect_through(midpoint)
    }

    /// Reflect both endpoints through an arbitrary point.
    pub fn reflect_through(&self, point: Time) -> Self {
        let (onset, offset) = self.onset_and_offset();
        Self::from_onset_offset(
            &point + (&point - &onset),
            &point + (&point - &offset),
        )
    }

    /// Reverse backward span, keep forward and degenerate ones.
    pub fn normalize(&self) -> Self {
        match self.is_backward() {
            true => self.reverse(),
            false => self.clone(),
        }
    }

    fn lower(&self) -> Time {
        self.onset.clone().min(self.offset())
    }
    fn upper(&self) -> Time {
        self.onset.clone().max(self.offset())
    }

    /// `onset <= t <= offset`.
    pub fn contains(&self, time: Time) -> bool {
        self.onset <= time && time <= self.offset()
    }
    /// `onset < t < offset`.
    pub fn strictly_contains(&self, time: Time) -> bool {
        self.onset < time && time < self.offset()
    }
    /// Clamp point into the span.
    pub fn closest_point_inside(&self, time: Time) -> Time {
        time.max(self.lower()).min(self.upper())
    }

    /// Both endpoints of `other` are inside `self`.
    pub fn encloses(&self, other: &Self) -> bool {
        self.contains(other.onset()) && self.contains(other.offset())
    }
    pub fn properly_encloses(&self, other: &Self) -> bool {
        self.encloses(other) && self != other
    }

    /// Convex hull.
    pub fn hull(&self, other: &Self) -> Self {
        Self::from_onset_offset(
            self.onset().min(other.onset()),
            self.offset().max(other.offset()),
        )
    }

    /// The whole `self` lies before `other` (touching is allowed).
    pub fn is_before(&self, other: &Self) -> bool {
        self.upper() <= other.lower()
    }
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_before(other) && !other.is_before(self)
    }
}
impl Default for Span {
    fn default() -> Self {
        Self::identity()
    }
}
impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Span({} <-> {})", self.onset, self.offset())
    }
}
impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} <-> {})", self.onset, self.offset())
    }
}
impl Monoid for Span {
    fn empty() -> Self {
        Self::identity()
    }
    fn combine(self, other: Self) -> Self {
        self.compose(&other)
    }
}
impl Transformable for Span {
    fn transform(self, span: &Span) -> Self {
        span.compose(&self)
    }
}
impl HasDuration for Span {
    fn duration(&self) -> Duration {
        self.duration.clone()
    }
}
impl HasPosition for Span {
    fn era(&self) -> TimeInterval {
        TimeInterval::NonEmpty(self.clone())
    }
}
impl Reversible for Span {
    fn rev(self) -> Self {
        self.reverse()
    }
}

/// Either nothing, or a span.
///
/// Span has no element, which is neutral for the hull (even a degenerate
/// span sits at some point), so emptiness lives in its own variant.
///
/// ```
/// use music_time::{Monoid, Span, Time, TimeInterval};
///
/// let a = Span::from_onset_offset(Time::from_integer(1), Time::from_integer(2));
/// let b = Span::from_onset_offset(Time::from_integer(4), Time::from_integer(5));
/// let hull: TimeInterval = vec![a, b].into_iter().collect();
/// assert_eq!(hull.span(), Some(Span::from_onset_offset(Time::from_integer(1), Time::from_integer(5))));
/// assert_eq!(TimeInterval::empty().combine(hull.clone()), hull);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeInterval {
    #[default]
    Empty,
    NonEmpty(Span),
}
impl TimeInterval {
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Empty => None,
            Self::NonEmpty(span) => Some(span.clone()),
        }
    }
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
    pub fn hull(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Empty, x) | (x, Self::Empty) => x.clone(),
            (Self::NonEmpty(a), Self::NonEmpty(b)) => Self::NonEmpty(a.hull(b)),
        }
    }
    pub fn contains(&self, time: Time) -> bool {
        match self {
            Self::Empty => false,
            Self::NonEmpty(span) => span.contains(time),
        }
    }
}
impl From<Span> for TimeInterval {
    fn from(span: Span) -> Self {
        Self::NonEmpty(span)
    }
}
impl FromIterator<Span> for TimeInterval {
    fn from_iter<T: IntoIterator<Item = Span>>(iter: T) -> Self {
        Self::concat(iter.into_iter().map(Self::from))
    }
}
impl Monoid for TimeInterval {
    fn empty() -> Self {
        Self::Empty
    }
    fn combine(self, other: Self) -> Self {
        self.hull(&other)
    }
}
