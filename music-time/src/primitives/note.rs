//! Note: a value, stretched by a duration.
//!
//! `Note(d, x)` keeps `x` in its own (unstretched) coordinates. The
//! *realized* value is `x` stretched by `d`. Both views are kept
//! consistent: [Note::realized] applies the stretch, [Note::from_realized]
//! undoes it.
//!
//! # Examples
//!
//! ```
//! use music_time::{Duration, Note, Splittable, HasDuration};
//!
//! let note = Note::new(Duration::new(3, 4), 60_u8);
//! let (head, tail) = note.split(Duration::new(1, 4));
//! assert_eq!(head, Note::new(Duration::new(1, 4), 60));
//! assert_eq!(tail, Note::new(Duration::new(1, 2), 60));
//! assert_eq!(head.duration() + tail.duration(), note.duration());
//! ```

use serde::{Deserialize, Serialize};

use super::{Duration, Span};
use crate::{
    error::TimeResult,
    transform::{HasDuration, Reversible, Splittable, Transformable},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note<A> {
    duration: Duration,
    value: A,
}
impl<A> Note<A> {
    pub fn new(duration: Duration, value: A) -> Self {
        Self { duration, value }
    }

    /// Raw view: duration and unstretched value.
    pub fn pair(&self) -> (Duration, &A) {
        (self.duration.clone(), &self.value)
    }
    pub fn into_pair(self) -> (Duration, A) {
        (self.duration, self.value)
    }
    /// Unstretched value.
    pub fn value(&self) -> &A {
        &self.value
    }
    pub fn value_mut(&mut self) -> &mut A {
        &mut self.value
    }

    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Note<B> {
        Note {
            duration: self.duration,
            value: f(self.value),
        }
    }

    pub fn with_duration(self, duration: Duration) -> Self {
        Self { duration, ..self }
    }
}
impl<A: Transformable> Note<A> {
    /// Value, seen through the stretch.
    ///
    /// ```
    /// # use music_time::{Duration, Note};
    /// let note = Note::new(Duration::from_integer(2), Duration::new(3, 4));
    /// assert_eq!(note.realized(), Duration::new(3, 2));
    /// ```
    pub fn realized(&self) -> A
    where
        A: Clone,
    {
        self.value.clone().stretch(self.duration.clone())
    }
    pub fn into_realized(self) -> A {
        self.value.stretch(self.duration)
    }

    /// Build note from the realized value, undoing the stretch.
    ///
    /// Zero duration can not be undone.
    ///
    /// ```
    /// # use music_time::{Duration, Note};
    /// let note = Note::from_realized(Duration::from_integer(2), Duration::new(3, 2)).unwrap();
    /// assert_eq!(note.value(), &Duration::new(3, 4));
    /// assert!(Note::from_realized(Duration::zero(), Duration::one()).is_err());
    /// ```
    pub fn from_realized(duration: Duration, realized: A) -> TimeResult<Self> {
        Ok(Self {
            value: realized.compress(duration.clone())?,
            duration,
        })
    }

    /// Replace the realized value, keeping the duration.
    pub fn set_realized(self, realized: A) -> TimeResult<Self> {
        Self::from_realized(self.duration, realized)
    }
}
impl<A> Transformable for Note<A> {
    /// Only the duration is scaled: the value lives in note coordinates,
    /// and notes do not know where they are.
    fn transform(self, span: &Span) -> Self {
        Self {
            duration: self.duration.transform(span),
            value: self.value,
        }
    }
}
impl<A> HasDuration for Note<A> {
    fn duration(&self) -> Duration {
        self.duration.clone()
    }
}
impl<A> Splittable for Note<A>
where
    A: Splittable + Transformable + Clone,
{
    /// Split note at `at` (in note duration).
    ///
    /// The outer duration is split as a scalar: `da + db = d`.
    /// The inner value is split at the same relative point of its own
    /// duration, which gives `xa'` and `xb'`. Realized halves must equal the
    /// parts of the realized whole, so the correction factors solve
    /// `da * p * |xa'| = d * |xa'|` and `db * q * |xb'| = d * |xb'|`,
    /// i.e. `p = d / da` and `q = d / db`.
    ///
    /// On the boundaries (`da` or `db` is zero) no factor exists: the
    /// degenerate half keeps its uncorrected inner part, the other half
    /// is the whole note.
    fn split(&self, at: Duration) -> (Self, Self) {
        let (da, db) = self.duration.split(at.clone());
        let inner = self.value.duration();
        match (
            self.duration.checked_div(&da),
            self.duration.checked_div(&db),
        ) {
            (Ok(p), Ok(q)) => {
                let relative = &da / &self.duration;
                let (xa, xb) = self.value.split(inner * relative);
                log::trace!(
                    "note split at {}: da={}, db={}, p={}, q={}",
                    at,
                    da,
                    db,
                    p,
                    q
                );
                (Note::new(da, xa.stretch(p)), Note::new(db, xb.stretch(q)))
            }
            (Err(_), _) => {
                log::trace!("note split at {} saturated to the onset", at);
                let (xa, _) = self.value.split(Duration::zero());
                (Note::new(da, xa), self.clone())
            }
            (_, Err(_)) => {
                log::trace!("note split at {} saturated to the offset", at);
                let (_, xb) = self.value.split(inner);
                (self.clone(), Note::new(db, xb))
            }
        }
    }
}
impl<A: Reversible> Reversible for Note<A> {
    fn rev(self) -> Self {
        self.map(Reversible::rev)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        primitives::{Duration, Note, Span, Time},
        transform::{HasDuration, Splittable, Transformable},
    };

    #[test]
    fn views() {
        let note = Note::new(Duration::from_integer(2), Duration::new(3, 4));
        assert_eq!(note.pair(), (Duration::from_integer(2), &Duration::new(3, 4)));
        assert_eq!(note.realized(), Duration::new(3, 2));
        let back = note.clone().set_realized(Duration::from_integer(3)).unwrap();
        assert_eq!(back, Note::new(Duration::from_integer(2), Duration::new(3, 2)));
        assert_eq!(back.into_realized(), Duration::from_integer(3));
    }

    #[test]
    fn transform_scales_duration_only() {
        let note = Note::new(Duration::new(1, 4), 'c');
        let span = Span::from_onset_duration(Time::from_integer(10), Duration::from_integer(2));
        assert_eq!(note.clone().transform(&span), Note::new(Duration::new(1, 2), 'c'));
        assert_eq!(note.clone().transform(&Span::identity()), note);
    }

    #[test]
    fn split_nested_duration() {
        let note = Note::new(Duration::from_integer(2), Duration::from_integer(3));
        let (a, b) = note.split(Duration::new(1, 2));
        assert_eq!(a, Note::new(Duration::new(1, 2), Duration::from_integer(3)));
        assert_eq!(b, Note::new(Duration::new(3, 2), Duration::from_integer(3)));
        assert_eq!(a.duration() + b.duration(), note.duration());
        // realized halves sum up to the realized whole
        assert_eq!(a.realized() + b.realized(), note.realized());
        assert_eq!(a.realized(), note.realized().beginning(Duration::new(3, 2)));
    }

    #[test]
    fn split_boundaries() {
        let note = Note::new(Duration::from_integer(2), Duration::from_integer(3));
        assert_eq!(
            note.split(Duration::zero()),
            (Note::new(Duration::zero(), Duration::zero()), note.clone())
        );
        assert_eq!(
            note.split(Duration::new(-1, 2)),
            (Note::new(Duration::zero(), Duration::zero()), note.clone())
        );
        assert_eq!(
            note.split(Duration::from_integer(2)),
            (note.clone(), Note::new(Duration::zero(), Duration::zero()))
        );
        assert_eq!(
            note.split(Duration::from_integer(7)),
            (note.clone(), Note::new(Duration::zero(), Duration::zero()))
        );
    }

    #[test]
    fn split_scalar() {
        let note = Note::new(Duration::from_integer(1), "a");
        assert_eq!(
            note.split(Duration::new(1, 3)),
            (Note::new(Duration::new(1, 3), "a"), Note::new(Duration::new(2, 3), "a"))
        );
    }

    #[test]
    fn transform_composes() {
        let outer = Span::from_onset_duration(Time::from_integer(1), Duration::new(2, 3));
        let inner = Span::from_onset_duration(Time::new(-1, 2), Duration::from_integer(-3));
        let note = Note::new(Duration::new(3, 4), Duration::new(1, 2));
        assert_eq!(
            note.clone().transform(&outer.compose(&inner)),
            note.transform(&inner).transform(&outer)
        );
    }
}
