//! Step functions of time: tempo, clef, key or any other value, which holds
//! until it changes.
//!
//! ```
//! use music_time::{Duration, Note, Reactive, Span, Time};
//!
//! let reactive = Reactive::new(
//!     0,
//!     vec![(Time::from_integer(1), 5), (Time::from_integer(3), 2)],
//! );
//! let window = Span::from_onset_offset(Time::origin(), Time::from_integer(3));
//! let voice = reactive.to_voice(window).unwrap();
//! assert_eq!(
//!     voice.notes(),
//!     &[
//!         Note::new(Duration::from_integer(1), 0),
//!         Note::new(Duration::from_integer(2), 5),
//!     ]
//! );
//! ```

use std::iter;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::Voice;
use crate::{
    error::{TimeError, TimeResult},
    primitives::{Note, Span, Time},
    transform::Transformable,
};

/// Value before the first change and a list of changes.
///
/// Changes are always sorted by time and unique: at every time point
/// at most one change happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawReactive<A>")]
pub struct Reactive<A> {
    initial: A,
    changes: Vec<(Time, A)>,
}

#[derive(Deserialize)]
struct RawReactive<A> {
    initial: A,
    changes: Vec<(Time, A)>,
}
impl<A> From<RawReactive<A>> for Reactive<A> {
    fn from(raw: RawReactive<A>) -> Self {
        Self::new(raw.initial, raw.changes)
    }
}

impl<A> Reactive<A> {
    /// Build step function from unordered changes.
    ///
    /// If several changes happen at the same time, the later in the
    /// list wins.
    pub fn new(initial: A, mut changes: Vec<(Time, A)>) -> Self {
        if !changes.iter().map(|(t, _)| t).tuple_windows().all(|(a, b)| a < b) {
            log::warn!(
                "reactive changes are not sorted or not unique, normalizing {} changes",
                changes.len()
            );
            changes.sort_by(|(a, _), (b, _)| a.cmp(b));
            changes = later_wins(changes);
        }
        Self { initial, changes }
    }
    pub fn constant(value: A) -> Self {
        Self {
            initial: value,
            changes: Vec::new(),
        }
    }

    /// Value, which holds at `time`.
    ///
    /// Change happens exactly at its time: the new value holds from that
    /// point on.
    pub fn at(&self, time: Time) -> &A {
        let idx = self.changes.partition_point(|(t, _)| *t <= time);
        match idx {
            0 => &self.initial,
            idx => &self.changes[idx - 1].1,
        }
    }
    pub fn initial(&self) -> &A {
        &self.initial
    }
    pub fn changes(&self) -> &[(Time, A)] {
        &self.changes
    }
    /// Times of all changes.
    pub fn occurrences(&self) -> impl Iterator<Item = Time> + '_ {
        self.changes.iter().map(|(t, _)| t.clone())
    }

    pub fn map<B>(self, mut f: impl FnMut(A) -> B) -> Reactive<B> {
        Reactive {
            initial: f(self.initial),
            changes: self.changes.into_iter().map(|(t, v)| (t, f(v))).collect(),
        }
    }

    /// Pointwise combination of two step functions.
    ///
    /// ```
    /// # use music_time::{Reactive, Time};
    /// let a = Reactive::new(1, vec![(Time::from_integer(2), 10)]);
    /// let b = Reactive::new(100, vec![(Time::from_integer(1), 200)]);
    /// let sum = a.zip_with(&b, |x, y| x + y);
    /// assert_eq!(sum.at(Time::origin()), &101);
    /// assert_eq!(sum.at(Time::from_integer(1)), &201);
    /// assert_eq!(sum.at(Time::from_integer(5)), &210);
    /// ```
    pub fn zip_with<B, C>(
        &self,
        other: &Reactive<B>,
        mut f: impl FnMut(&A, &B) -> C,
    ) -> Reactive<C> {
        let initial = f(&self.initial, &other.initial);
        let changes = self
            .occurrences()
            .merge(other.occurrences())
            .dedup()
            .map(|t| {
                let value = f(self.at(t.clone()), other.at(t.clone()));
                (t, value)
            })
            .collect();
        Reactive { initial, changes }
    }

    /// Sample step function inside the window.
    ///
    /// The first sample is taken at the window onset, the others at every
    /// change strictly inside the window. Each sample lasts until the next
    /// one (or until the window offset).
    ///
    /// Sampling starts at the window onset `u`, not at time `0`: for a
    /// window starting at the origin both are the same, for any other
    /// window the first note holds the value sounding at `u`, whatever
    /// the value at `0` is.
    ///
    /// # Errors
    /// [TimeError::NotForward] if window is backward. Degenerate window
    /// gives an empty voice.
    pub fn to_voice(&self, window: Span) -> TimeResult<Voice<A>>
    where
        A: Clone,
    {
        if window.is_backward() {
            return Err(TimeError::NotForward(window));
        }
        let (onset, offset) = window.onset_and_offset();
        if onset == offset {
            return Ok(Voice::default());
        }
        let inner = self
            .occurrences()
            .filter(|t| window.strictly_contains(t.clone()));
        let voice: Voice<A> = iter::once(onset)
            .chain(inner)
            .chain(iter::once(offset))
            .tuple_windows()
            .map(|(a, b)| Note::new(&b - &a, self.at(a).clone()))
            .collect();
        log::debug!(
            "sampled {} notes from reactive inside {}",
            voice.len(),
            window
        );
        Ok(voice)
    }
}

/// Sorted changes with equal times are reduced to the last one.
fn later_wins<A>(changes: Vec<(Time, A)>) -> Vec<(Time, A)> {
    let mut result: Vec<(Time, A)> = Vec::with_capacity(changes.len());
    for (time, value) in changes {
        match result.last_mut() {
            Some(last) if last.0 == time => last.1 = value,
            _ => result.push((time, value)),
        }
    }
    result
}

impl<A> Transformable for Reactive<A> {
    /// Move every change. Backward span turns the function around: the
    /// last value becomes the initial one.
    fn transform(self, span: &Span) -> Self {
        let times = self
            .changes
            .iter()
            .map(|(t, _)| t.clone().transform(span))
            .collect_vec();
        let values = self.changes.into_iter().map(|(_, v)| v);
        if !span.is_backward() {
            return Self {
                initial: self.initial,
                changes: later_wins(times.into_iter().zip(values).collect()),
            };
        }
        let mut previous = self.initial;
        let mut changes = Vec::with_capacity(times.len());
        for (time, value) in times.into_iter().zip(values) {
            changes.push((time, previous));
            previous = value;
        }
        changes.reverse();
        Self {
            initial: previous,
            changes,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        dom::{Reactive, Voice},
        error::TimeError,
        primitives::{Duration, Span, Time},
        transform::Transformable,
    };

    fn t(n: i64) -> Time {
        Time::from_integer(n)
    }

    fn steps() -> Reactive<i32> {
        Reactive::new(0, vec![(t(1), 5), (t(3), 2)])
    }

    #[test]
    fn lookup() {
        let r = steps();
        assert_eq!(r.at(t(-10)), &0);
        assert_eq!(r.at(Time::new(1, 2)), &0);
        assert_eq!(r.at(t(1)), &5);
        assert_eq!(r.at(t(3)), &2);
        assert_eq!(r.at(t(100)), &2);
        assert_eq!(r.occurrences().collect::<Vec<_>>(), vec![t(1), t(3)]);
        assert_eq!(Reactive::constant('x').at(t(7)), &'x');
    }

    #[test]
    fn unsorted_changes() {
        let _ = env_logger::builder().is_test(true).try_init();
        let r = Reactive::new(0, vec![(t(3), 2), (t(1), 4), (t(1), 5)]);
        assert_eq!(r, steps());
    }

    #[test]
    fn to_voice() {
        let r = steps();
        let window = Span::from_onset_offset(t(0), t(3));
        assert_eq!(
            r.to_voice(window).unwrap(),
            Voice::from_pairs([(Duration::from_integer(1), 0), (Duration::from_integer(2), 5)])
        );
        // window, which does not start at the origin
        let window = Span::from_onset_offset(Time::new(1, 2), t(4));
        assert_eq!(
            r.to_voice(window).unwrap(),
            Voice::from_pairs([
                (Duration::new(1, 2), 0),
                (Duration::from_integer(2), 5),
                (Duration::from_integer(1), 2),
            ])
        );
        let point = Span::from_onset_offset(t(2), t(2));
        assert_eq!(r.to_voice(point).unwrap(), Voice::default());
        let backward = Span::from_onset_offset(t(3), t(0));
        assert_eq!(r.to_voice(backward.clone()), Err(TimeError::NotForward(backward)));
    }

    #[test]
    fn to_voice_starts_at_window_onset() {
        let r = steps();
        let window = Span::from_onset_offset(Time::new(3, 2), t(5));
        let voice = r.to_voice(window).unwrap();
        // the value at the origin (0) does not take part
        assert_eq!(voice.values().collect::<Vec<_>>(), vec![&5, &2]);
        assert_eq!(
            voice.durations().collect::<Vec<_>>(),
            vec![Duration::new(3, 2), Duration::from_integer(2)]
        );
    }

    #[test]
    fn transform_forward() {
        let r = steps().stretch(Duration::from_integer(2)).delay(Duration::one());
        assert_eq!(r.changes(), &[(t(3), 5), (t(7), 2)]);
        // degenerate stretch collapses all changes into one
        let collapsed = steps().stretch(Duration::zero());
        assert_eq!(collapsed.changes(), &[(t(0), 2)]);
    }

    #[test]
    fn transform_composes() {
        let forward = Span::from_onset_duration(t(2), Duration::new(1, 2));
        let backward = Span::from_onset_duration(t(1), Duration::from_integer(-2));
        let pairs = [
            (&forward, &backward),
            (&backward, &forward),
            (&backward, &backward),
            (&forward, &forward),
        ];
        for (outer, inner) in pairs {
            assert_eq!(
                steps().transform(&outer.compose(inner)),
                steps().transform(inner).transform(outer)
            );
        }
    }

    #[test]
    fn transform_backward() {
        let r = steps().stretch(Duration::from_integer(-1));
        assert_eq!(r.initial(), &2);
        assert_eq!(r.changes(), &[(t(-3), 5), (t(-1), 0)]);
        assert_eq!(r.at(t(-5)), &2);
        assert_eq!(r.at(t(-2)), &5);
        assert_eq!(r.at(t(0)), &0);
    }
}
