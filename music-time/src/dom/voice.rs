//! Sequential music: notes, played one after another.
//!
//! Voice does not know where it starts. It can be placed on the
//! time-line by [Voice::to_score], [Voice::to_track] or
//! [Voice::to_reactive].
//!
//! ```
//! use music_time::{Duration, HasDuration, Splittable, Voice};
//!
//! let voice = Voice::from_pairs([
//!     (Duration::new(1, 4), "c"),
//!     (Duration::new(1, 2), "d"),
//!     (Duration::new(1, 4), "e"),
//! ]);
//! assert_eq!(voice.duration(), Duration::one());
//!
//! let (head, tail) = voice.split(Duration::new(1, 2));
//! assert_eq!(
//!     head.pairs().collect::<Vec<_>>(),
//!     vec![(Duration::new(1, 4), &"c"), (Duration::new(1, 4), &"d")]
//! );
//! assert_eq!(
//!     tail.pairs().collect::<Vec<_>>(),
//!     vec![(Duration::new(1, 4), &"d"), (Duration::new(1, 4), &"e")]
//! );
//! ```

use derivative::Derivative;
use serde::{Deserialize, Serialize};

use super::{Reactive, Score, Track};
use crate::{
    algebra::Monoid,
    error::{TimeError, TimeResult},
    primitives::{Duration, Event, Note, Span, Time},
    transform::{HasDuration, Reversible, Splittable, Transformable},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Derivative)]
#[derivative(Default(bound = ""))]
#[serde(transparent)]
pub struct Voice<A> {
    notes: Vec<Note<A>>,
}
impl<A> Voice<A> {
    pub fn new(notes: Vec<Note<A>>) -> Self {
        Self { notes }
    }
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Duration, A)>) -> Self {
        pairs
            .into_iter()
            .map(|(duration, value)| Note::new(duration, value))
            .collect()
    }

    pub fn notes(&self) -> &[Note<A>] {
        &self.notes
    }
    pub fn notes_mut(&mut self) -> &mut Vec<Note<A>> {
        &mut self.notes
    }
    pub fn into_notes(self) -> Vec<Note<A>> {
        self.notes
    }
    pub fn pairs(&self) -> impl Iterator<Item = (Duration, &A)> {
        self.notes.iter().map(Note::pair)
    }
    pub fn durations(&self) -> impl Iterator<Item = Duration> + '_ {
        self.notes.iter().map(HasDuration::duration)
    }
    pub fn values(&self) -> impl Iterator<Item = &A> {
        self.notes.iter().map(Note::value)
    }
    pub fn len(&self) -> usize {
        self.notes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn map<B>(self, mut f: impl FnMut(A) -> B) -> Voice<B> {
        self.notes.into_iter().map(|note| note.map(&mut f)).collect()
    }

    /// Play `other` right after `self`.
    pub fn append(&mut self, other: Self) {
        self.notes.extend(other.notes);
    }

    /// Onsets of all notes, if voice starts at `origin`.
    fn onsets(&self, origin: Time) -> impl Iterator<Item = Time> + '_ {
        self.durations().scan(origin, |elapsed, duration| {
            let onset = elapsed.clone();
            *elapsed += duration;
            Some(onset)
        })
    }

    /// Notes as events, if voice starts at `origin`.
    fn events(&self, origin: Time) -> impl Iterator<Item = Event<A>> + '_
    where
        A: Clone,
    {
        self.onsets(origin)
            .zip(self.notes.iter())
            .map(|(onset, note)| Event::from_note(onset, note.clone()))
    }

    /// Merge adjacent notes with equal values.
    ///
    /// Durations are summed, the value is kept as it is.
    ///
    /// ```
    /// # use music_time::{Duration, Voice};
    /// let voice = Voice::from_pairs([
    ///     (Duration::one(), 'a'),
    ///     (Duration::new(1, 2), 'a'),
    ///     (Duration::one(), 'b'),
    /// ]);
    /// assert_eq!(
    ///     voice.fuse(),
    ///     Voice::from_pairs([(Duration::new(3, 2), 'a'), (Duration::one(), 'b')])
    /// );
    /// ```
    pub fn fuse(self) -> Self
    where
        A: PartialEq,
    {
        let mut notes: Vec<Note<A>> = Vec::with_capacity(self.notes.len());
        for note in self.notes {
            match notes.pop() {
                Some(last) if last.value() == note.value() => {
                    let duration = last.duration() + note.duration();
                    notes.push(last.with_duration(duration));
                }
                Some(last) => {
                    notes.push(last);
                    notes.push(note);
                }
                None => notes.push(note),
            }
        }
        Self { notes }
    }

    /// Round every note duration to the grid of `1/limit`
    /// (see [crate::LIMIT_DENOMINATOR] for the usual one).
    ///
    /// Values are left as they are.
    pub fn quantize(self, limit: u64) -> TimeResult<Self> {
        self.notes
            .into_iter()
            .map(|note| {
                let duration = note.duration().quantize(limit)?;
                Ok(note.with_duration(duration))
            })
            .collect()
    }

    /// Place every note on the time-line as event.
    pub fn to_score(&self, origin: Time) -> Score<A>
    where
        A: Clone,
    {
        self.events(origin).collect()
    }

    /// Place the voice on the time-line as a single line of events,
    /// which follow each other in order of the notes.
    pub fn to_track(&self, origin: Time) -> Track<A>
    where
        A: Clone,
    {
        self.events(origin).collect()
    }

    /// Step function, which changes its value at every note onset.
    ///
    /// Before the first note (and after the last one) the nearest note
    /// value holds.
    pub fn to_reactive(&self, origin: Time) -> TimeResult<Reactive<A>>
    where
        A: Clone,
    {
        let mut values = self.values().cloned();
        let initial = values.next().ok_or(TimeError::EmptyVoice)?;
        let changes = self.onsets(origin).skip(1).zip(values).collect();
        Ok(Reactive::new(initial, changes))
    }
}
impl<A> Voice<A>
where
    A: Splittable + Transformable + Clone,
{
    /// Tie-split every note into lengths, which can be notated without
    /// tuplets-inside-ties: plain and dotted values.
    ///
    /// ```
    /// # use music_time::{Duration, Voice};
    /// let voice = Voice::from_pairs([(Duration::new(5, 8), 60)]);
    /// assert_eq!(
    ///     voice.split_into_notated().unwrap(),
    ///     Voice::from_pairs([(Duration::new(1, 8), 60), (Duration::new(1, 2), 60)])
    /// );
    /// ```
    pub fn split_into_notated(self) -> TimeResult<Self> {
        let mut notes = Vec::with_capacity(self.notes.len());
        for note in self.notes {
            let parts = note.duration().notated_parts()?;
            let mut rest = note;
            let last = parts.len().saturating_sub(1);
            for (idx, part) in parts.into_iter().enumerate() {
                if idx == last {
                    break;
                }
                let (head, tail) = rest.split(part);
                notes.push(head);
                rest = tail;
            }
            notes.push(rest);
        }
        Ok(Self { notes })
    }
}

impl<A> Monoid for Voice<A> {
    fn empty() -> Self {
        Self::default()
    }
    fn combine(mut self, other: Self) -> Self {
        self.append(other);
        self
    }
}
impl<A> FromIterator<Note<A>> for Voice<A> {
    fn from_iter<T: IntoIterator<Item = Note<A>>>(iter: T) -> Self {
        Self {
            notes: iter.into_iter().collect(),
        }
    }
}
impl<A> Extend<Note<A>> for Voice<A> {
    fn extend<T: IntoIterator<Item = Note<A>>>(&mut self, iter: T) {
        self.notes.extend(iter)
    }
}
impl<A> IntoIterator for Voice<A> {
    type Item = Note<A>;
    type IntoIter = std::vec::IntoIter<Note<A>>;
    fn into_iter(self) -> Self::IntoIter {
        self.notes.into_iter()
    }
}
impl<A> From<Note<A>> for Voice<A> {
    fn from(note: Note<A>) -> Self {
        Self { notes: vec![note] }
    }
}

impl<A> Transformable for Voice<A> {
    fn transform(self, span: &Span) -> Self {
        self.notes.into_iter().map(|n| n.transform(span)).collect()
    }
}
impl<A> HasDuration for Voice<A> {
    fn duration(&self) -> Duration {
        self.durations().sum()
    }
}
impl<A> Splittable for Voice<A>
where
    A: Splittable + Transformable + Clone,
{
    /// Notes before `at` go to the first part, notes after it to the
    /// second. At most one note, which crosses `at`, is split itself.
    fn split(&self, at: Duration) -> (Self, Self) {
        let mut head = Vec::new();
        let mut tail = Vec::new();
        let mut elapsed = Duration::zero();
        for note in self.notes.iter() {
            let duration = note.duration();
            let end = &elapsed + &duration;
            if end <= at {
                head.push(note.clone());
            } else if elapsed >= at {
                tail.push(note.clone());
            } else {
                let inside = &at - &elapsed;
                log::debug!(
                    "voice split at {}: cutting note at {} of {}",
                    at,
                    inside,
                    duration
                );
                let (a, b) = note.split(inside);
                head.push(a);
                tail.push(b);
            }
            log::trace!("voice split: elapsed {}", elapsed);
            elapsed = end;
        }
        (Self { notes: head }, Self { notes: tail })
    }
}
impl<A: Reversible> Reversible for Voice<A> {
    fn rev(self) -> Self {
        Self {
            notes: self.notes.rev(),
        }
    }
}
