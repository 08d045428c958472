//! Values, glued to the absolute time-line: `Event` is a value, that
//! sounds during a span.
use serde::{Deserialize, Serialize};

use super::{Duration, Note, Span, Time, TimeInterval};
use crate::transform::{HasDuration, HasPosition, Transformable};

/// Span and value.
///
/// Span is in absolute coordinates, value is left in its own: transforming
/// an event moves and stretches only its span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event<A> {
    span: Span,
    value: A,
}
impl<A> Event<A> {
    pub fn new(span: Span, value: A) -> Self {
        Self { span, value }
    }
    /// Event, which starts at `onset` and lasts for the note duration.
    pub fn from_note(onset: Time, note: Note<A>) -> Self {
        let (duration, value) = note.into_pair();
        Self::new(Span::from_onset_duration(onset, duration), value)
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }
    pub fn value(&self) -> &A {
        &self.value
    }
    pub fn value_mut(&mut self) -> &mut A {
        &mut self.value
    }
    pub fn into_pair(self) -> (Span, A) {
        (self.span, self.value)
    }
    pub fn into_note(self) -> Note<A> {
        Note::new(self.span.duration(), self.value)
    }
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Event<B> {
        Event {
            span: self.span,
            value: f(self.value),
        }
    }
    pub fn with_span(self, span: Span) -> Self {
        Self { span, ..self }
    }

    /// True if event sounds at the given time: `onset <= time < offset`.
    ///
    /// # Example
    /// ```
    /// # use music_time::{Event, Span, Time};
    /// let quarter = Time::new(1, 4);
    /// let eighth = Time::new(1, 8);
    /// let ev = Event::new(Span::from_onset_offset(quarter, Time::new(1, 2)), "c");
    /// assert!(ev.contains(Time::new(3, 8)));
    /// assert!(!ev.contains(eighth));
    /// assert!(!ev.contains(Time::new(1, 2)));
    /// ```
    pub fn contains(&self, time: Time) -> bool {
        let span = self.span.normalize();
        span.onset() <= time && time < span.offset()
    }

    pub fn overlaps<B>(&self, other: &Event<B>) -> bool {
        self.span.overlaps(&other.span)
    }

    /// That part of `self`, which sounds after `other` ended.
    ///
    /// # Returns
    /// - None if ends are equal or other is longer.
    /// - Duration of the overhang otherwise.
    ///
    /// # Example
    /// ```
    /// # use music_time::{Duration, Event, Span, Time};
    /// let ev1 = Event::new(Span::from_onset_offset(Time::new(1, 4), Time::new(1, 2)), ());
    /// let ev2 = Event::new(Span::from_onset_offset(Time::new(1, 4), Time::new(5, 8)), ());
    /// assert_eq!(ev1.outlasts(&ev2), None);
    /// assert_eq!(ev2.outlasts(&ev1), Some(Duration::new(1, 8)));
    /// ```
    pub fn outlasts<B>(&self, other: &Event<B>) -> Option<Duration> {
        let s_end = self.span.normalize().offset();
        let o_end = other.span.normalize().offset();
        match s_end > o_end {
            true => Some(s_end - o_end),
            false => None,
        }
    }
}
impl<A> Transformable for Event<A> {
    fn transform(self, span: &Span) -> Self {
        Self {
            span: self.span.transform(span),
            value: self.value,
        }
    }
}
impl<A> HasDuration for Event<A> {
    fn duration(&self) -> Duration {
        self.span.duration()
    }
}
impl<A> HasPosition for Event<A> {
    fn era(&self) -> TimeInterval {
        TimeInterval::from(self.span.clone())
    }
}
