//! A line of events on the time-line: a voice placed at its origin, a
//! row of markers, dynamics or lyrics.
//!
//! Like [Score](super::Score), track is an unordered collection of
//! `(span, value)` events and is transformed by transforming every event
//! span. It keeps the order, in which the events were given, and answers
//! point queries: which events sound at a given time.
//!
//! ```
//! use music_time::{Duration, Time, Track, Voice};
//!
//! let track = Voice::from_pairs([(Duration::new(1, 2), "p"), (Duration::new(1, 2), "f")])
//!     .to_track(Time::from_integer(4));
//! let sounding: Vec<_> = track.events_at(Time::new(9, 2)).map(|ev| *ev.value()).collect();
//! assert_eq!(sounding, vec!["f"]);
//! ```

use derivative::Derivative;
use serde::{Deserialize, Serialize};

use super::Score;
use crate::{
    algebra::Monoid,
    primitives::{Event, Span, Time, TimeInterval},
    transform::{HasPosition, Transformable},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Derivative)]
#[derivative(Default(bound = ""))]
#[serde(transparent)]
pub struct Track<A> {
    events: Vec<Event<A>>,
}
impl<A> Track<A> {
    pub fn new(events: Vec<Event<A>>) -> Self {
        Self { events }
    }
    pub fn events(&self) -> &[Event<A>] {
        &self.events
    }
    pub fn events_mut(&mut self) -> &mut Vec<Event<A>> {
        &mut self.events
    }
    pub fn into_events(self) -> Vec<Event<A>> {
        self.events
    }
    pub fn len(&self) -> usize {
        self.events.len()
    }
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
    pub fn map<B>(self, mut f: impl FnMut(A) -> B) -> Track<B> {
        Track {
            events: self.events.into_iter().map(|ev| ev.map(&mut f)).collect(),
        }
    }
    pub fn merge(&mut self, other: Self) {
        self.events.extend(other.events)
    }
    pub fn push(&mut self, event: Event<A>) {
        self.events.push(event);
    }

    /// Events, which sound at `time` (see [Event::contains]).
    pub fn events_at(&self, time: Time) -> impl Iterator<Item = &Event<A>> {
        self.events.iter().filter(move |ev| ev.contains(time.clone()))
    }

    pub fn into_score(self) -> Score<A> {
        Score::new(self.events)
    }
}
impl<A> Monoid for Track<A> {
    fn empty() -> Self {
        Self::default()
    }
    fn combine(mut self, other: Self) -> Self {
        self.merge(other);
        self
    }
}
impl<A> FromIterator<Event<A>> for Track<A> {
    fn from_iter<T: IntoIterator<Item = Event<A>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
impl<A> Extend<Event<A>> for Track<A> {
    fn extend<T: IntoIterator<Item = Event<A>>>(&mut self, iter: T) {
        self.events.extend(iter)
    }
}
impl<A> IntoIterator for Track<A> {
    type Item = Event<A>;
    type IntoIter = std::vec::IntoIter<Event<A>>;
    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
impl<A> Transformable for Track<A> {
    fn transform(self, span: &Span) -> Self {
        Self {
            events: self.events.transform(span),
        }
    }
}
impl<A> HasPosition for Track<A> {
    /// Hull of all event spans.
    fn era(&self) -> TimeInterval {
        self.events.era()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        algebra::Monoid,
        dom::Track,
        primitives::{Duration, Event, Span, Time},
        transform::{HasPosition, Transformable},
    };

    fn ev(onset: i64, offset: i64, value: &'static str) -> Event<&'static str> {
        Event::new(
            Span::from_onset_offset(Time::from_integer(onset), Time::from_integer(offset)),
            value,
        )
    }

    #[test]
    fn track() {
        let track: Track<&str> = vec![ev(2, 3, "p"), ev(0, 1, "f")].into_iter().collect();
        assert_eq!(
            track.era().span(),
            Some(Span::from_onset_offset(Time::origin(), Time::from_integer(3)))
        );
        let other = Track::new(vec![ev(3, 4, "ff")]);
        let merged = track.combine(other).delay(Duration::one());
        assert_eq!(merged.offset(), Some(Time::from_integer(5)));
        let lens = merged.map(str::len);
        assert_eq!(
            lens.events()[2],
            Event::new(Span::from_onset_offset(Time::from_integer(4), Time::from_integer(5)), 2)
        );
    }

    #[test]
    fn events_at_point() {
        let track = Track::new(vec![ev(0, 2, "a"), ev(1, 3, "b"), ev(3, 2, "c")]);
        let at = |n: i64| -> Vec<&'static str> {
            track.events_at(Time::from_integer(n)).map(|e| *e.value()).collect()
        };
        assert_eq!(at(1), vec!["a", "b"]);
        // offsets are excluded, backward events are normalized
        assert_eq!(at(2), vec!["b", "c"]);
        assert_eq!(at(3), Vec::<&str>::new());
    }

    #[test]
    fn transform_every_span() {
        let track = Track::new(vec![ev(0, 1, "a"), ev(1, 3, "b")]);
        let span = Span::from_onset_duration(Time::from_integer(4), Duration::from_integer(-1));
        let moved = track.clone().transform(&span);
        assert_eq!(moved.events(), &[ev(4, 3, "a"), ev(3, 1, "b")]);
        let outer = Span::from_onset_duration(Time::new(1, 2), Duration::new(3, 2));
        assert_eq!(
            track.clone().transform(&outer.compose(&span)),
            moved.transform(&outer)
        );
        assert_eq!(track.clone().into_score().events(), track.events());
    }
}
