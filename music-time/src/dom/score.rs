//! Parallel music: events, which may overlap.

use derivative::Derivative;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    algebra::Monoid,
    primitives::{Event, Span, Time, TimeInterval},
    transform::{HasPosition, Reversible, Transformable},
};

/// Unordered collection of events.
///
/// ```
/// use music_time::{Event, Monoid, Score, Span, Time};
///
/// let low = Score::new(vec![Event::new(
///     Span::from_onset_offset(Time::from_integer(0), Time::from_integer(4)),
///     36,
/// )]);
/// let high = Score::new(vec![Event::new(
///     Span::from_onset_offset(Time::from_integer(2), Time::from_integer(3)),
///     72,
/// )]);
/// let both = low.combine(high);
/// assert_eq!(
///     both.onset_and_offset(),
///     Some((Time::from_integer(0), Time::from_integer(4)))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Derivative)]
#[derivative(Default(bound = ""))]
#[serde(transparent)]
pub struct Score<A> {
    events: Vec<Event<A>>,
}
impl<A> Score<A> {
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
    pub fn map<B>(self, mut f: impl FnMut(A) -> B) -> Score<B> {
        Score {
            events: self.events.into_iter().map(|ev| ev.map(&mut f)).collect(),
        }
    }
    pub fn merge(&mut self, other: Self) {
        self.events.extend(other.events);
    }
    pub fn push(&mut self, event: Event<A>) {
        self.events.push(event);
    }

    /// Start and end of the whole score.
    pub fn onset_and_offset(&self) -> Option<(Time, Time)> {
        self.era().span().map(|span| span.onset_and_offset())
    }

    /// Events, ordered by onset. Events with equal onsets keep their
    /// insertion order.
    pub fn sorted_events(&self) -> Vec<&Event<A>> {
        self.events
            .iter()
            .sorted_by_key(|ev| ev.span().normalize().onset())
            .collect()
    }

    /// Events, which sound (at least partly) inside `span`.
    pub fn events_overlapping(&self, span: Span) -> impl Iterator<Item = &Event<A>> {
        self.events
            .iter()
            .filter(move |ev| ev.span().overlaps(&span))
    }
}
impl<A> Monoid for Score<A> {
    fn empty() -> Self {
        Self::default()
    }
    fn combine(mut self, other: Self) -> Self {
        self.merge(other);
        self
    }
}
impl<A> FromIterator<Event<A>> for Score<A> {
    fn from_iter<T: IntoIterator<Item = Event<A>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
impl<A> Extend<Event<A>> for Score<A> {
    fn extend<T: IntoIterator<Item = Event<A>>>(&mut self, iter: T) {
        self.events.extend(iter)
    }
}
impl<A> IntoIterator for Score<A> {
    type Item = Event<A>;
    type IntoIter = std::vec::IntoIter<Event<A>>;
    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
impl<A> Transformable for Score<A> {
    fn transform(self, span: &Span) -> Self {
        Self {
            events: self.events.transform(span),
        }
    }
}
impl<A> HasPosition for Score<A> {
    fn era(&self) -> TimeInterval {
        self.events.iter().map(Event::span).collect()
    }
}
impl<A: Reversible> Reversible for Score<A> {
    /// Mirror every event around the middle of the score.
    fn rev(self) -> Self {
        let midpoint = match self.era().span() {
            Some(era) => era.midpoint(),
            None => return self,
        };
        let events = self
            .events
            .into_iter()
            .map(|ev| {
                let span = ev.span().reflect_through(midpoint.clone()).normalize();
                ev.with_span(span).map(Reversible::rev)
            })
            .collect();
        Self { events }
    }
}
