//! Values with notation tags: part, staff, dynamics, articulation etc.
//!
//! [Tagged] behaves like its value in every respect: arithmetic, time
//! transformations and splits go to the value, the tag just travels
//! along. [HasTag] reads and replaces tags through containers.
//!
//! ```
//! use music_time::{Duration, HasTag, Note, Tagged, Voice};
//!
//! let voice = Voice::from_pairs([
//!     (Duration::new(1, 4), Tagged::new(1_u8, 60)),
//!     (Duration::new(1, 4), Tagged::new(1_u8, 62)),
//! ]);
//! let on_second_staff = voice.clone().set_tag(2);
//! assert!(on_second_staff.tags().into_iter().all(|staff| *staff == 2));
//!
//! let named = voice.map_tags(&mut |staff| format!("staff {}", staff));
//! assert_eq!(
//!     named.notes()[0],
//!     Note::new(Duration::new(1, 4), Tagged::new("staff 1".to_string(), 60))
//! );
//! ```

use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

use serde::{Deserialize, Serialize};

use crate::{
    dom::{Score, Track, Voice},
    primitives::{Duration, Event, Note, Span},
    transform::{HasDuration, Reversible, Splittable, Transformable},
};

/// Value with an orthogonal tag.
///
/// In binary operations the left tag wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tagged<T, V> {
    tag: T,
    value: V,
}
impl<T, V> Tagged<T, V> {
    pub fn new(tag: T, value: V) -> Self {
        Self { tag, value }
    }
    pub fn tag(&self) -> &T {
        &self.tag
    }
    pub fn value(&self) -> &V {
        &self.value
    }
    pub fn into_pair(self) -> (T, V) {
        (self.tag, self.value)
    }
    pub fn map<W>(self, f: impl FnOnce(V) -> W) -> Tagged<T, W> {
        Tagged {
            tag: self.tag,
            value: f(self.value),
        }
    }
    /// Replace tag with the tag of another type.
    pub fn retag<U>(self, tag: U) -> Tagged<U, V> {
        Tagged {
            tag,
            value: self.value,
        }
    }
}
impl<T, V: fmt::Display> fmt::Display for Tagged<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<T, V: Add<Output = V>> Add for Tagged<T, V> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.map(|v| v + rhs.value)
    }
}
impl<T, V: Sub<Output = V>> Sub for Tagged<T, V> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.map(|v| v - rhs.value)
    }
}
impl<T, V: Mul<Output = V>> Mul for Tagged<T, V> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.map(|v| v * rhs.value)
    }
}
impl<T, V: Neg<Output = V>> Neg for Tagged<T, V> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

impl<T, V: Transformable> Transformable for Tagged<T, V> {
    fn transform(self, span: &Span) -> Self {
        self.map(|v| v.transform(span))
    }
}
impl<T, V: HasDuration> HasDuration for Tagged<T, V> {
    fn duration(&self) -> Duration {
        self.value.duration()
    }
}
impl<T: Clone, V: Splittable> Splittable for Tagged<T, V> {
    /// Both parts keep the tag.
    fn split(&self, at: Duration) -> (Self, Self) {
        let (a, b) = self.value.split(at);
        (
            Tagged::new(self.tag.clone(), a),
            Tagged::new(self.tag.clone(), b),
        )
    }
}
impl<T, V: Reversible> Reversible for Tagged<T, V> {
    fn rev(self) -> Self {
        self.map(Reversible::rev)
    }
}

/// Access to tags of type `T` inside a (possibly nested) container.
///
/// Only the outermost [Tagged] layer is reached: in
/// `Tagged<T, Tagged<T, V>>` the inner tag stays untouched.
pub trait HasTag<T>: Sized {
    /// The same container, with tags of type `U`.
    type Retagged<U>;

    fn tags(&self) -> Vec<&T>;
    fn tags_mut(&mut self) -> Vec<&mut T>;
    fn map_tags<U>(self, f: &mut dyn FnMut(T) -> U) -> Self::Retagged<U>;

    /// Set every tag to the same value. Timing is never changed.
    fn set_tag(mut self, tag: T) -> Self
    where
        T: Clone,
    {
        for old in self.tags_mut() {
            *old = tag.clone();
        }
        self
    }
}

impl<T, V> HasTag<T> for Tagged<T, V> {
    type Retagged<U> = Tagged<U, V>;
    fn tags(&self) -> Vec<&T> {
        vec![&self.tag]
    }
    fn tags_mut(&mut self) -> Vec<&mut T> {
        vec![&mut self.tag]
    }
    fn map_tags<U>(self, f: &mut dyn FnMut(T) -> U) -> Self::Retagged<U> {
        Tagged {
            tag: f(self.tag),
            value: self.value,
        }
    }
}

impl<T, A: HasTag<T>> HasTag<T> for Vec<A> {
    type Retagged<U> = Vec<A::Retagged<U>>;
    fn tags(&self) -> Vec<&T> {
        self.iter().flat_map(HasTag::<T>::tags).collect()
    }
    fn tags_mut(&mut self) -> Vec<&mut T> {
        self.iter_mut().flat_map(HasTag::<T>::tags_mut).collect()
    }
    fn map_tags<U>(self, f: &mut dyn FnMut(T) -> U) -> Self::Retagged<U> {
        self.into_iter()
            .map(|x| HasTag::<T>::map_tags(x, &mut *f))
            .collect()
    }
}
impl<T, A: HasTag<T>> HasTag<T> for Option<A> {
    type Retagged<U> = Option<A::Retagged<U>>;
    fn tags(&self) -> Vec<&T> {
        self.iter().flat_map(HasTag::<T>::tags).collect()
    }
    fn tags_mut(&mut self) -> Vec<&mut T> {
        self.iter_mut().flat_map(HasTag::<T>::tags_mut).collect()
    }
    fn map_tags<U>(self, f: &mut dyn FnMut(T) -> U) -> Self::Retagged<U> {
        self.map(|x| HasTag::<T>::map_tags(x, f))
    }
}

/// Pairs keep their tags in the second component, the first one is left
/// as it is.
impl<T, S, A: HasTag<T>> HasTag<T> for (S, A) {
    type Retagged<U> = (S, A::Retagged<U>);
    fn tags(&self) -> Vec<&T> {
        HasTag::<T>::tags(&self.1)
    }
    fn tags_mut(&mut self) -> Vec<&mut T> {
        HasTag::<T>::tags_mut(&mut self.1)
    }
    fn map_tags<U>(self, f: &mut dyn FnMut(T) -> U) -> Self::Retagged<U> {
        (self.0, HasTag::<T>::map_tags(self.1, f))
    }
}

/// Wrappers around a single value.
macro_rules! tags_in_value {
    ($($wrapper:ident),*) => {
        $(
            impl<T, A: HasTag<T>> HasTag<T> for $wrapper<A> {
                type Retagged<U> = $wrapper<A::Retagged<U>>;
                fn tags(&self) -> Vec<&T> {
                    HasTag::<T>::tags(self.value())
                }
                fn tags_mut(&mut self) -> Vec<&mut T> {
                    HasTag::<T>::tags_mut(self.value_mut())
                }
                fn map_tags<U>(self, f: &mut dyn FnMut(T) -> U) -> Self::Retagged<U> {
                    self.map(|v| HasTag::<T>::map_tags(v, f))
                }
            }
        )*
    };
}
tags_in_value!(Note, Event);

/// Containers, which keep their items in a `Vec`.
macro_rules! tags_in_items {
    ($($container:ident: $items:ident, $items_mut:ident, $into_items:ident);* $(;)?) => {
        $(
            impl<T, A: HasTag<T>> HasTag<T> for $container<A> {
                type Retagged<U> = $container<A::Retagged<U>>;
                fn tags(&self) -> Vec<&T> {
                    self.$items().iter().flat_map(HasTag::<T>::tags).collect()
                }
                fn tags_mut(&mut self) -> Vec<&mut T> {
                    HasTag::<T>::tags_mut(self.$items_mut())
                }
                fn map_tags<U>(self, f: &mut dyn FnMut(T) -> U) -> Self::Retagged<U> {
                    $container::new(HasTag::<T>::map_tags(self.$into_items(), f))
                }
            }
        )*
    };
}
tags_in_items!(
    Voice: notes, notes_mut, into_notes;
    Score: events, events_mut, into_events;
    Track: events, events_mut, into_events;
);

#[cfg(test)]
mod tests {
    use super::{HasTag, Tagged};
    use crate::{
        dom::{Score, Voice},
        primitives::{Duration, Note, Span, Time},
        transform::{HasDuration, Splittable, Transformable},
    };

    fn d(num: i64, den: u64) -> Duration {
        Duration::new(num, den)
    }

    #[test]
    fn arithmetic_keeps_left_tag() {
        let a = Tagged::new("violin", 3);
        let b = Tagged::new("viola", 4);
        assert_eq!(a + b, Tagged::new("violin", 7));
        assert_eq!(b - a, Tagged::new("viola", 1));
        assert_eq!(a * b, Tagged::new("violin", 12));
        assert_eq!(-a, Tagged::new("violin", -3));
        let dur = Tagged::new(1, d(1, 4)) + Tagged::new(2, d(1, 2));
        assert_eq!(dur.value(), &d(3, 4));
        assert_eq!(dur.to_string(), "3/4");
    }

    #[test]
    fn timing_goes_to_value() {
        let tagged = Tagged::new('p', d(1, 2));
        assert_eq!(tagged.clone().stretch(d(3, 1)), Tagged::new('p', d(3, 2)));
        assert_eq!(tagged.duration(), d(1, 2));
        assert_eq!(
            tagged.split(d(1, 8)),
            (Tagged::new('p', d(1, 8)), Tagged::new('p', d(3, 8)))
        );
    }

    #[test]
    fn set_tag_is_idempotent() {
        let voice = Voice::from_pairs([
            (d(1, 4), Tagged::new(1_u8, 'a')),
            (d(1, 2), Tagged::new(3_u8, 'b')),
        ]);
        let once = voice.clone().set_tag(2);
        let twice = once.clone().set_tag(2);
        assert_eq!(once, twice);
        assert_eq!(once.tags(), vec![&2, &2]);
        assert_eq!(once.duration(), voice.duration());
        assert_eq!(once.durations().collect::<Vec<_>>(), voice.durations().collect::<Vec<_>>());
    }

    #[test]
    fn set_tag_commutes_with_timing() {
        let voice = Voice::from_pairs([
            (d(1, 4), Tagged::new(1_u8, 'a')),
            (d(1, 2), Tagged::new(3_u8, 'b')),
        ]);
        let (a, b) = voice.clone().set_tag(5).split(d(1, 2));
        let (c, e) = voice.split(d(1, 2));
        assert_eq!((a, b), (c.set_tag(5), e.set_tag(5)));

        let score = voice_score().set_tag(9).stretch(d(2, 1));
        assert_eq!(score, voice_score().stretch(d(2, 1)).set_tag(9));
    }

    fn voice_score() -> Score<Tagged<u8, char>> {
        Voice::from_pairs([(d(1, 4), Tagged::new(0_u8, 'x'))]).to_score(Time::origin())
    }

    #[test]
    fn nested_containers() {
        let nested: Vec<Option<Note<Tagged<&str, i32>>>> = vec![
            Some(Note::new(d(1, 1), Tagged::new("fl", 1))),
            None,
            Some(Note::new(d(1, 2), Tagged::new("ob", 2))),
        ];
        assert_eq!(nested.tags(), vec![&"fl", &"ob"]);
        let lens = nested.map_tags(&mut |name| name.len());
        assert_eq!(lens[2], Some(Note::new(d(1, 2), Tagged::new(2, 2))));
    }

    #[test]
    fn pairs_keep_tags_in_value() {
        let span = Span::from_onset_duration(Time::from_integer(1), d(1, 2));
        let pair = (span.clone(), Tagged::new(1_u8, 'a'));
        let once = pair.clone().set_tag(4);
        assert_eq!(once.clone().set_tag(4), once);
        assert_eq!(once.tags(), vec![&4]);
        assert_eq!(once.0, span);
        assert_eq!(once.1.value(), &'a');
        assert_eq!(
            once.clone().delay(d(2, 1)),
            pair.delay(d(2, 1)).set_tag(4)
        );

        let timed: Vec<(Duration, Tagged<u8, char>)> = vec![
            (d(1, 4), Tagged::new(1, 'x')),
            (d(3, 4), Tagged::new(2, 'y')),
        ];
        let named = timed.map_tags(&mut |n| format!("part {}", n));
        assert_eq!(named[1], (d(3, 4), Tagged::new("part 2".to_string(), 'y')));
    }

    #[test]
    fn only_outer_layer() {
        let layered = Tagged::new("outer", Tagged::new("inner", 1));
        let set = layered.set_tag("new");
        assert_eq!(set.tag(), &"new");
        assert_eq!(set.value().tag(), &"inner");
    }
}
