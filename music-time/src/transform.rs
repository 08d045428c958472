//! Capabilities of values, which live in time.
//!
//! * [Transformable]: can be delayed and stretched by a `Span`.
//! * [HasDuration] / [HasPosition]: can tell how long / where they are.
//! * [Splittable]: can be cut into two parts, which sum up to the whole.
//! * [Reversible]: can be played backwards.
//!
//! Plain scalar values (numbers, strings, etc.) do not carry time: they are
//! transform-invariant, have zero internal duration and are copied to both
//! parts on split.
//!
//! # Laws
//!
//! * `x.transform(&Span::identity()) == x`
//! * `x.transform(&a.compose(&b)) == x.transform(&b).transform(&a)`
//! * `let (a, b) = x.split(t); a.duration() + b.duration() == x.duration()`
//! * `x.split(t)` with `t <= 0` gives degenerate first part, with
//!   `t >= x.duration()` gives degenerate second part.

use crate::{
    error::TimeResult,
    primitives::{Duration, Span, Time, TimeInterval},
};

pub trait Transformable: Sized {
    fn transform(self, span: &Span) -> Self;

    fn delay(self, by: Duration) -> Self {
        self.transform(&Span::delaying(by))
    }
    fn undelay(self, by: Duration) -> Self {
        self.delay(-by)
    }
    /// Move the origin to `time`.
    fn delay_time(self, time: Time) -> Self {
        self.delay(time.since_origin())
    }
    fn stretch(self, by: Duration) -> Self {
        self.transform(&Span::stretching(by))
    }
    /// Stretch by `1 / by`. Fails if `by` is zero.
    fn compress(self, by: Duration) -> TimeResult<Self> {
        Ok(self.stretch(by.recip()?))
    }
}

pub trait HasDuration {
    fn duration(&self) -> Duration;

    /// Stretch value, so its duration becomes `target`.
    fn stretch_to(self, target: Duration) -> TimeResult<Self>
    where
        Self: Transformable,
    {
        let factor = target.checked_div(&self.duration())?;
        Ok(self.stretch(factor))
    }
}

pub trait HasPosition {
    fn era(&self) -> TimeInterval;

    fn onset(&self) -> Option<Time> {
        self.era().span().map(|span| span.onset())
    }
    fn offset(&self) -> Option<Time> {
        self.era().span().map(|span| span.offset())
    }

    /// Move value, so it starts at `time`. Values without position are
    /// left as they are.
    fn start_at(self, time: Time) -> Self
    where
        Self: Transformable,
    {
        match self.onset() {
            Some(onset) => {
                let by = time - onset;
                self.delay(by)
            }
            None => self,
        }
    }
}

pub trait Splittable: HasDuration + Sized {
    /// Cut at `at`, measured from the beginning of the value.
    fn split(&self, at: Duration) -> (Self, Self);

    fn beginning(&self, at: Duration) -> Self {
        self.split(at).0
    }
    fn ending(&self, at: Duration) -> Self {
        self.split(at).1
    }
}

pub trait Reversible {
    fn rev(self) -> Self;
}

impl<T: Transformable> Transformable for Vec<T> {
    fn transform(self, span: &Span) -> Self {
        self.into_iter().map(|x| x.transform(span)).collect()
    }
}
impl<T: Transformable> Transformable for Option<T> {
    fn transform(self, span: &Span) -> Self {
        self.map(|x| x.transform(span))
    }
}
impl<T: Transformable> Transformable for Box<T> {
    fn transform(self, span: &Span) -> Self {
        Box::new((*self).transform(span))
    }
}
impl<A: Transformable, B: Transformable> Transformable for (A, B) {
    fn transform(self, span: &Span) -> Self {
        (self.0.transform(span), self.1.transform(span))
    }
}
impl<T: Reversible> Reversible for Vec<T> {
    fn rev(self) -> Self {
        self.into_iter().rev().map(Reversible::rev).collect()
    }
}
impl<T: Reversible> Reversible for Option<T> {
    fn rev(self) -> Self {
        self.map(Reversible::rev)
    }
}
impl<T: HasPosition> HasPosition for Vec<T> {
    fn era(&self) -> TimeInterval {
        self.iter().fold(TimeInterval::Empty, |acc, x| acc.hull(&x.era()))
    }
}

macro_rules! timeless {
    ($($t:ty),* $(,)?) => {
        $(
            impl Transformable for $t {
                fn transform(self, _span: &Span) -> Self {
                    self
                }
            }
            impl HasDuration for $t {
                fn duration(&self) -> Duration {
                    Duration::zero()
                }
            }
            impl Splittable for $t {
                fn split(&self, _at: Duration) -> (Self, Self) {
                    (self.clone(), self.clone())
                }
            }
            impl Reversible for $t {
                fn rev(self) -> Self {
                    self
                }
            }
        )*
    };
}

timeless!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
);
