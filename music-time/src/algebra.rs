//! Monoids of the crate.
//!
//! Each type picks exactly one operation as its monoid: `Duration`
//! multiplies, `Time` adds, `Span` composes, `TimeInterval` takes the hull,
//! containers concatenate or merge.

pub trait Monoid: Sized {
    fn empty() -> Self;
    fn combine(self, other: Self) -> Self;

    fn concat<I: IntoIterator<Item = Self>>(items: I) -> Self {
        items.into_iter().fold(Self::empty(), Self::combine)
    }
}
