//! Elements, from which all music values are measured.
//!
//! At the bottom lies the exact rational (see [fraction_tools]).
//! `Duration` is a vector of time, `Time` is a point, `Span` is an
//! interval of points, and at the same time an affine transformation
//! (delay + stretch), which can be applied to everything `Transformable`.
//!
//! Then values are glued to time: `Note` carries a duration,
//! `Event` carries a span.

/// Owned and mixed operands of a binary operator, forwarded to its
/// `&lhs op &rhs` implementation.
macro_rules! forward_binop {
    (impl $op_trait:ident<$rhs:ty> for $lhs:ty, $op:ident -> $out:ty) => {
        impl std::ops::$op_trait<$rhs> for $lhs {
            type Output = $out;
            fn $op(self, rhs: $rhs) -> $out {
                std::ops::$op_trait::$op(&self, &rhs)
            }
        }
        impl std::ops::$op_trait<&$rhs> for $lhs {
            type Output = $out;
            fn $op(self, rhs: &$rhs) -> $out {
                std::ops::$op_trait::$op(&self, rhs)
            }
        }
        impl std::ops::$op_trait<$rhs> for &$lhs {
            type Output = $out;
            fn $op(self, rhs: $rhs) -> $out {
                std::ops::$op_trait::$op(self, &rhs)
            }
        }
    };
}

pub mod duration;
pub mod event;
pub mod fraction_tools;
pub mod note;
pub mod span;
pub mod time;

pub use duration::Duration;
pub use event::Event;
pub use fraction_tools::{limit_denominator, normalize_fraction};
pub use note::Note;
pub use span::{Span, TimeInterval};
pub use time::Time;

/// Default quantization grid (1/128 of the whole note).
pub const LIMIT_DENOMINATOR: u64 = 128;
