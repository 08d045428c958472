//! Exact musical time.
//!
//! All positions and lengths are exact rationals: nothing is rounded
//! unless explicitly asked to ([Duration::quantize]).
//!
//! - [primitives]: `Duration`, `Time`, `Span` and values glued to them
//!   (`Note`, `Event`).
//! - [transform]: capabilities of timed values: transform, split, reverse.
//! - [dom]: containers: `Voice`, `Score`, `Track`, `Reactive`.
//! - [notation]: tagged values and access to their tags.
//!
//! ```
//! use music_time::{Duration, HasDuration, Note, Splittable, Transformable, Voice};
//!
//! let melody = Voice::from_pairs([
//!     (Duration::new(1, 4), 60),
//!     (Duration::new(1, 4), 62),
//!     (Duration::new(1, 2), 64),
//! ]);
//! let slow = melody.clone().stretch(Duration::from_integer(2));
//! assert_eq!(slow.duration(), Duration::from_integer(2));
//!
//! // a whole melody can be a value of the note
//! let phrase = Note::new(Duration::from_integer(3), melody);
//! let (head, tail) = phrase.split(Duration::from_integer(1));
//! assert_eq!(head.duration() + tail.duration(), phrase.duration());
//! ```

pub mod algebra;
pub mod dom;
pub mod error;
pub mod notation;
pub mod primitives;
pub mod transform;

pub use algebra::Monoid;
pub use dom::{Reactive, Score, Track, Voice};
pub use error::{TimeError, TimeResult};
pub use notation::{HasTag, Tagged};
pub use primitives::{
    Duration, Event, Note, Span, Time, TimeInterval, LIMIT_DENOMINATOR,
};
pub use transform::{
    HasDuration, HasPosition, Reversible, Splittable, Transformable,
};
