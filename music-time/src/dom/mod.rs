//! Containers of music values.
//!
//! - [Voice] is sequential: notes follow each other.
//! - [Score] is parallel: events may overlap.
//! - [Track] is a line of events, which answers point queries.
//! - [Reactive] is a step function of time.

pub mod reactive;
pub mod score;
pub mod track;
pub mod voice;

pub use reactive::Reactive;
pub use score::Score;
pub use track::Track;
pub use voice::Voice;
