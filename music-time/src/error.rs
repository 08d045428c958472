//! Errors of the time algebra.
//!
//! Every error is local: it is raised at the point of the invalid
//! operation and the caller decides what to do next.

use thiserror::Error;

use crate::primitives::{Duration, Span};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeError {
    /// Inverting (or compressing by) a zero-duration span.
    ///
    /// # Example
    /// ```
    /// # use music_time::{Span, Time, TimeError};
    /// let point = Span::from_onset_offset(Time::new(1, 1), Time::new(1, 1));
    /// assert!(matches!(point.inverse(), Err(TimeError::DegenerateSpan(_))));
    /// ```
    #[error("Span is degenerate and can not be inverted: {0}")]
    DegenerateSpan(Span),
    #[error("Expected a forward span, got: {0}")]
    NotForward(Span),
    #[error("Rational with zero denominator: {0}/0")]
    ZeroDenominator(i64),
    #[error("Rational is not finite: {0}")]
    NonFinite(String),
    #[error("Rational does not fit into an (i64, u64) pair: {0}")]
    PairOverflow(String),
    #[error("Quantization grid should be at least 1, got: {0}")]
    InvalidQuantization(u64),
    #[error("Duration can not be written as notated lengths: {0}")]
    NotNotatable(Duration),
    #[error("Voice is empty")]
    EmptyVoice,
}

pub type TimeResult<T> = Result<T, TimeError>;
