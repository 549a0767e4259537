//! Half-open intervals anchored on a continuous timeline.
//!
//! An [`Interval`] is a validated, immutable `[start, end)` pair of
//! [`Temporal`] points. From it derive a [`Span`] (start plus duration)
//! and a lazy, strictly ascending sequence of stepped points
//! ([`Interval::steps`]).
//!
//! ```
//! use intervallum::{step, Interval};
//!
//! // a three-hour window on a nanosecond tick timeline
//! let hour = 3_600_000_000_000_i64;
//! let window = Interval::new(0, 3 * hour)?;
//!
//! let points: Vec<i64> = window.steps(step!(1 hour))?.collect();
//! assert_eq!(points, [0, hour, 2 * hour]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Any totally ordered point type can sit on the timeline by implementing
//! [`Temporal`]; the `chrono` feature (on by default) provides it for
//! `chrono::DateTime<Utc>`.
#![no_std]

#[cfg(feature = "arbitrary")]
mod arbitrary;
#[cfg(feature = "chrono")]
mod chrono;
mod interval;
mod ops;
mod span;
mod step;
mod steps;
mod str;
mod temporal;

pub use self::{
    interval::{Interval, IntervalLike, InvalidOrderingError},
    span::Span,
    step::{Step, Unit, UnsupportedUnitError},
    steps::Steps,
    str::{IntervalParseError, ParseErrorKind},
    temporal::Temporal,
};
