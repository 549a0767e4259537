use crate::{Interval, InvalidOrderingError, Temporal};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize, T::Duration: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>, T::Duration: serde::Deserialize<'de>"
    ))
)]
/// A `(start, duration)` view of an interval.
///
/// Derived one-way from [`Interval::to_span`], where the duration is
/// definitionally non-negative and no re-validation takes place. A span
/// assembled by hand may carry a negative duration;
/// [`to_interval`][Self::to_interval] runs the full construction contract
/// and rejects it.
pub struct Span<T: Temporal> {
    start: T,
    duration: T::Duration,
}

impl<T: Temporal> Span<T> {
    /// Assemble a span from a start point and an elapsed amount.
    pub const fn new(start: T, duration: T::Duration) -> Self {
        Self { start, duration }
    }

    /// The start point.
    pub const fn start(&self) -> &T {
        &self.start
    }

    /// The covered elapsed amount.
    pub const fn duration(&self) -> &T::Duration {
        &self.duration
    }

    /// Split the span back into its parts.
    pub fn into_parts(self) -> (T, T::Duration) {
        (self.start, self.duration)
    }

    /// Convert back to the equivalent `[start, start + duration)` interval.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidOrderingError`] when the duration is negative.
    pub fn to_interval(&self) -> Result<Interval<T>, InvalidOrderingError<T>> {
        Interval::from_duration(self.start.clone(), &self.duration)
    }
}
