use core::fmt;

use crate::{Span, Temporal};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// An immutable half-open interval `[start, end)` on a continuous timeline.
///
/// The ordering invariant `start <= end` is established at construction and
/// can never be broken afterwards: the fields are private and no mutating
/// operation exists. The degenerate case `start == end` is a valid,
/// zero-duration interval.
///
/// Plain value semantics throughout; duplicating an interval is always safe.
///
/// The serde representation is a passive mirror of the two fields and does
/// not re-run validation on deserialization.
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T: Temporal> Interval<T> {
    /// Build an interval from an already ordered pair of points.
    pub(crate) fn from_ordered(start: T, end: T) -> Self {
        debug_assert!(start <= end, "ordering invariant violated");
        Self { start, end }
    }

    /// Create the interval `[start, end)`.
    ///
    /// ```
    /// use intervallum::Interval;
    ///
    /// let window = Interval::new(5_i64, 10).unwrap();
    /// assert_eq!(window.start(), &5);
    /// assert_eq!(window.end(), &10);
    ///
    /// assert!(Interval::new(10_i64, 5).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidOrderingError`] when `end < start`; the error
    /// gives both points back.
    pub fn new(start: T, end: T) -> Result<Self, InvalidOrderingError<T>> {
        if end < start {
            Err(InvalidOrderingError { start, end })
        } else {
            Ok(Self { start, end })
        }
    }

    /// Create the interval starting at `start` and covering `duration`.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidOrderingError`] when the duration is negative,
    /// i.e. when the computed end lies before the start.
    pub fn from_duration(start: T, duration: &T::Duration) -> Result<Self, InvalidOrderingError<T>> {
        let end = start.plus(duration);
        Self::new(start, end)
    }

    /// Take over any interval-shaped value.
    ///
    /// A value that is already an [`Interval`] is passed through unchanged,
    /// with no re-validation. Foreign [`IntervalLike`] implementations go
    /// through the full construction contract instead, since nothing
    /// guarantees they enforce the ordering invariant themselves.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidOrderingError`] when a foreign value carries an
    /// end lying before its start.
    pub fn adopt<I>(other: &I) -> Result<Self, InvalidOrderingError<T>>
    where
        I: IntervalLike<T> + ?Sized,
    {
        other.to_interval()
    }

    /// The inclusive lower endpoint.
    pub const fn start(&self) -> &T {
        &self.start
    }

    /// The exclusive upper endpoint.
    pub const fn end(&self) -> &T {
        &self.end
    }

    /// Split the interval back into its endpoints.
    pub fn into_parts(self) -> (T, T) {
        (self.start, self.end)
    }

    /// The elapsed amount between start and end, never negative.
    pub fn duration(&self) -> T::Duration {
        self.end.since(&self.start)
    }

    /// Whether the interval is the zero-duration `[p, p)` case.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Project the interval onto its `(start, duration)` form.
    pub fn to_span(&self) -> Span<T> {
        Span::new(self.start.clone(), self.duration())
    }

    /// Whether the point lies within `[start, end)`.
    ///
    /// A degenerate interval contains no point at all, its own start
    /// included.
    pub fn contains(&self, point: &T) -> bool {
        &self.start <= point && point < &self.end
    }

    /// Whether the two intervals share at least one point.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies completely within this interval.
    pub fn encloses(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Read access to an interval-shaped value.
///
/// The blanket [`to_interval`][Self::to_interval] conversion re-validates
/// the ordering invariant, since a foreign implementation may not enforce
/// it; [`Interval`] overrides it with a plain pass-through.
pub trait IntervalLike<T: Temporal> {
    /// The inclusive lower endpoint.
    fn start(&self) -> &T;

    /// The exclusive upper endpoint.
    fn end(&self) -> &T;

    /// Build a validated [`Interval`] out of this value.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidOrderingError`] when the end lies before the
    /// start.
    fn to_interval(&self) -> Result<Interval<T>, InvalidOrderingError<T>> {
        Interval::new(self.start().clone(), self.end().clone())
    }
}

impl<T: Temporal> IntervalLike<T> for Interval<T> {
    fn start(&self) -> &T {
        &self.start
    }

    fn end(&self) -> &T {
        &self.end
    }

    // the invariant is known to hold, skip the reconstruction
    fn to_interval(&self) -> Result<Interval<T>, InvalidOrderingError<T>> {
        Ok(self.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The construction error indicating that the end lies before the start.
///
/// Carries both offending points and gives them back through
/// [`into_parts`][Self::into_parts].
pub struct InvalidOrderingError<T> {
    start: T,
    end: T,
}

impl<T> InvalidOrderingError<T> {
    /// The rejected start point.
    pub const fn start(&self) -> &T {
        &self.start
    }

    /// The rejected end point.
    pub const fn end(&self) -> &T {
        &self.end
    }

    /// Recover the rejected pair of points.
    pub fn into_parts(self) -> (T, T) {
        (self.start, self.end)
    }
}

impl<T: fmt::Display> fmt::Display for InvalidOrderingError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "end {} is before start {}", self.end, self.start)
    }
}

impl<T: fmt::Debug + fmt::Display> core::error::Error for InvalidOrderingError<T> {}
