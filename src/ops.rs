use core::ops::{Bound, Range, RangeBounds};

use crate::{Interval, InvalidOrderingError, Temporal};

impl<T: Temporal> TryFrom<Range<T>> for Interval<T> {
    type Error = InvalidOrderingError<T>;

    /// A `start..end` range is already the half-open shape; only the
    /// ordering invariant needs checking.
    fn try_from(Range { start, end }: Range<T>) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl<T: Temporal> From<Interval<T>> for Range<T> {
    fn from(interval: Interval<T>) -> Self {
        let (start, end) = interval.into_parts();
        start..end
    }
}

impl<T: Temporal> RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(self.start())
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Excluded(self.end())
    }
}
