use core::fmt::Debug;

use crate::{Step, Unit};

/// A point on a continuous timeline.
///
/// The type is opaque to the rest of the crate: all that is required is a
/// total order, a notion of the elapsed amount between two points, and the
/// ability to move a point forward. Textual capabilities are requested
/// separately through the usual [`FromStr`][core::str::FromStr] and
/// [`Display`][core::fmt::Display] bounds where parsing or formatting
/// actually happens.
///
/// Implementations must be pure: comparison and advancement may not touch
/// shared state, so that independent [`Steps`][crate::Steps] instances can
/// be driven from any number of threads.
pub trait Temporal: Clone + Ord {
    /// The elapsed amount between two points of this type.
    type Duration: Clone + PartialEq + Debug;

    /// The amount of time elapsed since `earlier`.
    ///
    /// Negative when `earlier` actually lies after `self`.
    fn since(&self, earlier: &Self) -> Self::Duration;

    /// Move the point forward by the given elapsed amount.
    fn plus(&self, duration: &Self::Duration) -> Self;

    /// Whether advancing this point type by the given unit is meaningful.
    ///
    /// A pure-instant point has no calendar, so it typically rejects
    /// [calendar units][Unit::is_calendar]. The predicate must be
    /// answerable without performing any addition.
    fn supports(&self, unit: Unit) -> bool;

    /// Move the point forward by the given step.
    ///
    /// Callers are expected to check every [unit][Step::units] of the step
    /// with [`supports`][Self::supports] beforehand; implementations are
    /// free to panic when handed a unit they reported as unsupported.
    fn advance(&self, step: &Step) -> Self;
}

/// Nanosecond ticks on an abstract timeline.
///
/// The simplest possible [`Temporal`] point: a tick is one nanosecond and
/// the elapsed amount between two points is their difference in ticks.
/// The elapsed amount is a widened `i128`, so the difference of any two
/// ticks is representable, including across the whole tick range.
/// Exact time units (nanoseconds up to weeks) are supported; calendar
/// units are not, as a bare tick counter has no calendar.
///
/// # Panics
///
/// [`plus`][Temporal::plus] panics if the moved point falls outside the
/// tick range; [`advance`][Temporal::advance] additionally panics if the
/// step carries calendar units.
impl Temporal for i64 {
    type Duration = i128;

    fn since(&self, earlier: &Self) -> Self::Duration {
        i128::from(*self) - i128::from(*earlier)
    }

    fn plus(&self, duration: &Self::Duration) -> Self {
        i64::try_from(i128::from(*self) + duration).expect("point leaves the tick timeline")
    }

    fn supports(&self, unit: Unit) -> bool {
        !unit.is_calendar()
    }

    fn advance(&self, step: &Step) -> Self {
        let nanos = step
            .exact_nanos()
            .expect("calendar units are not supported on a tick timeline");
        self.plus(&nanos)
    }
}
