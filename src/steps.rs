use core::{iter::FusedIterator, mem};

use crate::{Interval, Step, Temporal, UnsupportedUnitError};

impl<T: Temporal> Interval<T> {
    /// Lazily enumerate the points of `[start, end)` reached by repeatedly
    /// advancing the start by `step`.
    ///
    /// The first element is the start itself, so the sequence of a
    /// non-degenerate interval is never empty; a degenerate interval
    /// produces nothing. Each following element is the previous one moved
    /// forward by `step`, and generation stops for good the first time a
    /// candidate reaches the end.
    ///
    /// Every unit of the step is checked against the point type before the
    /// iterator is handed out: an unsupported unit fails here, never
    /// mid-iteration. Each call starts over with an independent iterator,
    /// and points are only computed as they are pulled.
    ///
    /// A zero or backwards step on a non-degenerate interval never reaches
    /// the end, so the resulting iterator is endless; whether a step
    /// actually moves a point forward depends on the point type, so no
    /// up-front check rules this out.
    ///
    /// ```
    /// use intervallum::{step, Interval};
    ///
    /// let hour = 3_600_000_000_000_i64; // nanosecond ticks
    /// let window = Interval::new(0, 3 * hour).unwrap();
    ///
    /// let points: Vec<i64> = window.steps(step!(1 hour)).unwrap().collect();
    /// assert_eq!(points, [0, hour, 2 * hour]);
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`UnsupportedUnitError`] naming the first step unit the
    /// point type does not support.
    pub fn steps(&self, step: Step) -> Result<Steps<T>, UnsupportedUnitError> {
        if let Some(unit) = step.units().find(|&unit| !self.start().supports(unit)) {
            return Err(UnsupportedUnitError::new(unit));
        }

        Ok(Steps {
            end: self.end().clone(),
            step,
            state: State::Ready(self.start().clone()),
        })
    }
}

#[derive(Debug, Clone)]
/// Lazy iterator over the stepped points of an interval,
/// created by [`Interval::steps`].
///
/// The produced values are distinct, strictly ascending and contained in
/// `[start, end)`. The iterator is single-pass and [fused]: once the
/// advanced candidate reaches the end, no further advancement is ever
/// attempted, which also keeps the point type away from its
/// representational limits.
///
/// [fused]: FusedIterator
pub struct Steps<T> {
    end: T,
    step: Step,
    state: State<T>,
}

#[derive(Debug, Clone)]
enum State<T> {
    /// Nothing produced yet; holds the interval start.
    Ready(T),
    /// Holds the last emitted point.
    Emitting(T),
    /// A candidate reached the end; nothing left to produce.
    Exhausted,
}

impl<T: Temporal> Iterator for Steps<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match mem::replace(&mut self.state, State::Exhausted) {
            State::Ready(start) => {
                // the start qualifies only on a non-degenerate interval
                if start < self.end {
                    self.state = State::Emitting(start.clone());
                    Some(start)
                } else {
                    None
                }
            }
            State::Emitting(previous) => {
                let candidate = previous.advance(&self.step);
                if candidate < self.end {
                    self.state = State::Emitting(candidate.clone());
                    Some(candidate)
                } else {
                    None
                }
            }
            State::Exhausted => None,
        }
    }
}

impl<T: Temporal> FusedIterator for Steps<T> {}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use alloc::vec::Vec;
    use core::cell::Cell;

    use crate::{step, Unit};

    use super::*;

    const HOUR: i64 = 3_600_000_000_000;

    #[test]
    fn hourly_points_stay_strictly_below_the_end() {
        let window = Interval::new(0, 3 * HOUR).unwrap();
        let points: Vec<i64> = window.steps(step!(1 hour)).unwrap().collect();
        assert_eq!(points, [0, HOUR, 2 * HOUR]);
    }

    #[test]
    fn oversized_step_still_yields_the_start() {
        let window = Interval::new(0_i64, 5).unwrap();
        let points: Vec<i64> = window.steps(step!(10 nanoseconds)).unwrap().collect();
        assert_eq!(points, [0]);
    }

    #[test]
    fn degenerate_interval_yields_nothing() {
        let window = Interval::new(42_i64, 42).unwrap();
        assert_eq!(window.steps(step!(1 nanosecond)).unwrap().next(), None);
        assert_eq!(window.steps(step!(5 hours)).unwrap().count(), 0);
    }

    #[test]
    fn composite_step_advances_by_its_total() {
        let window = Interval::new(0, 3 * HOUR).unwrap();
        let points: Vec<i64> = window.steps(step!(1 hour, 30 minutes)).unwrap().collect();
        assert_eq!(points, [0, HOUR + HOUR / 2]);
    }

    #[test]
    fn unsupported_unit_fails_before_any_element() {
        let window = Interval::new(0_i64, 5 * HOUR).unwrap();

        let err = window.steps(step!(1 month)).unwrap_err();
        assert_eq!(err.unit(), Unit::Months);

        // the supported component does not rescue the calendar one
        let err = window.steps(step!(1 hour, 2 years)).unwrap_err();
        assert_eq!(err.unit(), Unit::Years);
    }

    #[test]
    fn each_call_restarts_independently() {
        let window = Interval::new(0, 2 * HOUR).unwrap();

        let first: Vec<i64> = window.steps(step!(1 hour)).unwrap().collect();
        let second: Vec<i64> = window.steps(step!(1 hour)).unwrap().collect();
        assert_eq!(first, second);
        assert_eq!(first, [0, HOUR]);
    }

    /// A tick point that records how many times it was advanced.
    #[derive(Debug, Clone)]
    struct Counted<'a> {
        value: i64,
        advances: &'a Cell<usize>,
    }

    impl PartialEq for Counted<'_> {
        fn eq(&self, other: &Self) -> bool {
            self.value == other.value
        }
    }

    impl Eq for Counted<'_> {}

    impl PartialOrd for Counted<'_> {
        fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Counted<'_> {
        fn cmp(&self, other: &Self) -> core::cmp::Ordering {
            self.value.cmp(&other.value)
        }
    }

    impl Temporal for Counted<'_> {
        type Duration = i64;

        fn since(&self, earlier: &Self) -> i64 {
            self.value - earlier.value
        }

        fn plus(&self, duration: &i64) -> Self {
            Self {
                value: self.value + duration,
                advances: self.advances,
            }
        }

        fn supports(&self, unit: Unit) -> bool {
            !unit.is_calendar()
        }

        fn advance(&self, step: &Step) -> Self {
            self.advances.set(self.advances.get() + 1);
            self.plus(&(step.exact_nanos().expect("exact step") as i64))
        }
    }

    #[test]
    fn consuming_a_prefix_advances_no_further() {
        let advances = Cell::new(0);
        let point = |value| Counted {
            value,
            advances: &advances,
        };

        let window = Interval::new(point(0), point(1_000_000)).unwrap();
        let mut steps = window.steps(step!(1 nanosecond)).unwrap();

        assert_eq!(steps.next().map(|p| p.value), Some(0));
        assert_eq!(advances.get(), 0);

        assert_eq!(steps.next().map(|p| p.value), Some(1));
        assert_eq!(steps.next().map(|p| p.value), Some(2));
        assert_eq!(advances.get(), 2);
    }

    #[test]
    fn failed_precheck_never_advances() {
        let advances = Cell::new(0);
        let point = |value| Counted {
            value,
            advances: &advances,
        };

        let window = Interval::new(point(0), point(100)).unwrap();
        assert!(window.steps(step!(1 year)).is_err());
        assert_eq!(advances.get(), 0);
    }

    #[test]
    fn exhaustion_is_permanent_and_computes_nothing_more() {
        let advances = Cell::new(0);
        let point = |value| Counted {
            value,
            advances: &advances,
        };

        let window = Interval::new(point(0), point(5)).unwrap();
        let mut steps = window.steps(step!(2 nanoseconds)).unwrap();

        let produced: Vec<i64> = steps.by_ref().map(|p| p.value).collect();
        assert_eq!(produced, [0, 2, 4]);
        // two emitted advances plus the exhausting candidate
        assert_eq!(advances.get(), 3);

        assert!(steps.next().is_none());
        assert!(steps.next().is_none());
        assert_eq!(advances.get(), 3, "an exhausted iterator must not advance");
    }
}
