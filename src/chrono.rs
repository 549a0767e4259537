//! [`Temporal`] points on the absolute UTC timeline,
//! backed by the `chrono` crate.

use ::chrono::{DateTime, TimeDelta, Utc};

use crate::{step::NANOS_PER_SECOND, Step, Temporal, Unit};

/// Calendar units (months, years) have no fixed length on an absolute
/// timeline and are reported as unsupported; days and weeks advance by
/// their exact 24-hour and 7-day equivalents.
///
/// # Panics
///
/// [`advance`][Temporal::advance] panics if the step carries calendar
/// units or overflows the representable time range, as does `chrono`'s own
/// datetime arithmetic.
impl Temporal for DateTime<Utc> {
    type Duration = TimeDelta;

    fn since(&self, earlier: &Self) -> TimeDelta {
        *self - *earlier
    }

    fn plus(&self, duration: &TimeDelta) -> Self {
        *self + *duration
    }

    fn supports(&self, unit: Unit) -> bool {
        !unit.is_calendar()
    }

    fn advance(&self, step: &Step) -> Self {
        let nanos = step
            .exact_nanos()
            .expect("calendar units are not supported on the UTC timeline");

        let seconds = i64::try_from(nanos.div_euclid(NANOS_PER_SECOND))
            .expect("step overflows the UTC timeline");
        // the remainder is always within [0, 1e9)
        let subsec = nanos.rem_euclid(NANOS_PER_SECOND) as i64;

        *self + TimeDelta::seconds(seconds) + TimeDelta::nanoseconds(subsec)
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use alloc::vec::Vec;

    use ::chrono::TimeZone as _;

    use crate::{step, Interval};

    use super::*;

    fn utc(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 5, 9, hour, minute, 0).unwrap()
    }

    #[test]
    fn hourly_stepping_over_a_morning() {
        let window = Interval::new(utc(8, 0), utc(11, 0)).unwrap();

        let points: Vec<DateTime<Utc>> = window.steps(step!(1 hour)).unwrap().collect();
        assert_eq!(points, [utc(8, 0), utc(9, 0), utc(10, 0)]);
    }

    #[test]
    fn composite_stepping() {
        let window = Interval::new(utc(8, 0), utc(10, 0)).unwrap();

        let points: Vec<DateTime<Utc>> = window.steps(step!(45 minutes)).unwrap().collect();
        assert_eq!(points, [utc(8, 0), utc(8, 45), utc(9, 30)]);
    }

    #[test]
    fn day_stepping_over_a_week() {
        let start = Utc.with_ymd_and_hms(2016, 5, 9, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2016, 5, 16, 0, 0, 0).unwrap();
        let window = Interval::new(start, end).unwrap();

        let points: Vec<DateTime<Utc>> = window.steps(step!(1 day)).unwrap().collect();
        assert_eq!(points.len(), 7);
        assert_eq!(points[0], start);
        assert_eq!(points[6], Utc.with_ymd_and_hms(2016, 5, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn calendar_units_are_unsupported() {
        let window = Interval::new(utc(0, 0), utc(23, 0)).unwrap();

        let err = window.steps(step!(1 month)).unwrap_err();
        assert_eq!(err.unit(), Unit::Months);
        let err = window.steps(step!(1 year, 1 hour)).unwrap_err();
        assert_eq!(err.unit(), Unit::Years);
    }

    #[test]
    fn parse_rfc3339_interval() {
        let window: Interval<DateTime<Utc>> =
            Interval::parse("2016-05-09T08:00:00Z/2016-05-09T11:00:00Z").unwrap();

        assert_eq!(window.start(), &utc(8, 0));
        assert_eq!(window.duration(), TimeDelta::hours(3));
    }

    #[test]
    fn misordered_text_is_rejected() {
        let result: Result<Interval<DateTime<Utc>>, _> =
            Interval::parse("2016-05-09T11:00:00Z/2016-05-09T08:00:00Z");
        assert!(result.is_err());
    }

    #[test]
    fn span_of_a_morning() {
        let window = Interval::new(utc(8, 0), utc(10, 0)).unwrap();
        let span = window.to_span();

        assert_eq!(span.start(), &utc(8, 0));
        assert_eq!(span.duration(), &TimeDelta::hours(2));
        assert_eq!(span.to_interval().unwrap(), window);
    }

    #[test]
    fn from_duration_builds_the_same_window() {
        let window = Interval::from_duration(utc(8, 0), &TimeDelta::hours(3)).unwrap();
        assert_eq!(window, Interval::new(utc(8, 0), utc(11, 0)).unwrap());

        assert!(Interval::from_duration(utc(8, 0), &TimeDelta::hours(-1)).is_err());
    }
}
