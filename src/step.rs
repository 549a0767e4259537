use core::{fmt, ops::Add};

pub(crate) const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i128 = 24 * NANOS_PER_HOUR;
const NANOS_PER_WEEK: i128 = 7 * NANOS_PER_DAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
/// A unit of timeline advancement, ordered by significance.
pub enum Unit {
    /// The finest exact unit.
    Nanoseconds,
    Seconds,
    Minutes,
    Hours,
    /// An exact 24-hour day.
    Days,
    /// An exact 7-day week.
    Weeks,
    /// A calendar month; has no fixed length on a continuous timeline.
    Months,
    /// A calendar year; has no fixed length on a continuous timeline.
    Years,
}

impl Unit {
    /// Whether the unit only makes sense with a calendar attached.
    ///
    /// Pure-instant point types reject these in
    /// [`Temporal::supports`][crate::Temporal::supports].
    pub const fn is_calendar(self) -> bool {
        matches!(self, Self::Months | Self::Years)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nanoseconds => "nanoseconds",
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// An amount composed of one or more [`Unit`] components, used to advance
/// a timeline point.
///
/// Components are kept separate rather than normalized away, so a step can
/// be [decomposed][Self::units] into exactly the units it was built from.
/// Steps combine component-wise with `+`, or through the
/// [`step!`][crate::step] macro:
///
/// ```
/// use intervallum::{step, Step, Unit};
///
/// let s = Step::hours(1) + Step::minutes(30);
/// assert_eq!(s, step!(1 hour, 30 minutes));
/// assert_eq!(s.units().collect::<Vec<_>>(), [Unit::Hours, Unit::Minutes]);
/// ```
pub struct Step {
    years: i64,
    months: i64,
    weeks: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    nanos: i64,
}

impl Step {
    /// The step advancing nothing.
    pub const fn zero() -> Self {
        Self {
            years: 0,
            months: 0,
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            nanos: 0,
        }
    }

    /// A whole number of calendar years.
    pub const fn years(years: i64) -> Self {
        Self { years, ..Self::zero() }
    }

    /// A whole number of calendar months.
    pub const fn months(months: i64) -> Self {
        Self { months, ..Self::zero() }
    }

    /// A whole number of exact 7-day weeks.
    pub const fn weeks(weeks: i64) -> Self {
        Self { weeks, ..Self::zero() }
    }

    /// A whole number of exact 24-hour days.
    pub const fn days(days: i64) -> Self {
        Self { days, ..Self::zero() }
    }

    /// A whole number of hours.
    pub const fn hours(hours: i64) -> Self {
        Self { hours, ..Self::zero() }
    }

    /// A whole number of minutes.
    pub const fn minutes(minutes: i64) -> Self {
        Self { minutes, ..Self::zero() }
    }

    /// A whole number of seconds.
    pub const fn seconds(seconds: i64) -> Self {
        Self { seconds, ..Self::zero() }
    }

    /// A whole number of nanoseconds.
    pub const fn nanoseconds(nanos: i64) -> Self {
        Self { nanos, ..Self::zero() }
    }

    /// The constituent units of this step, most significant first.
    ///
    /// Only units with a non-zero component are reported.
    pub fn units(&self) -> impl Iterator<Item = Unit> {
        [
            (Unit::Years, self.years),
            (Unit::Months, self.months),
            (Unit::Weeks, self.weeks),
            (Unit::Days, self.days),
            (Unit::Hours, self.hours),
            (Unit::Minutes, self.minutes),
            (Unit::Seconds, self.seconds),
            (Unit::Nanoseconds, self.nanos),
        ]
        .into_iter()
        .filter_map(|(unit, component)| (component != 0).then_some(unit))
    }

    /// Whether every component is zero.
    pub fn is_zero(&self) -> bool {
        self.units().next().is_none()
    }

    /// The total length in nanoseconds, if the step has no calendar
    /// components.
    ///
    /// Calendar units have no exact nanosecond equivalent, so a step with
    /// a non-zero months or years component yields `None`. This is the
    /// building block for [`Temporal`][crate::Temporal] implementations
    /// whose timeline is a fixed-rate tick stream.
    pub fn exact_nanos(&self) -> Option<i128> {
        if self.years != 0 || self.months != 0 {
            return None;
        }

        Some(
            i128::from(self.nanos)
                + i128::from(self.seconds) * NANOS_PER_SECOND
                + i128::from(self.minutes) * NANOS_PER_MINUTE
                + i128::from(self.hours) * NANOS_PER_HOUR
                + i128::from(self.days) * NANOS_PER_DAY
                + i128::from(self.weeks) * NANOS_PER_WEEK,
        )
    }

    /// The calendar years component.
    pub const fn num_years(&self) -> i64 {
        self.years
    }

    /// The calendar months component.
    pub const fn num_months(&self) -> i64 {
        self.months
    }

    /// The weeks component.
    pub const fn num_weeks(&self) -> i64 {
        self.weeks
    }

    /// The days component.
    pub const fn num_days(&self) -> i64 {
        self.days
    }

    /// The hours component.
    pub const fn num_hours(&self) -> i64 {
        self.hours
    }

    /// The minutes component.
    pub const fn num_minutes(&self) -> i64 {
        self.minutes
    }

    /// The seconds component.
    pub const fn num_seconds(&self) -> i64 {
        self.seconds
    }

    /// The nanoseconds component.
    pub const fn num_nanoseconds(&self) -> i64 {
        self.nanos
    }
}

impl Add for Step {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            years: self.years + rhs.years,
            months: self.months + rhs.months,
            weeks: self.weeks + rhs.weeks,
            days: self.days + rhs.days,
            hours: self.hours + rhs.hours,
            minutes: self.minutes + rhs.minutes,
            seconds: self.seconds + rhs.seconds,
            nanos: self.nanos + rhs.nanos,
        }
    }
}

#[macro_export]
/// Create a [`Step`] using a concise syntax.
///
/// ```
/// use intervallum::{step, Step};
///
/// assert_eq!(step!(1 hour), Step::hours(1));
/// assert_eq!(step!(2 weeks, 3 days), Step::weeks(2) + Step::days(3));
/// assert_eq!(step!(90 minutes), Step::minutes(90));
/// ```
macro_rules! step {
    ($($n:literal $unit:ident),+ $(,)?) => {
        $crate::Step::zero() $(+ $crate::step!(@one $unit $n))+
    };
    (@one year $n:expr) => { $crate::Step::years($n) };
    (@one years $n:expr) => { $crate::Step::years($n) };
    (@one month $n:expr) => { $crate::Step::months($n) };
    (@one months $n:expr) => { $crate::Step::months($n) };
    (@one week $n:expr) => { $crate::Step::weeks($n) };
    (@one weeks $n:expr) => { $crate::Step::weeks($n) };
    (@one day $n:expr) => { $crate::Step::days($n) };
    (@one days $n:expr) => { $crate::Step::days($n) };
    (@one hour $n:expr) => { $crate::Step::hours($n) };
    (@one hours $n:expr) => { $crate::Step::hours($n) };
    (@one minute $n:expr) => { $crate::Step::minutes($n) };
    (@one minutes $n:expr) => { $crate::Step::minutes($n) };
    (@one second $n:expr) => { $crate::Step::seconds($n) };
    (@one seconds $n:expr) => { $crate::Step::seconds($n) };
    (@one nanosecond $n:expr) => { $crate::Step::nanoseconds($n) };
    (@one nanoseconds $n:expr) => { $crate::Step::nanoseconds($n) };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The error raised when a step carries a unit the interval's point type
/// cannot honor.
///
/// Raised eagerly by [`Interval::steps`][crate::Interval::steps], before
/// any sequence element is produced.
pub struct UnsupportedUnitError {
    unit: Unit,
}

impl UnsupportedUnitError {
    pub(crate) const fn new(unit: Unit) -> Self {
        Self { unit }
    }

    /// The offending unit.
    pub const fn unit(&self) -> Unit {
        self.unit
    }
}

impl fmt::Display for UnsupportedUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported step unit: {}", self.unit)
    }
}

impl core::error::Error for UnsupportedUnitError {}
