use core::{fmt, str::FromStr};

use crate::{Interval, Temporal};

impl<T: Temporal + fmt::Display> fmt::Display for Interval<T> {
    /// The canonical `"<start>/<end>"` form, round-trippable through
    /// [`Interval::parse`] as long as the point format is slash-free.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.start().fmt(f)?;
        f.write_str("/")?;
        self.end().fmt(f)
    }
}

impl<T: Temporal + FromStr> Interval<T> {
    /// Parse the canonical `"<start>/<end>"` form.
    ///
    /// The text is split at the first `/` scanning left to right; each half
    /// goes through the point type's [`FromStr`] and the pair then runs the
    /// full construction contract. A point format that itself contains `/`
    /// makes the split ambiguous and is out of scope.
    ///
    /// ```
    /// use intervallum::Interval;
    ///
    /// let interval: Interval<i64> = Interval::parse("5/10").unwrap();
    /// assert_eq!(interval, Interval::new(5, 10).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`IntervalParseError`] when the separator is missing,
    /// when either half is not a valid point representation, or when the
    /// parsed end lies before the parsed start. The error carries the
    /// original text and the byte position it refers to.
    pub fn parse(text: &str) -> Result<Self, IntervalParseError<'_, T::Err>> {
        let Some(separator) = text.find('/') else {
            return Err(IntervalParseError {
                text,
                position: 0,
                kind: ParseErrorKind::MissingSeparator,
            });
        };

        let start = text[..separator]
            .parse::<T>()
            .map_err(|source| IntervalParseError {
                text,
                position: 0,
                kind: ParseErrorKind::Point(source),
            })?;

        let end_at = separator + 1;
        let end = text[end_at..]
            .parse::<T>()
            .map_err(|source| IntervalParseError {
                text,
                position: end_at,
                kind: ParseErrorKind::Point(source),
            })?;

        // the text already shows both offending points, no need to keep them
        Self::new(start, end).map_err(|_| IntervalParseError {
            text,
            position: 0,
            kind: ParseErrorKind::Ordering,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The reason an interval failed to parse.
pub enum ParseErrorKind<E> {
    /// No `/` separator found in the text.
    MissingSeparator,
    /// One of the halves is not a valid point representation;
    /// wraps the point parser's error.
    Point(E),
    /// Both halves parsed, but the end lies before the start.
    Ordering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Failure to parse the textual `"<start>/<end>"` form.
///
/// Borrows the offending text and records the byte position the failure
/// refers to, so the caller can diagnose it without any further state.
pub struct IntervalParseError<'s, E> {
    text: &'s str,
    position: usize,
    kind: ParseErrorKind<E>,
}

impl<'s, E> IntervalParseError<'s, E> {
    /// The text that failed to parse.
    pub const fn text(&self) -> &'s str {
        self.text
    }

    /// The byte position the failure refers to.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// What went wrong.
    pub const fn kind(&self) -> &ParseErrorKind<E> {
        &self.kind
    }
}

impl<E: fmt::Display> fmt::Display for IntervalParseError<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::MissingSeparator => write!(
                f,
                "no forward slash found in {:?} at position {}",
                self.text, self.position
            ),
            ParseErrorKind::Point(source) => write!(
                f,
                "invalid point in {:?} at position {}: {}",
                self.text, self.position, source
            ),
            ParseErrorKind::Ordering => write!(f, "end is before start in {:?}", self.text),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for IntervalParseError<'_, E> {}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use alloc::string::ToString as _;

    use super::*;

    #[test]
    fn display_uses_the_slash_form() {
        let interval = Interval::new(5_i64, 10).unwrap();
        assert_eq!(interval.to_string(), "5/10");
    }

    #[test]
    fn parse_round_trips_the_display_form() {
        let interval = Interval::new(-7_i64, 3).unwrap();
        let parsed: Interval<i64> = Interval::parse(&interval.to_string()).unwrap();
        assert_eq!(parsed, interval);
    }

    #[test]
    fn missing_separator_reports_position_zero() {
        let err = Interval::<i64>::parse("no-slash-here").unwrap_err();
        assert_eq!(err.text(), "no-slash-here");
        assert_eq!(err.position(), 0);
        assert!(matches!(err.kind(), ParseErrorKind::MissingSeparator));
    }

    #[test]
    fn invalid_start_reports_position_zero() {
        let err = Interval::<i64>::parse("x/10").unwrap_err();
        assert_eq!(err.position(), 0);
        assert!(matches!(err.kind(), ParseErrorKind::Point(_)));
    }

    #[test]
    fn invalid_end_reports_its_offset() {
        let err = Interval::<i64>::parse("5/ten").unwrap_err();
        assert_eq!(err.position(), 2);
        assert!(matches!(err.kind(), ParseErrorKind::Point(_)));
    }

    #[test]
    fn empty_half_is_an_invalid_point() {
        let err = Interval::<i64>::parse("/5").unwrap_err();
        assert!(matches!(err.kind(), ParseErrorKind::Point(_)));
    }

    #[test]
    fn misordered_text_fails_the_construction_contract() {
        let err = Interval::<i64>::parse("10/5").unwrap_err();
        assert!(matches!(err.kind(), ParseErrorKind::Ordering));
        assert_eq!(err.text(), "10/5");
    }

    #[test]
    fn only_the_first_slash_separates() {
        // the remainder after the first slash is one (invalid) end point
        let err = Interval::<i64>::parse("1/2/3").unwrap_err();
        assert_eq!(err.position(), 2);
        assert!(matches!(err.kind(), ParseErrorKind::Point(_)));
    }
}

#[cfg(all(feature = "serde", test))]
mod serde_tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn interval_serializes_as_its_two_fields() {
        let interval = Interval::new(5_i64, 10).unwrap();
        let j = serde_json::to_value(interval).unwrap();
        assert_eq!(j, json!({ "start": 5, "end": 10 }));
    }

    #[test]
    fn interval_round_trips_through_json() {
        let interval = Interval::new(-3_i64, 44).unwrap();
        let j = serde_json::to_value(interval).unwrap();
        let back: Interval<i64> = serde_json::from_value(j).unwrap();
        assert_eq!(back, interval);
    }

    #[test]
    fn step_round_trips_through_json() {
        let step = crate::step!(1 hour, 30 minutes);
        let j = serde_json::to_value(step).unwrap();
        let back: crate::Step = serde_json::from_value(j).unwrap();
        assert_eq!(back, step);
    }

    #[test]
    fn span_round_trips_through_json() {
        let span = Interval::new(5_i64, 10).unwrap().to_span();
        let j = serde_json::to_value(span.clone()).unwrap();
        assert_eq!(j, json!({ "start": 5, "duration": 5 }));

        let back: crate::Span<i64> = serde_json::from_value(j).unwrap();
        assert_eq!(back, span);
    }
}
