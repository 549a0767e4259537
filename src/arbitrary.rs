use proptest::prelude::*;

use super::{Interval, Step, Temporal};

impl<T> Arbitrary for Interval<T>
where
    T: Temporal + Arbitrary + 'static,
    T::Parameters: Clone,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        (any_with::<T>(args.clone()), any_with::<T>(args))
            .prop_map(|(a, b)| {
                // order the endpoints instead of discarding half the cases
                if b < a {
                    Self::from_ordered(b, a)
                } else {
                    Self::from_ordered(a, b)
                }
            })
            .boxed()
    }
}

impl Arbitrary for Step {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        let component = || any::<i16>().prop_map(i64::from);
        (
            component(),
            component(),
            component(),
            component(),
            component(),
            component(),
            component(),
            component(),
        )
            .prop_map(
                |(years, months, weeks, days, hours, minutes, seconds, nanos)| {
                    Self::years(years)
                        + Self::months(months)
                        + Self::weeks(weeks)
                        + Self::days(days)
                        + Self::hours(hours)
                        + Self::minutes(minutes)
                        + Self::seconds(seconds)
                        + Self::nanoseconds(nanos)
                },
            )
            .boxed()
    }
}
