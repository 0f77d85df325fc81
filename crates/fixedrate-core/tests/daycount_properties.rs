//! Property-based tests for day count invariants.
//!
//! - Year fractions are non-negative for ordered dates and fail otherwise
//! - A regular coupon period is exactly one period under 30/360
//! - Month stepping lands on the same day of month when it exists

use fixedrate_core::daycounts::{ActActYear, DayCount, DayCountConvention, Thirty360};
use fixedrate_core::types::{Date, Frequency};
use fixedrate_core::CoreError;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn any_date() -> impl Strategy<Value = Date> {
    (1990i32..2080, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| Date::from_ymd(y, m, d).unwrap())
}

fn any_frequency() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::Annual),
        Just(Frequency::SemiAnnual),
        Just(Frequency::Quarterly),
        Just(Frequency::Monthly),
    ]
}

proptest! {
    #[test]
    fn year_fraction_sign_follows_date_order(a in any_date(), b in any_date()) {
        for convention in DayCountConvention::all() {
            let result = convention.year_fraction(a, b);
            if b < a {
                let is_order_error = matches!(result, Err(CoreError::InvalidDateOrder { .. }));
                prop_assert!(is_order_error);
            } else {
                prop_assert!(result.unwrap() >= Decimal::ZERO);
            }
        }
    }

    #[test]
    fn regular_thirty360_period_is_one(start in any_date(), freq in any_frequency()) {
        let end = start.add_months(freq.months_per_period() as i32).unwrap();
        let fraction = Thirty360.period_fraction(start, end, freq).unwrap();
        prop_assert_eq!(fraction, Decimal::ONE);
    }

    #[test]
    fn actact_year_fraction_uses_start_year(start in any_date(), days in 0i64..2000) {
        let end = start.add_days(days);
        let expected = Decimal::from(days) / Decimal::from(start.days_in_year());
        prop_assert_eq!(ActActYear.year_fraction(start, end).unwrap(), expected);
    }

    #[test]
    fn month_steps_keep_day_of_month(start in any_date(), months in -240i32..240) {
        let stepped = start.add_months(months).unwrap();
        prop_assert_eq!(stepped.day(), start.day());
        prop_assert_eq!(start.months_between(&stepped), months);
    }
}

#[test]
fn thirty360_reference_values() {
    let cases = [
        ("2024-01-31", "2024-02-28", 28),
        ("2024-01-31", "2024-03-31", 60),
        ("2024-01-01", "2027-01-01", 1080),
        ("2024-02-29", "2024-08-31", 182),
    ];

    for (start, end, expected) in cases {
        let start = Date::parse(start).unwrap();
        let end = Date::parse(end).unwrap();
        assert_eq!(Thirty360.day_count(start, end), expected, "{start} -> {end}");
    }
}
