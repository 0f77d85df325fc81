//! Actual/Actual day count with a start-year basis.

use rust_decimal::Decimal;

use super::{ensure_ordered, DayCount};
use crate::error::CoreResult;
use crate::types::{Date, Frequency};

/// Actual/Actual day count using the start year's length as the basis.
///
/// The whole span is divided by 366 when the start date falls in a leap
/// year and by 365 otherwise. Unlike ACT/ACT ISDA the span is not split at
/// year boundaries.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual days}}{\text{Days in start year}}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActYear;

/// Conventional year length used for ACT/ACT coupon periods.
const NOMINAL_YEAR_DAYS: i64 = 365;

impl DayCount for ActActYear {
    fn name(&self) -> &'static str {
        "ACT/ACT"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<Decimal> {
        ensure_ordered(start, end)?;
        let days = self.day_count(start, end);
        Ok(Decimal::from(days) / Decimal::from(start.days_in_year()))
    }

    fn coupon_period(&self, frequency: Frequency) -> Decimal {
        Decimal::from(NOMINAL_YEAR_DAYS) / Decimal::from(frequency.periods_per_year())
    }
}
