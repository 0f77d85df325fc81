//! 30/360 day count convention.

use rust_decimal::Decimal;

use super::{ensure_ordered, DayCount};
use crate::error::CoreResult;
use crate::types::{Date, Frequency};

/// Days in a 30/360 year.
const YEAR_DAYS: i64 = 360;

/// 30/360 day count convention (bond basis).
///
/// # Rules
///
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31 AND D1 is now 30, change D2 to 30
///
/// There is no February end-of-month adjustment.
///
/// # Formula
///
/// $$\text{Days} = 360 \times (Y_2 - Y_1) + 30 \times (M_2 - M_1) + (D_2 - D_1)$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360;

impl DayCount for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = start.year() as i64;
        let y2 = end.year() as i64;
        let m1 = start.month() as i64;
        let m2 = end.month() as i64;
        let mut d1 = start.day() as i64;
        let mut d2 = end.day() as i64;

        if d1 == 31 {
            d1 = 30;
        }
        if d2 == 31 && d1 == 30 {
            d2 = 30;
        }

        YEAR_DAYS * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }

    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<Decimal> {
        ensure_ordered(start, end)?;
        let days = self.day_count(start, end);
        Ok(Decimal::from(days) / Decimal::from(YEAR_DAYS))
    }

    fn coupon_period(&self, frequency: Frequency) -> Decimal {
        Decimal::from(YEAR_DAYS) / Decimal::from(frequency.periods_per_year())
    }
}
