//! Coupon payment schedule generation.
//!
//! Payment dates are generated backward from maturity in whole coupon
//! periods. Every date is derived from maturity directly
//! (`maturity - k * months_per_period`), so month-end clamping in one
//! period never shifts the dates before it.
//!
//! When the span from issue to maturity is not a whole number of periods
//! the first period is short (a front stub), and the first coupon is
//! prorated by the bond.
//!
//! # Example
//!
//! ```rust
//! use fixedrate_bonds::cashflows::Schedule;
//! use fixedrate_core::types::{Date, Frequency};
//!
//! let schedule = Schedule::generate(
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     Date::from_ymd(2027, 1, 1).unwrap(),
//!     Frequency::SemiAnnual,
//! )
//! .unwrap();
//!
//! assert_eq!(schedule.len(), 6);
//! assert_eq!(schedule.last(), Some(Date::from_ymd(2027, 1, 1).unwrap()));
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use fixedrate_core::types::{Date, Frequency};
use fixedrate_core::CoreError;

use crate::error::BondResult;

/// Ordered coupon payment dates of a bond.
///
/// Dates are strictly after the issue date, ascending, and the last one is
/// the maturity date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    issue_date: Date,
    frequency: Frequency,
    dates: Vec<Date>,
}

impl Schedule {
    /// Generates the payment schedule between `issue_date` (exclusive) and
    /// `maturity_date` (inclusive).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDateOrder` if maturity is not after issue.
    pub fn generate(issue_date: Date, maturity_date: Date, frequency: Frequency) -> BondResult<Self> {
        if maturity_date <= issue_date {
            return Err(CoreError::invalid_date_order(issue_date, maturity_date).into());
        }

        let step = frequency.months_per_period() as i32;
        let mut dates = Vec::new();
        let mut periods_back = 0;

        loop {
            let date = maturity_date.add_months(-periods_back * step)?;
            if date <= issue_date {
                break;
            }
            dates.push(date);
            periods_back += 1;
        }

        dates.reverse();

        debug!(
            "generated {} {} payment dates from {} to {}",
            dates.len(),
            frequency,
            issue_date,
            maturity_date
        );

        Ok(Self {
            issue_date,
            frequency,
            dates,
        })
    }

    /// Returns the payment dates in ascending order.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the number of payment dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the schedule has no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// First payment date.
    #[must_use]
    pub fn first(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// Last payment date (the maturity date).
    #[must_use]
    pub fn last(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// The issue date the schedule was generated from.
    #[must_use]
    pub fn issue_date(&self) -> Date {
        self.issue_date
    }

    /// The payment frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns true if the first period is shorter than a full coupon period.
    #[must_use]
    pub fn has_front_stub(&self) -> bool {
        let Some(first) = self.first() else {
            return false;
        };
        let step = self.frequency.months_per_period() as i32;
        match first.add_months(-step) {
            Ok(regular_start) => regular_start != self.issue_date,
            Err(_) => true,
        }
    }

    /// Iterates over `(period_index, date)` pairs, with 1-based indices.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Date)> + '_ {
        self.dates
            .iter()
            .enumerate()
            .map(|(i, date)| (i as u32 + 1, *date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_semi_annual_schedule() {
        let schedule =
            Schedule::generate(date(2024, 1, 1), date(2027, 1, 1), Frequency::SemiAnnual).unwrap();

        assert_eq!(schedule.len(), 6);
        assert_eq!(schedule.first(), Some(date(2024, 7, 1)));
        assert_eq!(schedule.last(), Some(date(2027, 1, 1)));
        assert!(!schedule.has_front_stub());
    }

    #[test]
    fn test_dates_ascending() {
        let schedule =
            Schedule::generate(date(2020, 3, 15), date(2025, 3, 15), Frequency::Quarterly).unwrap();

        assert_eq!(schedule.len(), 20);
        assert!(schedule.dates().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_front_stub() {
        // Issue two months before a regular coupon date
        let schedule =
            Schedule::generate(date(2024, 5, 1), date(2026, 7, 1), Frequency::SemiAnnual).unwrap();

        assert_eq!(schedule.first(), Some(date(2024, 7, 1)));
        assert_eq!(schedule.len(), 5);
        assert!(schedule.has_front_stub());
    }

    #[test]
    fn test_month_end_maturity_does_not_drift() {
        let schedule =
            Schedule::generate(date(2023, 8, 31), date(2025, 8, 31), Frequency::Quarterly).unwrap();

        assert_eq!(
            schedule.dates(),
            &[
                date(2023, 11, 30),
                date(2024, 2, 29),
                date(2024, 5, 31),
                date(2024, 8, 31),
                date(2024, 11, 30),
                date(2025, 2, 28),
                date(2025, 5, 31),
                date(2025, 8, 31),
            ]
        );
    }

    #[test]
    fn test_short_bond_single_payment() {
        let schedule =
            Schedule::generate(date(2024, 1, 1), date(2024, 3, 1), Frequency::Annual).unwrap();

        assert_eq!(schedule.dates(), &[date(2024, 3, 1)]);
        assert!(schedule.has_front_stub());
    }

    #[test]
    fn test_invalid_order() {
        let result = Schedule::generate(date(2027, 1, 1), date(2024, 1, 1), Frequency::Annual);
        assert!(result.is_err());

        let same = Schedule::generate(date(2024, 1, 1), date(2024, 1, 1), Frequency::Annual);
        assert!(same.is_err());
    }

    #[test]
    fn test_iter_indices() {
        let schedule =
            Schedule::generate(date(2024, 1, 1), date(2026, 1, 1), Frequency::Annual).unwrap();
        let indexed: Vec<_> = schedule.iter().collect();

        assert_eq!(indexed, vec![(1, date(2025, 1, 1)), (2, date(2026, 1, 1))]);
    }
}
