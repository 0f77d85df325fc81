//! Day count conventions for coupon accrual.
//!
//! A day count convention turns a calendar span into a fraction of a year
//! and defines the nominal length of a coupon period. The ratio of the two
//! is used to prorate an irregular first coupon.
//!
//! # Supported Conventions
//!
//! - [`ActActYear`]: Actual days over 365 or 366, chosen by the start year
//! - [`Thirty360`]: 30-day months, 360-day year
//!
//! # Usage
//!
//! ```rust
//! use fixedrate_core::daycounts::{DayCount, Thirty360};
//! use fixedrate_core::types::{Date, Frequency};
//! use rust_decimal::Decimal;
//!
//! let dc = Thirty360;
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 4, 1).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 90);
//! assert_eq!(dc.coupon_period(Frequency::SemiAnnual), Decimal::from(180));
//! assert_eq!(
//!     dc.period_fraction(start, end, Frequency::SemiAnnual).unwrap(),
//!     Decimal::new(5, 1)
//! );
//! ```

mod actact;
mod thirty360;

pub use actact::ActActYear;
pub use thirty360::Thirty360;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{Date, Frequency};

/// Trait for day count conventions.
///
/// Implementations are stateless and must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the market name of the convention (e.g. "30/360").
    fn name(&self) -> &'static str;

    /// Number of days between two dates according to the convention.
    ///
    /// Actual calendar days for ACT conventions, 30-day months for 30/360.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Fraction of a year between two dates.
    ///
    /// Equal dates give zero.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDateOrder` if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<Decimal>;

    /// Nominal length of one coupon period, in convention days.
    fn coupon_period(&self, frequency: Frequency) -> Decimal;

    /// Fraction of a coupon period covered by `start..end`.
    ///
    /// Convention days between the dates divided by [`Self::coupon_period`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDateOrder` if `end` is before `start`.
    fn period_fraction(&self, start: Date, end: Date, frequency: Frequency) -> CoreResult<Decimal> {
        ensure_ordered(start, end)?;
        Ok(Decimal::from(self.day_count(start, end)) / self.coupon_period(frequency))
    }
}

/// Fails with `InvalidDateOrder` when `end < start`.
pub(crate) fn ensure_ordered(start: Date, end: Date) -> CoreResult<()> {
    if end < start {
        return Err(CoreError::invalid_date_order(start, end));
    }
    Ok(())
}

/// Enumeration of the supported day count conventions.
///
/// Selects a convention at runtime (configuration files, builders) and
/// dispatches to the matching implementation.
///
/// # Example
///
/// ```rust
/// use fixedrate_core::daycounts::{DayCount, DayCountConvention};
/// use fixedrate_core::types::Date;
///
/// let convention: DayCountConvention = "30/360".parse().unwrap();
/// let start = Date::from_ymd(2025, 1, 1).unwrap();
/// let end = Date::from_ymd(2025, 7, 1).unwrap();
/// assert_eq!(convention.day_count(start, end), 180);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/Actual with the start year's length as the basis
    #[serde(rename = "ACT/ACT", alias = "ActActYear")]
    ActActYear,

    /// 30/360 bond basis
    #[default]
    #[serde(rename = "30/360", alias = "Thirty360")]
    Thirty360,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::ActActYear => Box::new(ActActYear),
            DayCountConvention::Thirty360 => Box::new(Thirty360),
        }
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[DayCountConvention::ActActYear, DayCountConvention::Thirty360]
    }
}

impl DayCount for DayCountConvention {
    fn name(&self) -> &'static str {
        match self {
            DayCountConvention::ActActYear => ActActYear.name(),
            DayCountConvention::Thirty360 => Thirty360.name(),
        }
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        match self {
            DayCountConvention::ActActYear => ActActYear.day_count(start, end),
            DayCountConvention::Thirty360 => Thirty360.day_count(start, end),
        }
    }

    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<Decimal> {
        match self {
            DayCountConvention::ActActYear => ActActYear.year_fraction(start, end),
            DayCountConvention::Thirty360 => Thirty360.year_fraction(start, end),
        }
    }

    fn coupon_period(&self, frequency: Frequency) -> Decimal {
        match self {
            DayCountConvention::ActActYear => ActActYear.coupon_period(frequency),
            DayCountConvention::Thirty360 => Thirty360.coupon_period(frequency),
        }
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = DayCountParseError;

    /// Parses a day count convention from a string.
    ///
    /// Accepts market names ("ACT/ACT", "30/360"), enum-style names
    /// ("ActActYear", "Thirty360") and common aliases ("BOND").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ACT/ACT" | "ACTUAL/ACTUAL" | "ACTACT" | "ACTACTYEAR" | "GOV" => {
                Ok(DayCountConvention::ActActYear)
            }
            "30/360" | "30/360 BOND" | "BOND" | "THIRTY360" | "MARKET" => {
                Ok(DayCountConvention::Thirty360)
            }
            _ => Err(DayCountParseError(s.to_string())),
        }
    }
}

/// Error type for parsing day count conventions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown day count convention: '{0}'")]
pub struct DayCountParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_convention_dispatch_matches_structs() {
        let start = date(2024, 1, 31);
        let end = date(2024, 7, 31);

        assert_eq!(
            DayCountConvention::Thirty360.day_count(start, end),
            Thirty360.day_count(start, end)
        );
        assert_eq!(
            DayCountConvention::ActActYear.year_fraction(start, end).unwrap(),
            ActActYear.year_fraction(start, end).unwrap()
        );
    }

    #[test]
    fn test_boxed_conventions() {
        for convention in DayCountConvention::all() {
            let dc = convention.to_day_count();
            assert_eq!(dc.name(), convention.name());

            let yf = dc.year_fraction(date(2025, 1, 1), date(2025, 7, 1)).unwrap();
            assert!(yf > dec!(0.49) && yf < dec!(0.51));
        }
    }

    #[test]
    fn test_period_fraction_regular_30_360() {
        let fraction = Thirty360
            .period_fraction(date(2024, 1, 1), date(2024, 7, 1), Frequency::SemiAnnual)
            .unwrap();
        assert_eq!(fraction, Decimal::ONE);
    }

    #[test]
    fn test_period_fraction_short_stub() {
        // 2024-03-01 to 2024-07-01 is 120 days of a 180 day period
        let fraction = Thirty360
            .period_fraction(date(2024, 3, 1), date(2024, 7, 1), Frequency::SemiAnnual)
            .unwrap();
        assert_eq!(fraction, dec!(120) / dec!(180));
    }

    #[test]
    fn test_period_fraction_rejects_reversed_dates() {
        let result = ActActYear.period_fraction(
            date(2024, 7, 1),
            date(2024, 1, 1),
            Frequency::Quarterly,
        );
        assert!(matches!(result, Err(CoreError::InvalidDateOrder { .. })));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "30/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Thirty360
        );
        assert_eq!(
            "bond".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Thirty360
        );
        assert_eq!(
            "ACT/ACT".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::ActActYear
        );
        assert_eq!(
            "actactyear".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::ActActYear
        );
    }

    #[test]
    fn test_from_str_invalid() {
        let result = "ACT/360".parse::<DayCountConvention>();
        assert!(result.unwrap_err().to_string().contains("unknown"));
    }

    #[test]
    fn test_from_str_roundtrip() {
        for convention in DayCountConvention::all() {
            let parsed: DayCountConvention = convention.name().parse().unwrap();
            assert_eq!(*convention, parsed);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DayCountConvention::Thirty360).unwrap();
        assert_eq!(json, "\"30/360\"");
        let parsed: DayCountConvention = serde_json::from_str("\"ACT/ACT\"").unwrap();
        assert_eq!(parsed, DayCountConvention::ActActYear);
    }
}
