//! Zero coupon bond.
//!
//! Pays only the principal at maturity, discounted semi-annually at half the
//! annual rate over twice the number of whole years to maturity.

use fixedrate_core::types::Date;
use fixedrate_core::CoreError;

use crate::error::{BondError, BondResult};
use crate::traits::Priceable;

/// A bond paying its principal at maturity and nothing before.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeroCouponBond {
    principal: f64,
    issue_date: Date,
    maturity_date: Date,
    rate: f64,
}

impl ZeroCouponBond {
    /// Creates a zero coupon bond.
    ///
    /// # Errors
    ///
    /// - `BondError::InvalidSpec` for a non-positive principal or non-finite rate
    /// - `CoreError::InvalidDateOrder` if maturity is not after issue
    pub fn new(principal: f64, issue_date: Date, maturity_date: Date, rate: f64) -> BondResult<Self> {
        if !(principal.is_finite() && principal > 0.0) {
            return Err(BondError::invalid_spec(format!(
                "principal must be positive, got {principal}"
            )));
        }
        if !rate.is_finite() {
            return Err(BondError::invalid_spec("rate must be finite"));
        }
        if maturity_date <= issue_date {
            return Err(CoreError::invalid_date_order(issue_date, maturity_date).into());
        }

        Ok(Self {
            principal,
            issue_date,
            maturity_date,
            rate,
        })
    }

    /// Creates a zero coupon bond from ISO `YYYY-MM-DD` dates.
    pub fn from_iso(principal: f64, issue_date: &str, maturity_date: &str, rate: f64) -> BondResult<Self> {
        Self::new(principal, Date::parse(issue_date)?, Date::parse(maturity_date)?, rate)
    }

    /// Issue date.
    #[must_use]
    pub fn issue_date(&self) -> Date {
        self.issue_date
    }

    /// Maturity date.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Semi-annual discount rate (half the annual rate).
    #[must_use]
    pub fn discount_rate(&self) -> f64 {
        self.rate / 2.0
    }

    /// Number of semi-annual periods discounted over.
    #[must_use]
    pub fn total_periods_to_discount(&self) -> u32 {
        self.total_periods() * 2
    }
}

impl Priceable for ZeroCouponBond {
    fn rate(&self) -> f64 {
        self.rate
    }

    fn future_value(&self, years: u32) -> f64 {
        self.principal * (1.0 + self.rate).powf(f64::from(years))
    }

    fn price(&self) -> BondResult<f64> {
        let periods = f64::from(self.total_periods_to_discount());
        Ok(self.maturity_value() / self.discount_factor(periods))
    }

    /// Whole calendar years from issue to maturity.
    fn total_periods(&self) -> u32 {
        (self.maturity_date.year() - self.issue_date.year()) as u32
    }

    fn maturity_value(&self) -> f64 {
        self.principal
    }

    fn discount_factor(&self, t: f64) -> f64 {
        (1.0 + self.discount_rate()).powf(t)
    }

    fn pvifa(&self, n: u32) -> BondResult<f64> {
        let rate = self.discount_rate();
        if rate == 0.0 {
            return Err(BondError::division_by_zero("pvifa"));
        }
        Ok((1.0 - 1.0 / self.discount_factor(f64::from(n))) / rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_price() {
        let bond = ZeroCouponBond::from_iso(1000.0, "2024-01-01", "2034-01-01", 0.05).unwrap();

        assert_eq!(bond.total_periods(), 10);
        assert_eq!(bond.total_periods_to_discount(), 20);
        assert_relative_eq!(bond.discount_rate(), 0.025);
        assert_relative_eq!(
            bond.price().unwrap(),
            1000.0 / 1.025_f64.powi(20),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_rate_prices_at_principal() {
        let bond = ZeroCouponBond::from_iso(100.0, "2024-01-01", "2026-01-01", 0.0).unwrap();

        assert_eq!(bond.price().unwrap(), 100.0);
        assert!(bond.pvifa(4).is_err());
    }

    #[test]
    fn test_future_and_present_value() {
        let bond = ZeroCouponBond::from_iso(100.0, "2024-01-01", "2026-01-01", 0.1).unwrap();

        assert_relative_eq!(bond.future_value(2), 121.0, epsilon = 1e-9);
        assert_relative_eq!(bond.present_value(121.0, 2), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid() {
        assert!(ZeroCouponBond::from_iso(100.0, "2026-01-01", "2024-01-01", 0.05).is_err());
        assert!(ZeroCouponBond::from_iso(-1.0, "2024-01-01", "2026-01-01", 0.05).is_err());
        assert!(ZeroCouponBond::from_iso(100.0, "2024-01-01", "not-a-date", 0.05).is_err());
    }
}
