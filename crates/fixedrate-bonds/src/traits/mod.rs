//! Capability traits shared by bond instruments.

use crate::error::{BondError, BondResult};

/// Pricing capabilities common to every bond instrument.
///
/// Concrete instruments ([`CouponBond`](crate::instruments::CouponBond),
/// [`ZeroCouponBond`](crate::instruments::ZeroCouponBond)) supply the rate,
/// growth and price; discounting helpers are provided on top of them.
pub trait Priceable {
    /// Rate applied per discounting period.
    fn rate(&self) -> f64;

    /// Value of the principal compounded forward over `years` years.
    fn future_value(&self, years: u32) -> f64;

    /// Price of the instrument at its issue date.
    fn price(&self) -> BondResult<f64>;

    /// Number of discounting periods from issue to maturity.
    fn total_periods(&self) -> u32;

    /// Amount repaid at maturity.
    fn maturity_value(&self) -> f64;

    /// Compounding factor `(1 + rate)^t`.
    fn discount_factor(&self, t: f64) -> f64 {
        (1.0 + self.rate()).powf(t)
    }

    /// Present value interest factor of an annuity of `n` periods.
    ///
    /// # Errors
    ///
    /// Returns `BondError::DivisionByZero` when the rate is zero; the
    /// annuity then degenerates to `n` and callers must branch on it.
    fn pvifa(&self, n: u32) -> BondResult<f64> {
        let rate = self.rate();
        if rate == 0.0 {
            return Err(BondError::division_by_zero("pvifa"));
        }
        Ok((1.0 - 1.0 / self.discount_factor(f64::from(n))) / rate)
    }

    /// Discounts `future_value` back over `periods` periods at [`Self::rate`].
    fn present_value(&self, future_value: f64, periods: u32) -> f64 {
        future_value / (1.0 + self.rate()).powf(f64::from(periods))
    }
}
