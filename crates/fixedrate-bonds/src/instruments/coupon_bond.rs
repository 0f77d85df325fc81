//! Fixed-rate coupon bond.

use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use fixedrate_core::daycounts::{DayCount, DayCountConvention};
use fixedrate_core::types::{Date, Frequency};
use fixedrate_core::CoreError;

use crate::cashflows::{total_present_value, CashflowEntry, DiscountedCashflow, Schedule};
use crate::config::PricingConfig;
use crate::error::{BondError, BondResult};
use crate::pricing::{YieldResult, YieldSolver};
use crate::traits::Priceable;

/// A fixed-rate bond paying level coupons and principal at maturity.
///
/// The bond is immutable once built. Every pricing method is a pure
/// function of the bond and an optional valuation date, which defaults to
/// the issue date.
///
/// # Example
///
/// ```rust
/// use fixedrate_bonds::prelude::*;
///
/// let bond = CouponBond::builder()
///     .principal(1000.0)
///     .issue_date_iso("2024-01-01")
///     .maturity_date_iso("2027-01-01")
///     .rate(0.12)
///     .frequency(Frequency::SemiAnnual)
///     .build()
///     .unwrap();
///
/// assert_eq!(bond.total_periods(), 6);
/// assert_eq!(bond.coupon_value(), 60.0);
///
/// let price = bond.price(None).unwrap();
/// let ytm = bond.yield_to_maturity(Some(price), None).unwrap();
/// assert!((ytm - 0.06).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CouponBond {
    principal: f64,
    issue_date: Date,
    maturity_date: Date,
    nominal_rate: f64,
    frequency: Frequency,
    day_count: DayCountConvention,
    schedule: Schedule,
    call_date: Option<Date>,
    put_date: Option<Date>,
    solver: YieldSolver,
}

impl CouponBond {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> CouponBondBuilder {
        CouponBondBuilder::new()
    }

    /// Face amount repaid at maturity.
    #[must_use]
    pub fn principal(&self) -> f64 {
        self.principal
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

    /// Nominal annual coupon rate.
    #[must_use]
    pub fn nominal_rate(&self) -> f64 {
        self.nominal_rate
    }

    /// Coupon frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Accrual convention used to prorate the first coupon.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Payment schedule.
    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Call date, if the bond is callable.
    #[must_use]
    pub fn call_date(&self) -> Option<Date> {
        self.call_date
    }

    /// Put date, if the bond is putable.
    #[must_use]
    pub fn put_date(&self) -> Option<Date> {
        self.put_date
    }

    /// Solver used by [`Self::yield_to_maturity`].
    #[must_use]
    pub fn yield_solver(&self) -> &YieldSolver {
        &self.solver
    }

    /// Coupon paid each full period.
    #[must_use]
    pub fn coupon_value(&self) -> f64 {
        self.principal * self.rate()
    }

    /// Present value at issue of the level coupon stream.
    ///
    /// A zero rate takes the undiscounted branch `n * coupon` instead of
    /// dividing by the rate.
    pub fn present_value_of_coupon_annuity(&self) -> BondResult<f64> {
        let n = self.total_periods();
        if self.rate() == 0.0 {
            return Ok(f64::from(n) * self.coupon_value());
        }
        Ok(self.coupon_value() * self.pvifa(n)?)
    }

    /// Present value at issue of the principal.
    #[must_use]
    pub fn present_value_of_par(&self) -> f64 {
        self.principal / self.discount_factor(f64::from(self.total_periods()))
    }

    /// Cashflows paid strictly after the valuation date.
    ///
    /// Entries keep their period index in the full schedule. The first
    /// entry is the coupon prorated by the accrual fraction from the
    /// valuation date to its payment date; the last entry adds the
    /// principal.
    ///
    /// # Errors
    ///
    /// - `CoreError::InvalidDateOrder` if the valuation date is before issue
    /// - `BondError::NoFutureCashflows` if it is on or after maturity
    pub fn cashflows(&self, valuation: Option<Date>) -> BondResult<Vec<CashflowEntry>> {
        let valuation = self.resolve_valuation(valuation)?;
        let coupon = self.coupon_value();
        let last_index = self.total_periods();

        let mut rows: Vec<CashflowEntry> = Vec::with_capacity(self.schedule.len());
        for (period_index, date) in self.schedule.iter().filter(|(_, date)| *date > valuation) {
            let mut payment = if rows.is_empty() {
                let fraction = self
                    .day_count
                    .period_fraction(valuation, date, self.frequency)?;
                coupon * fraction_to_f64(fraction)?
            } else {
                coupon
            };
            if period_index == last_index {
                payment += self.maturity_value();
            }
            rows.push(CashflowEntry::new(period_index, date, payment));
        }

        debug!(
            "{} cashflows after {} (first period index {})",
            rows.len(),
            valuation,
            rows.first().map_or(0, |row| row.period_index)
        );

        Ok(rows)
    }

    /// Cashflows with discount factor `(1 + r)^period_index` and present value.
    pub fn discounted_cashflows(&self, valuation: Option<Date>) -> BondResult<Vec<DiscountedCashflow>> {
        Ok(self
            .cashflows(valuation)?
            .into_iter()
            .map(|entry| {
                DiscountedCashflow::new(entry, self.discount_factor(f64::from(entry.period_index)))
            })
            .collect())
    }

    /// Sum of the discounted cashflow present values.
    pub fn price(&self, valuation: Option<Date>) -> BondResult<f64> {
        Ok(total_present_value(&self.discounted_cashflows(valuation)?))
    }

    /// `(tau, payment)` pairs fed to the yield solver.
    ///
    /// `tau` is the 1-based position of the payment among the cashflows
    /// after the valuation date, so it counts coupon periods from the
    /// valuation date rather than from issue.
    pub fn yield_cashflows(&self, valuation: Option<Date>) -> BondResult<Vec<(f64, f64)>> {
        Ok(self
            .cashflows(valuation)?
            .iter()
            .enumerate()
            .map(|(position, row)| ((position + 1) as f64, row.payment))
            .collect())
    }

    /// Per-period yield that reprices the remaining cashflows to
    /// `observed_price` (the model price when omitted).
    ///
    /// Uses the bond's configured solver. When the solver has no initial
    /// guess, the iteration starts from [`Priceable::rate`].
    ///
    /// The omitted-price default is only self-consistent at issue. `price`
    /// discounts by the period index counted from issue while the solver's
    /// `tau` restarts at the valuation date, so for a later valuation date
    /// the implied yield differs from `rate()`.
    pub fn yield_to_maturity(
        &self,
        observed_price: Option<f64>,
        valuation: Option<Date>,
    ) -> BondResult<f64> {
        self.yield_to_maturity_with(&self.solver, observed_price, valuation)
            .map(|result| result.yield_value)
    }

    /// Same as [`Self::yield_to_maturity`] with an explicit solver, returning
    /// the full solver result.
    pub fn yield_to_maturity_with(
        &self,
        solver: &YieldSolver,
        observed_price: Option<f64>,
        valuation: Option<Date>,
    ) -> BondResult<YieldResult> {
        let observed_price = match observed_price {
            Some(price) => price,
            None => self.price(valuation)?,
        };
        let flows = self.yield_cashflows(valuation)?;
        solver.solve_near(observed_price, &flows, self.rate())
    }

    /// Yield to the call date.
    ///
    /// Option-adjusted yields are not supported: this only checks that the
    /// bond has a call date.
    pub fn yield_to_call(&self) -> BondResult<f64> {
        if self.call_date.is_none() {
            return Err(BondError::missing_field("call_date"));
        }
        Err(BondError::not_implemented("yield_to_call"))
    }

    /// Yield to the put date.
    ///
    /// Option-adjusted yields are not supported: this only checks that the
    /// bond has a put date.
    pub fn yield_to_put(&self) -> BondResult<f64> {
        if self.put_date.is_none() {
            return Err(BondError::missing_field("put_date"));
        }
        Err(BondError::not_implemented("yield_to_put"))
    }

    fn resolve_valuation(&self, valuation: Option<Date>) -> BondResult<Date> {
        let valuation = valuation.unwrap_or(self.issue_date);
        if valuation < self.issue_date {
            return Err(CoreError::invalid_date_order(self.issue_date, valuation).into());
        }
        if valuation >= self.maturity_date {
            return Err(BondError::NoFutureCashflows {
                valuation: valuation.to_string(),
            });
        }
        Ok(valuation)
    }
}

fn fraction_to_f64(value: Decimal) -> BondResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| BondError::invalid_spec(format!("accrual fraction {value} is not representable")))
}

impl Priceable for CouponBond {
    fn rate(&self) -> f64 {
        self.nominal_rate / f64::from(self.frequency.periods_per_year())
    }

    fn future_value(&self, years: u32) -> f64 {
        let periods = years * self.frequency.periods_per_year();
        self.principal * (1.0 + self.rate()).powf(f64::from(periods))
    }

    fn price(&self) -> BondResult<f64> {
        CouponBond::price(self, None)
    }

    fn total_periods(&self) -> u32 {
        self.schedule.len() as u32
    }

    fn maturity_value(&self) -> f64 {
        self.principal
    }
}

// =============================================================================
// Builder
// =============================================================================

#[derive(Debug, Clone)]
enum DateInput {
    Date(Date),
    Iso(String),
}

impl DateInput {
    fn resolve(self) -> BondResult<Date> {
        match self {
            DateInput::Date(date) => Ok(date),
            DateInput::Iso(text) => Ok(Date::parse(&text)?),
        }
    }
}

/// Builder for [`CouponBond`].
///
/// Required: principal, issue date, maturity date, rate. Frequency and day
/// count fall back to the pricing configuration (semi-annual, 30/360 by
/// default).
#[derive(Debug, Clone, Default)]
pub struct CouponBondBuilder {
    principal: Option<f64>,
    issue_date: Option<DateInput>,
    maturity_date: Option<DateInput>,
    rate: Option<f64>,
    periods_per_year: Option<u32>,
    day_count: Option<DayCountConvention>,
    call_date: Option<DateInput>,
    put_date: Option<DateInput>,
    config: PricingConfig,
    solver: Option<YieldSolver>,
}

impl CouponBondBuilder {
    /// Creates a new builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the principal (face amount).
    #[must_use]
    pub fn principal(mut self, principal: f64) -> Self {
        self.principal = Some(principal);
        self
    }

    /// Sets the issue date.
    #[must_use]
    pub fn issue_date(mut self, date: Date) -> Self {
        self.issue_date = Some(DateInput::Date(date));
        self
    }

    /// Sets the issue date from an ISO `YYYY-MM-DD` string, parsed on build.
    #[must_use]
    pub fn issue_date_iso(mut self, date: impl Into<String>) -> Self {
        self.issue_date = Some(DateInput::Iso(date.into()));
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity_date(mut self, date: Date) -> Self {
        self.maturity_date = Some(DateInput::Date(date));
        self
    }

    /// Sets the maturity date from an ISO `YYYY-MM-DD` string, parsed on build.
    #[must_use]
    pub fn maturity_date_iso(mut self, date: impl Into<String>) -> Self {
        self.maturity_date = Some(DateInput::Iso(date.into()));
        self
    }

    /// Sets the nominal annual rate (as decimal, 0.05 = 5%).
    #[must_use]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the coupon frequency.
    #[must_use]
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.periods_per_year = Some(frequency.periods_per_year());
        self
    }

    /// Sets the coupon frequency as a number of periods per year.
    ///
    /// Only 1, 2, 4 and 12 are accepted on build.
    #[must_use]
    pub fn periods_per_year(mut self, periods: u32) -> Self {
        self.periods_per_year = Some(periods);
        self
    }

    /// Sets the accrual convention.
    #[must_use]
    pub fn day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = Some(day_count);
        self
    }

    /// Sets the call date.
    #[must_use]
    pub fn call_date(mut self, date: Date) -> Self {
        self.call_date = Some(DateInput::Date(date));
        self
    }

    /// Sets the call date from an ISO string.
    #[must_use]
    pub fn call_date_iso(mut self, date: impl Into<String>) -> Self {
        self.call_date = Some(DateInput::Iso(date.into()));
        self
    }

    /// Sets the put date.
    #[must_use]
    pub fn put_date(mut self, date: Date) -> Self {
        self.put_date = Some(DateInput::Date(date));
        self
    }

    /// Sets the put date from an ISO string.
    #[must_use]
    pub fn put_date_iso(mut self, date: impl Into<String>) -> Self {
        self.put_date = Some(DateInput::Iso(date.into()));
        self
    }

    /// Uses a pricing configuration for defaults and the yield solver.
    #[must_use]
    pub fn config(mut self, config: &PricingConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Overrides the yield solver taken from the configuration.
    #[must_use]
    pub fn yield_solver(mut self, solver: YieldSolver) -> Self {
        self.solver = Some(solver);
        self
    }

    /// Builds the bond.
    ///
    /// # Errors
    ///
    /// - `BondError::MissingField` for a missing principal, date or rate
    /// - `BondError::InvalidSpec` for a non-positive principal, a non-finite
    ///   rate, or an option date outside the bond's life
    /// - `CoreError` for unparseable dates, maturity not after issue, or an
    ///   unsupported frequency
    pub fn build(self) -> BondResult<CouponBond> {
        let principal = self
            .principal
            .ok_or_else(|| BondError::missing_field("principal"))?;
        let issue_date = self
            .issue_date
            .ok_or_else(|| BondError::missing_field("issue_date"))?
            .resolve()?;
        let maturity_date = self
            .maturity_date
            .ok_or_else(|| BondError::missing_field("maturity_date"))?
            .resolve()?;
        let nominal_rate = self.rate.ok_or_else(|| BondError::missing_field("rate"))?;

        if !(principal.is_finite() && principal > 0.0) {
            return Err(BondError::invalid_spec(format!(
                "principal must be positive, got {principal}"
            )));
        }
        if !nominal_rate.is_finite() {
            return Err(BondError::invalid_spec("rate must be finite"));
        }

        let frequency = match self.periods_per_year {
            Some(periods) => Frequency::try_from(periods)?,
            None => self.config.frequency,
        };
        let day_count = self.day_count.unwrap_or(self.config.day_count);
        let schedule = Schedule::generate(issue_date, maturity_date, frequency)?;

        let call_date = resolve_option_date(self.call_date, "call_date", issue_date, maturity_date)?;
        let put_date = resolve_option_date(self.put_date, "put_date", issue_date, maturity_date)?;

        let solver = self
            .solver
            .unwrap_or_else(|| YieldSolver::from_config(&self.config));

        Ok(CouponBond {
            principal,
            issue_date,
            maturity_date,
            nominal_rate,
            frequency,
            day_count,
            schedule,
            call_date,
            put_date,
            solver,
        })
    }
}

fn resolve_option_date(
    input: Option<DateInput>,
    field: &str,
    issue_date: Date,
    maturity_date: Date,
) -> BondResult<Option<Date>> {
    let Some(input) = input else {
        return Ok(None);
    };
    let date = input.resolve()?;
    if date <= issue_date || date > maturity_date {
        return Err(BondError::invalid_spec(format!(
            "{field} {date} must fall after issue {issue_date} and on or before maturity {maturity_date}"
        )));
    }
    Ok(Some(date))
}
