//! Cash flow schedules and cashflow tables.
//!
//! - [`Schedule`]: payment dates generated backward from maturity
//! - [`CashflowEntry`]: one dated payment of a bond
//! - [`DiscountedCashflow`]: a payment with its discount factor and present value

mod schedule;

pub use schedule::Schedule;

use serde::{Deserialize, Serialize};

use fixedrate_core::types::Date;

/// A single dated payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashflowEntry {
    /// 1-based coupon period index in the bond's full schedule.
    pub period_index: u32,
    /// Payment date.
    pub date: Date,
    /// Payment amount (coupon, plus principal on the last entry).
    pub payment: f64,
}

impl CashflowEntry {
    /// Creates a new cashflow entry.
    #[must_use]
    pub fn new(period_index: u32, date: Date, payment: f64) -> Self {
        Self {
            period_index,
            date,
            payment,
        }
    }
}

/// A cashflow row extended with discounting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountedCashflow {
    /// The underlying payment.
    #[serde(flatten)]
    pub entry: CashflowEntry,
    /// Compounding factor `(1 + r)^period_index`.
    pub discount_factor: f64,
    /// `payment / discount_factor`.
    pub present_value: f64,
}

impl DiscountedCashflow {
    /// Discounts an entry by the given factor.
    #[must_use]
    pub fn new(entry: CashflowEntry, discount_factor: f64) -> Self {
        Self {
            entry,
            discount_factor,
            present_value: entry.payment / discount_factor,
        }
    }
}

/// Sum of the present value column.
#[must_use]
pub fn total_present_value(rows: &[DiscountedCashflow]) -> f64 {
    rows.iter().map(|row| row.present_value).sum()
}
