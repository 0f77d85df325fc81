//! # fixedrate Bonds
//!
//! Fixed-rate coupon bond pricing and yield-to-maturity solving.
//!
//! This crate provides:
//!
//! - **Cash Flows**: payment schedules generated backward from maturity and
//!   cashflow tables with a prorated first coupon
//! - **Instruments**: [`CouponBond`](instruments::CouponBond) and
//!   [`ZeroCouponBond`](instruments::ZeroCouponBond) behind the
//!   [`Priceable`](traits::Priceable) capability trait
//! - **Pricing**: Newton-Raphson yield solving under periodic or continuous
//!   discounting, and parallel batch pricing
//! - **Configuration**: TOML-loadable conventions and solver settings
//!
//! ## Example
//!
//! ```rust
//! use fixedrate_bonds::prelude::*;
//!
//! let bond = CouponBond::builder()
//!     .principal(1000.0)
//!     .issue_date(Date::from_ymd(2024, 1, 1).unwrap())
//!     .maturity_date(Date::from_ymd(2027, 1, 1).unwrap())
//!     .rate(0.12)
//!     .frequency(Frequency::SemiAnnual)
//!     .build()
//!     .unwrap();
//!
//! for row in bond.discounted_cashflows(None).unwrap() {
//!     println!("{} {} {:.2}", row.entry.period_index, row.entry.date, row.present_value);
//! }
//!
//! let ytm = bond.yield_to_maturity(Some(980.0), None).unwrap();
//! assert!(ytm > 0.06);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod cashflows;
pub mod config;
pub mod error;
pub mod instruments;
pub mod pricing;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    // Cash flows
    pub use crate::cashflows::{CashflowEntry, DiscountedCashflow, Schedule};

    // Configuration
    pub use crate::config::{PricingConfig, SolverSettings};

    // Errors
    pub use crate::error::{BondError, BondResult};

    // Instruments
    pub use crate::instruments::{CouponBond, CouponBondBuilder, ZeroCouponBond};

    // Pricing
    pub use crate::pricing::{
        price_all, solve_yield, yields_to_maturity, DiscountModel, YieldResult, YieldSolver,
    };

    // Traits
    pub use crate::traits::Priceable;

    // Re-export core types
    pub use fixedrate_core::daycounts::{DayCount, DayCountConvention};
    pub use fixedrate_core::types::{Date, Frequency};
}

pub use error::{BondError, BondResult};
