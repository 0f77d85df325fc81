//! # fixedrate
//!
//! Fixed-rate coupon bond pricing and yield-to-maturity solving.
//!
//! This crate re-exports the public API of the workspace:
//!
//! - [`types`], [`daycounts`]: dates, frequencies and accrual conventions
//! - [`solvers`]: the Newton-Raphson root finder
//! - [`cashflows`], [`instruments`], [`pricing`], [`config`]: schedules,
//!   cashflow tables, instruments and yield solving
//!
//! ## Example
//!
//! ```rust
//! use fixedrate::prelude::*;
//!
//! let bond = CouponBond::builder()
//!     .principal(1000.0)
//!     .issue_date_iso("2024-01-01")
//!     .maturity_date_iso("2027-01-01")
//!     .rate(0.12)
//!     .periods_per_year(2)
//!     .build()
//!     .unwrap();
//!
//! let price = bond.price(None).unwrap();
//! let ytm = bond.yield_to_maturity(Some(price), None).unwrap();
//! assert!((ytm - bond.rate()).abs() < 1e-8);
//! ```

#![warn(missing_docs)]

pub use fixedrate_bonds::{cashflows, config, instruments, pricing, traits};
pub use fixedrate_core::{daycounts, types};
pub use fixedrate_math::solvers;

/// Error types of every layer.
pub mod errors {
    pub use fixedrate_bonds::error::{BondError, BondResult};
    pub use fixedrate_core::error::{CoreError, CoreResult};
    pub use fixedrate_math::error::{MathError, MathResult};
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use fixedrate_bonds::prelude::*;
    pub use fixedrate_core::prelude::{ActActYear, CoreError, CoreResult, Thirty360};
    pub use fixedrate_math::prelude::{newton_raphson, MathError, MathResult, SolverConfig};
}
