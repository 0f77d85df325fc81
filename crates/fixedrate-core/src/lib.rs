//! # fixedrate Core
//!
//! Core types and accrual conventions for the fixedrate bond pricing library.
//!
//! This crate provides the foundational building blocks used by the pricing
//! crates:
//!
//! - **Types**: [`Date`] and [`Frequency`]
//! - **Day Count Conventions**: ACT/ACT (start-year basis) and 30/360 year
//!   fractions and coupon period lengths
//! - **Errors**: [`CoreError`] for invalid dates, date ordering and
//!   unsupported frequencies
//!
//! ## Example
//!
//! ```rust
//! use fixedrate_core::prelude::*;
//!
//! let dc = Thirty360;
//! let start = Date::from_ymd(2024, 1, 31).unwrap();
//! let end = Date::from_ymd(2024, 2, 28).unwrap();
//! assert_eq!(dc.day_count(start, end), 28);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{ActActYear, DayCount, DayCountConvention, Thirty360};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, Frequency};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Date, Frequency};
