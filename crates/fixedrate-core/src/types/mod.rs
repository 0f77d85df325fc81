//! Domain types for bond pricing.
//!
//! - [`Date`]: Calendar date with month arithmetic for coupon schedules
//! - [`Frequency`]: Coupon payment / compounding frequency

mod date;
mod frequency;

pub use date::Date;
pub use frequency::Frequency;
