//! Bond instruments.
//!
//! - [`CouponBond`]: level fixed-rate coupons with a prorated first coupon
//! - [`ZeroCouponBond`]: principal only, semi-annual discounting

mod coupon_bond;
mod zero_coupon;

pub use coupon_bond::{CouponBond, CouponBondBuilder};
pub use zero_coupon::ZeroCouponBond;
