//! Yield solving and batch pricing.

mod batch;
mod yield_solver;

pub use batch::{price_all, yields_to_maturity};
pub use yield_solver::{solve_yield, DiscountModel, YieldResult, YieldSolver, DEFAULT_INITIAL_GUESS};
