//! Yield-to-maturity solver.
//!
//! Inverts the price/yield relationship of a cashflow table with
//! Newton-Raphson. The table is a slice of `(tau, payment)` pairs where
//! `tau` is the time of the payment in coupon periods from the valuation
//! date, strictly positive and strictly increasing.
//!
//! Two discounting models are supported:
//!
//! | Model | PV(y) | PV'(y) |
//! |-------|-------|--------|
//! | Periodic | Σ p / (1+y)^τ | -Σ τ p / (1+y)^(τ+1) |
//! | Continuous | Σ p e^(-yτ) | -Σ τ p e^(-yτ) |
//!
//! The periodic model is only defined for `1 + y > 0`. Outside that range
//! both functions return NaN, so a Newton step that leaves it fails with
//! `NonConvergence` instead of settling on a spurious root.
//!
//! # Example
//!
//! ```rust
//! use fixedrate_bonds::pricing::YieldSolver;
//!
//! // Two periods of 5% coupons on 100, priced at par
//! let flows = [(1.0, 5.0), (2.0, 105.0)];
//! let result = YieldSolver::new().solve(100.0, &flows).unwrap();
//! assert!((result.yield_value - 0.05).abs() < 1e-10);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use fixedrate_math::solvers::{newton_raphson, SolverConfig};
use fixedrate_math::MathError;

use crate::config::PricingConfig;
use crate::error::BondResult;

/// Default starting point of the Newton iteration.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.08;

/// Discounting model used to value a cashflow table at a given yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountModel {
    /// Discount by `(1 + y)^tau`.
    #[default]
    Periodic,
    /// Discount by `e^(y * tau)`.
    Continuous,
}

impl DiscountModel {
    /// Returns true if `y` is a yield the model can discount at.
    #[must_use]
    pub fn admits(&self, y: f64) -> bool {
        match self {
            DiscountModel::Periodic => y.is_finite() && 1.0 + y > 0.0,
            DiscountModel::Continuous => y.is_finite(),
        }
    }

    /// Present value of `flows` at yield `y`, NaN outside [`Self::admits`].
    #[must_use]
    pub fn present_value(&self, flows: &[(f64, f64)], y: f64) -> f64 {
        if !self.admits(y) {
            return f64::NAN;
        }
        match self {
            DiscountModel::Periodic => flows
                .iter()
                .map(|(tau, payment)| payment / (1.0 + y).powf(*tau))
                .sum(),
            DiscountModel::Continuous => flows
                .iter()
                .map(|(tau, payment)| payment * (-y * tau).exp())
                .sum(),
        }
    }

    /// Derivative of [`Self::present_value`] with respect to `y`.
    #[must_use]
    pub fn derivative(&self, flows: &[(f64, f64)], y: f64) -> f64 {
        if !self.admits(y) {
            return f64::NAN;
        }
        match self {
            DiscountModel::Periodic => -flows
                .iter()
                .map(|(tau, payment)| tau * payment / (1.0 + y).powf(tau + 1.0))
                .sum::<f64>(),
            DiscountModel::Continuous => -flows
                .iter()
                .map(|(tau, payment)| tau * payment * (-y * tau).exp())
                .sum::<f64>(),
        }
    }
}

impl std::fmt::Display for DiscountModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountModel::Periodic => write!(f, "periodic"),
            DiscountModel::Continuous => write!(f, "continuous"),
        }
    }
}

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldResult {
    /// The calculated yield per period (as a decimal, e.g., 0.06 for 6%).
    pub yield_value: f64,
    /// Number of iterations to converge.
    pub iterations: u32,
    /// Pricing error at the returned yield.
    pub residual: f64,
}

/// Yield-to-maturity solver settings.
///
/// Holds no state between calls; one solver can be shared across threads
/// and used for any number of independent tables. Without an explicit
/// initial guess, [`YieldSolver::solve`] starts from
/// [`DEFAULT_INITIAL_GUESS`] and [`YieldSolver::solve_near`] from the
/// caller's anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    model: DiscountModel,
    initial_guess: Option<f64>,
    config: SolverConfig,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default model: periodic
    /// Default initial guess: unset (0.08 for [`Self::solve`])
    /// Default tolerance: 1e-10
    /// Default max iterations: 100
    #[must_use]
    pub fn new() -> Self {
        Self {
            model: DiscountModel::Periodic,
            initial_guess: None,
            config: SolverConfig::default(),
        }
    }

    /// Creates a solver from the solver section of a pricing configuration.
    #[must_use]
    pub fn from_config(config: &PricingConfig) -> Self {
        let settings = &config.solver;
        Self {
            model: settings.model,
            initial_guess: settings.initial_guess,
            config: SolverConfig::new(settings.tolerance, settings.max_iterations),
        }
    }

    /// Sets the discounting model.
    #[must_use]
    pub fn with_model(mut self, model: DiscountModel) -> Self {
        self.model = model;
        self
    }

    /// Sets the initial guess.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = Some(initial_guess);
        self
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Returns the discounting model.
    #[must_use]
    pub fn model(&self) -> DiscountModel {
        self.model
    }

    /// Returns the explicitly configured initial guess, if any.
    #[must_use]
    pub fn initial_guess(&self) -> Option<f64> {
        self.initial_guess
    }

    /// Returns the root-finder configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves for the yield that reprices `flows` to `price`.
    ///
    /// # Errors
    ///
    /// - `MathError::InvalidInput` for an empty table, a non-positive price
    ///   or times that are not positive and strictly increasing
    /// - `MathError::NonConvergence` when the iteration cap is reached or an
    ///   iterate leaves the model's domain
    /// - `MathError::DegenerateDerivative` when PV'(y) vanishes
    pub fn solve(&self, price: f64, flows: &[(f64, f64)]) -> BondResult<YieldResult> {
        self.solve_near(price, flows, DEFAULT_INITIAL_GUESS)
    }

    /// Like [`Self::solve`], but starts from `anchor` unless an initial
    /// guess was configured.
    pub fn solve_near(
        &self,
        price: f64,
        flows: &[(f64, f64)],
        anchor: f64,
    ) -> BondResult<YieldResult> {
        let guess = self.initial_guess.unwrap_or(anchor);
        solve_yield(self.model, price, flows, guess, &self.config)
    }
}

/// Solves for the yield of a `(tau, payment)` table under `model`.
///
/// Stateless free-function form of [`YieldSolver::solve`].
pub fn solve_yield(
    model: DiscountModel,
    price: f64,
    flows: &[(f64, f64)],
    initial_guess: f64,
    config: &SolverConfig,
) -> BondResult<YieldResult> {
    validate_input(price, flows)?;

    let objective = |y: f64| model.present_value(flows, y) - price;
    let derivative = |y: f64| model.derivative(flows, y);

    let result = newton_raphson(objective, derivative, initial_guess, config)?;
    if !model.admits(result.root) {
        warn!("{model} yield {} is outside the model domain", result.root);
        return Err(MathError::non_convergence(result.iterations, f64::NAN).into());
    }

    debug!(
        "{} yield {:.10} for price {} over {} cashflows ({} iterations)",
        model,
        result.root,
        price,
        flows.len(),
        result.iterations
    );

    Ok(YieldResult {
        yield_value: result.root,
        iterations: result.iterations,
        residual: result.residual,
    })
}

fn validate_input(price: f64, flows: &[(f64, f64)]) -> Result<(), MathError> {
    if flows.is_empty() {
        return Err(MathError::invalid_input("cashflow table is empty"));
    }
    if !(price.is_finite() && price > 0.0) {
        return Err(MathError::invalid_input(format!(
            "observed price must be positive, got {price}"
        )));
    }

    let mut previous = 0.0;
    for (tau, _) in flows {
        if !(tau.is_finite() && *tau > previous) {
            return Err(MathError::invalid_input(format!(
                "cashflow times must be positive and strictly increasing, got {tau} after {previous}"
            )));
        }
        previous = *tau;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BondError;
    use approx::assert_relative_eq;

    fn level_coupon_flows(coupon: f64, principal: f64, periods: u32) -> Vec<(f64, f64)> {
        (1..=periods)
            .map(|t| {
                let payment = if t == periods { coupon + principal } else { coupon };
                (f64::from(t), payment)
            })
            .collect()
    }

    #[test]
    fn test_par_bond_yield_equals_coupon_rate() {
        let flows = level_coupon_flows(3.0, 100.0, 10);
        let result = YieldSolver::new().solve(100.0, &flows).unwrap();

        assert_relative_eq!(result.yield_value, 0.03, epsilon = 1e-10);
        assert!(result.residual.abs() < 1e-8);
    }

    #[test]
    fn test_discount_bond_yield_above_coupon() {
        let flows = level_coupon_flows(3.0, 100.0, 10);
        let result = YieldSolver::new().solve(95.0, &flows).unwrap();

        assert!(result.yield_value > 0.03);
        assert_relative_eq!(
            DiscountModel::Periodic.present_value(&flows, result.yield_value),
            95.0,
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_continuous_model() {
        let flows = [(1.0, 4.0), (2.0, 104.0)];
        let target = 4.0 * (-0.05_f64).exp() + 104.0 * (-0.10_f64).exp();

        let result = YieldSolver::new()
            .with_model(DiscountModel::Continuous)
            .solve(target, &flows)
            .unwrap();

        assert_relative_eq!(result.yield_value, 0.05, epsilon = 1e-10);
    }

    #[test]
    fn test_free_function_matches_solver() {
        let flows = level_coupon_flows(6.0, 1000.0, 6);
        let solver = YieldSolver::new().with_initial_guess(0.01);

        let via_solver = solver.solve(980.0, &flows).unwrap();
        let via_fn = solve_yield(
            DiscountModel::Periodic,
            980.0,
            &flows,
            0.01,
            &SolverConfig::default(),
        )
        .unwrap();

        assert_eq!(via_solver, via_fn);
    }

    #[test]
    fn test_derivatives_match_finite_difference() {
        let flows = level_coupon_flows(5.0, 100.0, 8);
        let h = 1e-6;

        for model in [DiscountModel::Periodic, DiscountModel::Continuous] {
            let numeric = (model.present_value(&flows, 0.04 + h)
                - model.present_value(&flows, 0.04 - h))
                / (2.0 * h);
            assert_relative_eq!(model.derivative(&flows, 0.04), numeric, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_iteration_cap_is_fatal() {
        let flows = level_coupon_flows(3.0, 100.0, 10);
        let result = YieldSolver::new()
            .with_initial_guess(5.0)
            .with_max_iterations(1)
            .solve(100.0, &flows);

        assert!(matches!(
            result,
            Err(BondError::Math(MathError::NonConvergence { iterations: 1, .. }))
        ));
    }

    #[test]
    fn test_zero_payments_are_degenerate() {
        let flows = [(1.0, 0.0), (2.0, 0.0)];
        let result = YieldSolver::new().solve(100.0, &flows);

        assert!(matches!(
            result,
            Err(BondError::Math(MathError::DegenerateDerivative { iteration: 0, .. }))
        ));
    }

    #[test]
    fn test_periodic_domain() {
        let flows = level_coupon_flows(3.0, 100.0, 4);

        assert!(DiscountModel::Periodic.admits(-0.5));
        assert!(!DiscountModel::Periodic.admits(-1.0));
        assert!(!DiscountModel::Periodic.admits(-2.0));
        assert!(DiscountModel::Continuous.admits(-2.0));
        assert!(DiscountModel::Periodic.present_value(&flows, -2.0).is_nan());
        assert!(DiscountModel::Periodic.derivative(&flows, -1.0).is_nan());
    }

    #[test]
    fn test_overshoot_below_minus_one_is_non_convergence() {
        // 120 monthly periods at 0.375%: the first step from 0.08 lands near -1.5
        let flows = level_coupon_flows(0.375, 100.0, 120);
        let result = YieldSolver::new().solve(100.0, &flows);

        assert!(matches!(
            result,
            Err(BondError::Math(MathError::NonConvergence { iterations: 1, .. }))
        ));
    }

    #[test]
    fn test_solve_near_uses_anchor_only_without_guess() {
        let flows = level_coupon_flows(0.375, 100.0, 120);

        let anchored = YieldSolver::new().solve_near(100.0, &flows, 0.00375).unwrap();
        assert_relative_eq!(anchored.yield_value, 0.00375, epsilon = 1e-10);

        let configured = YieldSolver::new()
            .with_initial_guess(0.08)
            .solve_near(100.0, &flows, 0.00375);
        assert!(configured.is_err());
    }

    #[test]
    fn test_input_validation() {
        let solver = YieldSolver::new();

        assert!(solver.solve(100.0, &[]).is_err());
        assert!(solver.solve(0.0, &[(1.0, 105.0)]).is_err());
        assert!(solver.solve(-5.0, &[(1.0, 105.0)]).is_err());
        assert!(solver.solve(100.0, &[(0.0, 105.0)]).is_err());
        assert!(solver.solve(100.0, &[(2.0, 5.0), (1.0, 105.0)]).is_err());
        assert!(solver.solve(100.0, &[(1.0, 5.0), (1.0, 105.0)]).is_err());
    }

    #[test]
    fn test_model_serde_names() {
        let json = serde_json::to_string(&DiscountModel::Continuous).unwrap();
        assert_eq!(json, "\"continuous\"");
        let model: DiscountModel = serde_json::from_str("\"periodic\"").unwrap();
        assert_eq!(model, DiscountModel::Periodic);
    }
}
