//! Pricing configuration.
//!
//! Default conventions and yield solver settings, loadable from TOML:
//!
//! ```toml
//! day_count = "ACT/ACT"
//! frequency = 4
//!
//! [solver]
//! model = "continuous"
//! initial_guess = 0.05
//! tolerance = 1e-12
//! max_iterations = 50
//! ```
//!
//! Every field is optional; missing fields take the defaults below. Without
//! `initial_guess`, bond yields start from the bond's own per-period rate.

use std::path::Path;

use serde::{Deserialize, Serialize};

use fixedrate_core::daycounts::DayCountConvention;
use fixedrate_core::types::Frequency;
use fixedrate_math::solvers::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

use crate::error::{BondError, BondResult};
use crate::pricing::DiscountModel;

/// Pricing configuration for coupon bonds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Default accrual convention for new bonds.
    #[serde(default = "default_day_count")]
    pub day_count: DayCountConvention,

    /// Default coupon frequency for new bonds.
    #[serde(default = "default_frequency")]
    pub frequency: Frequency,

    /// Yield solver settings.
    #[serde(default)]
    pub solver: SolverSettings,
}

/// Yield solver section of [`PricingConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Discounting model.
    #[serde(default)]
    pub model: DiscountModel,

    /// Starting yield of the Newton iteration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_guess: Option<f64>,

    /// Convergence threshold on the Newton step.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Iteration cap.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_day_count() -> DayCountConvention {
    DayCountConvention::Thirty360
}

fn default_frequency() -> Frequency {
    Frequency::SemiAnnual
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            model: DiscountModel::default(),
            initial_guess: None,
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            day_count: default_day_count(),
            frequency: default_frequency(),
            solver: SolverSettings::default(),
        }
    }
}

impl PricingConfig {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> BondResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| BondError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> BondResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| BondError::config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Checks the solver settings.
    pub fn validate(&self) -> BondResult<()> {
        let solver = &self.solver;
        if !(solver.tolerance.is_finite() && solver.tolerance > 0.0) {
            return Err(BondError::config(format!(
                "solver.tolerance must be positive, got {}",
                solver.tolerance
            )));
        }
        if solver.max_iterations == 0 {
            return Err(BondError::config("solver.max_iterations must be at least 1"));
        }
        if let Some(guess) = solver.initial_guess {
            if !guess.is_finite() {
                return Err(BondError::config("solver.initial_guess must be finite"));
            }
        }
        Ok(())
    }
}
