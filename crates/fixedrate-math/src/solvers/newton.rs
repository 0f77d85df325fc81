//! Newton-Raphson root-finding algorithm.

use log::{debug, trace, warn};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// and stops as soon as `|x_{n+1} - x_n| < config.tolerance`, returning
/// `x_{n+1}`.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Errors
///
/// - `MathError::DegenerateDerivative` if `f'(x_n)` is zero or not finite
/// - `MathError::NonConvergence` if the iteration cap is reached, an
///   iterate stops being finite, or `f` is not finite at an iterate (the
///   iterate left the domain of `f`)
///
/// # Example
///
/// ```rust
/// use fixedrate_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;
    let mut last_step = f64::NAN;

    for iteration in 0..config.max_iterations {
        let fx = f(x);
        if !fx.is_finite() {
            warn!("newton: f({x}) = {fx} is not finite at iteration {iteration}");
            return Err(MathError::non_convergence(iteration, last_step));
        }

        let dfx = df(x);

        if dfx == 0.0 || !dfx.is_finite() {
            warn!("newton: degenerate derivative {dfx:e} at x = {x} (iteration {iteration})");
            return Err(MathError::DegenerateDerivative {
                iteration,
                value: dfx,
            });
        }

        let step = fx / dfx;
        let next = x - step;
        trace!("newton: iteration {iteration}: x = {x}, f = {fx:e}, step = {step:e}");

        if !next.is_finite() {
            warn!("newton: iterate diverged to {next} at iteration {iteration}");
            return Err(MathError::non_convergence(iteration + 1, step));
        }

        if step.abs() < config.tolerance {
            debug!("newton: converged to {next} after {} iterations", iteration + 1);
            return Ok(SolverResult {
                root: next,
                iterations: iteration + 1,
                residual: f(next),
            });
        }

        last_step = step;
        x = next;
    }

    warn!(
        "newton: no convergence after {} iterations (last step {last_step:e})",
        config.max_iterations
    );
    Err(MathError::non_convergence(config.max_iterations, last_step))
}
