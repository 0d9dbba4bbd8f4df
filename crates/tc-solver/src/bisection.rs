//! Bracketed bisection.

use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};

/// Bisection configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BisectionConfig {
    /// Maximum number of midpoint evaluations
    pub max_iterations: usize,
    /// Bracket width at which iteration stops, in the unit of `x`
    pub tolerance: f64,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-4,
        }
    }
}

/// Bisection result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionResult {
    /// Final midpoint, or the endpoint that was an exact root
    pub root: f64,
    /// Number of midpoint evaluations
    pub iterations: usize,
    /// Bracket width fell below tolerance (or an exact root was hit)
    pub converged: bool,
}

/// Find a root of `f` in `[low, high]`.
///
/// Requires `f(low)` and `f(high)` of opposite sign; an endpoint where `f`
/// is exactly zero is returned as-is with zero iterations. Hitting
/// `max_iterations` is not an error: the last midpoint comes back with
/// `converged = false`.
pub fn bisect<F>(f: F, low: f64, high: f64, config: &BisectionConfig) -> SolverResult<BisectionResult>
where
    F: Fn(f64) -> Option<f64>,
{
    if config.max_iterations == 0 {
        return Err(SolverError::InvalidConfig {
            what: "max_iterations must be positive",
        });
    }
    if !(config.tolerance.is_finite() && config.tolerance > 0.0) {
        return Err(SolverError::InvalidConfig {
            what: "tolerance must be positive and finite",
        });
    }
    if !(low.is_finite() && high.is_finite()) || low == high {
        return Err(SolverError::InvalidBracket { low, high });
    }
    let (mut lo, mut hi) = if low < high { (low, high) } else { (high, low) };

    let eval = |x: f64| -> SolverResult<f64> {
        f(x).filter(|v| v.is_finite())
            .ok_or(SolverError::NonFinite { at: x })
    };

    let mut f_lo = eval(lo)?;
    let f_hi = eval(hi)?;

    for (root, value) in [(lo, f_lo), (hi, f_hi)] {
        if value == 0.0 {
            return Ok(BisectionResult {
                root,
                iterations: 0,
                converged: true,
            });
        }
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(SolverError::NoSignChange {
            f_low: f_lo,
            f_high: f_hi,
        });
    }

    let mut iterations = 0;
    while iterations < config.max_iterations && hi - lo >= config.tolerance {
        iterations += 1;
        let mid = 0.5 * (lo + hi);
        let f_mid = eval(mid)?;
        if f_mid == 0.0 {
            tracing::debug!(root = mid, iterations, "bisection hit exact root");
            return Ok(BisectionResult {
                root: mid,
                iterations,
                converged: true,
            });
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    let converged = hi - lo < config.tolerance;
    let root = 0.5 * (lo + hi);
    if converged {
        tracing::debug!(root, iterations, "bisection converged");
    } else {
        tracing::warn!(root, iterations, width = hi - lo, "bisection stopped at max iterations");
    }
    Ok(BisectionResult {
        root,
        iterations,
        converged,
    })
}
