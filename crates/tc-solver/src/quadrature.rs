//! Composite trapezoidal quadrature.

use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadratureConfig {
    /// Number of equal-width panels
    pub panels: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self { panels: 200 }
    }
}

/// `∫ f dx` from `a` to `b`; `b < a` gives the negated integral.
///
/// Fails if `f` is unavailable or non-finite at any node.
pub fn trapezoid<F>(f: F, a: f64, b: f64, config: &QuadratureConfig) -> SolverResult<f64>
where
    F: Fn(f64) -> Option<f64>,
{
    if config.panels == 0 {
        return Err(SolverError::InvalidConfig {
            what: "panels must be positive",
        });
    }
    if !(a.is_finite() && b.is_finite()) {
        return Err(SolverError::InvalidBracket { low: a, high: b });
    }
    if a == b {
        return Ok(0.0);
    }

    let n = config.panels;
    let h = (b - a) / n as f64;
    let node = |i: usize| -> SolverResult<f64> {
        let x = if i == n { b } else { a + i as f64 * h };
        f(x).filter(|v| v.is_finite())
            .ok_or(SolverError::NonFinite { at: x })
    };

    let mut sum = 0.5 * (node(0)? + node(n)?);
    for i in 1..n {
        sum += node(i)?;
    }
    Ok(sum * h)
}
