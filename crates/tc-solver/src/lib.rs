//! Scalar numerical methods for reaction thermodynamics.
//!
//! - Bracketed bisection for equilibrium temperatures
//! - Composite trapezoidal quadrature for the integrated Van't Hoff relation
//!
//! Objective functions return `Option<f64>`; `None` marks a point where the
//! underlying property is unavailable.

pub mod bisection;
pub mod error;
pub mod quadrature;

pub use bisection::{BisectionConfig, BisectionResult, bisect};
pub use error::{SolverError, SolverResult};
pub use quadrature::{QuadratureConfig, trapezoid};
