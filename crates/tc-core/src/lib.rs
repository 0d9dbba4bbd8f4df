//! tc-core: stable foundation for thermochem.
//!
//! Contains:
//! - units (uom SI types, temperature scales, text parsing)
//! - numeric (float filters and comparison tolerances)
//! - constants (injectable physical constants)
//! - prop (value/unit envelope, unit normalization, mass-basis transform)
//! - error (shared error types)
//! - timing (opt-in operation timers)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod prop;
pub mod timing;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use constants::PhysicalConstants;
pub use error::{TcError, TcResult};
pub use numeric::*;
pub use prop::{Basis, MolarUnit, Prop};
pub use units::{TempUnit, Temperature};
