//! tc-species: single-species thermodynamic properties from NASA polynomials.
//!
//! Provides:
//! - Component definitions and identifier schemes
//! - Coefficient records (raw store form and validated form)
//! - The `CoefficientStore` lookup contract and an in-memory store
//! - NASA7/NASA9 polynomial evaluation (H, S, G, Cp)
//! - Temperature-range selection with fallback
//! - Per-species and batch property aggregation
//! - Temperature sweeps
//! - Ideal mixing rules
//!
//! # Example
//!
//! ```
//! use tc_core::{Basis, PhysicalConstants, Temperature};
//! use tc_species::{
//!     CoefficientRecord, Component, ComponentKey, InMemoryStore, Phase, PolynomialType,
//!     RangeTag, SpeciesThermo, TemperatureWindow,
//! };
//!
//! let water = Component::new("water", "H2O", Phase::Gas);
//! let mut store = InMemoryStore::new();
//! store.insert(
//!     "H2O-g",
//!     RangeTag::new(PolynomialType::Nasa7, TemperatureWindow::Low),
//!     CoefficientRecord::nasa7(
//!         [
//!             4.19864056, -2.0364341e-3, 6.52040211e-6, -5.48797062e-9,
//!             1.77197817e-12, -3.02937267e4, -8.49032208e-1,
//!         ],
//!         18.01528,
//!     ),
//! );
//! let species = SpeciesThermo::new(
//!     &store,
//!     &water,
//!     ComponentKey::FormulaState,
//!     PolynomialType::Nasa7,
//!     Basis::Molar,
//!     PhysicalConstants::default(),
//! );
//!
//! let h = species.enthalpy(&Temperature::kelvin_value(298.15)).unwrap();
//! assert!((h.value + 241_826.0).abs() < 20.0);
//! ```

pub mod batch;
pub mod component;
pub mod error;
#[cfg(any(test, feature = "fixtures"))]
#[doc(hidden)]
pub mod fixtures;
pub mod mixture;
pub mod nasa;
pub mod polynomial;
pub mod range;
pub mod store;
pub mod sweeps;
pub mod thermo;

// Re-exports for ergonomics
pub use batch::{IdScheme, SpeciesBatch};
pub use component::{Component, ComponentKey, Phase, component_id};
pub use error::{SpeciesError, SpeciesResult};
pub use mixture::IdealMixture;
pub use nasa::Property;
pub use polynomial::{
    CoefficientRecord, PolynomialCoefficients, PolynomialRecord, PolynomialType, RangeTag,
    TemperatureWindow,
};
pub use range::{RangeBreaks, fallback_order, select_range, select_window};
pub use store::{CoefficientStore, InMemoryStore};
pub use sweeps::{SweepType, TemperatureSweep};
pub use thermo::SpeciesThermo;
