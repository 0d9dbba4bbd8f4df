//! Per-species property evaluation.
//!
//! [`SpeciesThermo`] resolves a component's coefficient records once, at
//! construction, and answers property queries from that cache. Every query
//! failure (no record in any window, non-finite result, bad basis conversion)
//! is reported as `None`.

use rayon::prelude::*;
use tc_core::{Basis, PhysicalConstants, Prop, Temperature};

use crate::component::{Component, ComponentKey};
use crate::nasa::Property;
use crate::polynomial::{PolynomialRecord, PolynomialType, RangeTag, TemperatureWindow};
use crate::range::{RangeBreaks, fallback_order, select_window};
use crate::store::CoefficientStore;

#[derive(Debug, Clone)]
pub struct SpeciesThermo {
    component: Component,
    id: String,
    poly: PolynomialType,
    basis: Basis,
    constants: PhysicalConstants,
    /// Validated records indexed by [`TemperatureWindow::index`].
    records: [Option<PolynomialRecord>; 3],
}

impl SpeciesThermo {
    /// Look up and validate every window of `poly` for `component`.
    ///
    /// Performs at most three store lookups. Records that fail validation are
    /// dropped with a warning.
    pub fn new(
        store: &dyn CoefficientStore,
        component: &Component,
        key: ComponentKey,
        poly: PolynomialType,
        basis: Basis,
        constants: PhysicalConstants,
    ) -> Self {
        let id = component.id(key);
        let records = TemperatureWindow::ALL.map(|window| {
            let tag = RangeTag::new(poly, window);
            let raw = match store.lookup(&id, tag) {
                Some(raw) => raw,
                None => {
                    tracing::debug!(component = %id, %tag, "no coefficient record");
                    return None;
                }
            };
            match PolynomialRecord::validate(&raw, tag) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(component = %id, %tag, error = %e, "rejected coefficient record");
                    None
                }
            }
        });

        Self {
            component: component.clone(),
            id,
            poly,
            basis,
            constants,
            records,
        }
    }

    /// Identifier under the key scheme the store was queried with.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `"{formula}-{state}"`
    pub fn reaction_id(&self) -> String {
        self.component.reaction_id()
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    pub fn poly_type(&self) -> PolynomialType {
        self.poly
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// True when at least one window has a usable record.
    pub fn has_records(&self) -> bool {
        self.records.iter().any(Option::is_some)
    }

    /// First usable record along the fallback order for `nominal`.
    pub fn resolve(&self, nominal: TemperatureWindow) -> Option<&PolynomialRecord> {
        for window in fallback_order(nominal) {
            if let Some(record) = &self.records[window.index()] {
                if window != nominal {
                    tracing::debug!(
                        component = %self.id,
                        nominal = ?nominal,
                        used = ?window,
                        "range fallback"
                    );
                }
                return Some(record);
            }
        }
        None
    }

    /// Evaluate `prop` at `t`, selecting the window from `t` itself.
    pub fn property(&self, prop: Property, t: &Temperature) -> Option<Prop> {
        let t_k = t.kelvin();
        let nominal = select_window(t_k, RangeBreaks::for_type(self.poly)).ok()?;
        self.property_in(prop, t_k, nominal)
    }

    /// Evaluate `prop` at `t_k` kelvin starting the fallback from `nominal`.
    pub fn property_in(
        &self,
        prop: Property,
        t_k: f64,
        nominal: TemperatureWindow,
    ) -> Option<Prop> {
        let record = self.resolve(nominal)?;
        let molar = prop.evaluate(&record.coefficients, t_k, self.constants.r)?;
        match self.basis {
            Basis::Molar => Some(molar),
            Basis::Mass => match molar.to_mass_basis(self.molecular_weight()?) {
                Ok(mass) => Some(mass),
                Err(e) => {
                    tracing::warn!(component = %self.id, error = %e, "mass-basis conversion failed");
                    None
                }
            },
        }
    }

    pub fn enthalpy(&self, t: &Temperature) -> Option<Prop> {
        self.property(Property::Enthalpy, t)
    }

    pub fn entropy(&self, t: &Temperature) -> Option<Prop> {
        self.property(Property::Entropy, t)
    }

    pub fn gibbs(&self, t: &Temperature) -> Option<Prop> {
        self.property(Property::Gibbs, t)
    }

    pub fn heat_capacity(&self, t: &Temperature) -> Option<Prop> {
        self.property(Property::HeatCapacity, t)
    }

    /// Evaluate `prop` at every temperature, each with its own window.
    pub fn property_series(&self, prop: Property, temperatures: &[Temperature]) -> Vec<Option<Prop>> {
        temperatures
            .par_iter()
            .map(|t| self.property(prop, t))
            .collect()
    }

    /// Molecular weight [g/mol]: the first validated record's, else the
    /// component's own value.
    ///
    /// Mass-basis species values and mixture mass conversion both use this.
    pub fn molecular_weight(&self) -> Option<f64> {
        self.records
            .iter()
            .flatten()
            .map(|r| r.molecular_weight)
            .next()
            .or_else(|| {
                self.component
                    .molecular_weight
                    .filter(|mw| mw.is_finite() && *mw > 0.0)
            })
    }

    /// Standard formation enthalpy from the first record that carries one.
    pub fn formation_enthalpy(&self) -> Option<Prop> {
        self.records
            .iter()
            .flatten()
            .find_map(|r| r.formation_enthalpy)
            .map(Prop::j_per_mol)
    }
}
