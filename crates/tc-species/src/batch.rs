//! Property maps over many species at one temperature.

use std::collections::BTreeMap;

use tc_core::{Basis, PhysicalConstants, Prop, Temperature};

use crate::component::{Component, ComponentKey};
use crate::nasa::Property;
use crate::polynomial::PolynomialType;
use crate::range::{RangeBreaks, select_window};
use crate::store::CoefficientStore;
use crate::thermo::SpeciesThermo;

/// Which identifier keys the output map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdScheme {
    /// The id under the store's [`ComponentKey`].
    #[default]
    Component,
    /// `"{formula}-{state}"`, matching reaction stoichiometry keys.
    Reaction,
}

#[derive(Debug, Clone)]
pub struct SpeciesBatch {
    poly: PolynomialType,
    members: Vec<SpeciesThermo>,
}

impl SpeciesBatch {
    pub fn new(
        store: &dyn CoefficientStore,
        components: &[Component],
        key: ComponentKey,
        poly: PolynomialType,
        basis: Basis,
        constants: PhysicalConstants,
    ) -> Self {
        let members = components
            .iter()
            .map(|c| SpeciesThermo::new(store, c, key, poly, basis, constants))
            .collect();
        Self { poly, members }
    }

    pub fn members(&self) -> &[SpeciesThermo] {
        &self.members
    }

    fn key_of(member: &SpeciesThermo, scheme: IdScheme) -> String {
        match scheme {
            IdScheme::Component => member.id().to_string(),
            IdScheme::Reaction => member.reaction_id(),
        }
    }

    /// Evaluate `prop` for every member with one shared window selection.
    ///
    /// Members that cannot be resolved are left out of the map. Returns
    /// `None` only when no member resolved.
    pub fn calc(
        &self,
        t: &Temperature,
        prop: Property,
        scheme: IdScheme,
    ) -> Option<BTreeMap<String, Prop>> {
        let t_k = t.kelvin();
        let nominal = match select_window(t_k, RangeBreaks::for_type(self.poly)) {
            Ok(w) => w,
            Err(e) => {
                tracing::warn!(error = %e, "batch range selection failed");
                return None;
            }
        };

        let mut out = BTreeMap::new();
        for member in &self.members {
            match member.property_in(prop, t_k, nominal) {
                Some(value) => {
                    out.insert(Self::key_of(member, scheme), value);
                }
                None => {
                    tracing::warn!(component = %member.id(), %prop, t_k, "species omitted from batch");
                }
            }
        }

        (!out.is_empty()).then_some(out)
    }

    /// Molecular weights [g/mol] of members that have one.
    pub fn molecular_weights(&self, scheme: IdScheme) -> BTreeMap<String, f64> {
        self.members
            .iter()
            .filter_map(|m| Some((Self::key_of(m, scheme), m.molecular_weight()?)))
            .collect()
    }
}
