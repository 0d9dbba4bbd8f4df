//! A reaction bound to species data.
//!
//! [`ReactionSystem`] pairs a [`ReactionThermo`] with a [`SpeciesBatch`]
//! over the reaction's components, so reaction properties can be asked for
//! at a temperature instead of from precomputed species maps.

use std::collections::BTreeMap;

use tc_core::{Basis, Prop, Temperature};
use tc_species::{
    CoefficientStore, Component, ComponentKey, IdScheme, PolynomialType, Property, SpeciesBatch,
};

use crate::error::ReactionResult;
use crate::thermo::{EquilibriumTemperature, ReactionThermo, Sensitivities};

#[derive(Debug, Clone)]
pub struct ReactionSystem {
    thermo: ReactionThermo,
    batch: SpeciesBatch,
}

impl ReactionSystem {
    /// Resolve coefficient records for the components taking part in the
    /// reaction. Species values are always evaluated on a molar basis.
    pub fn new(
        thermo: ReactionThermo,
        store: &dyn CoefficientStore,
        components: &[Component],
        key: ComponentKey,
        poly: PolynomialType,
    ) -> Self {
        let members: Vec<Component> = components
            .iter()
            .filter(|c| thermo.analysis().stoichiometry.contains_key(&c.reaction_id()))
            .cloned()
            .collect();
        let batch = SpeciesBatch::new(store, &members, key, poly, Basis::Molar, *thermo.constants());
        Self { thermo, batch }
    }

    pub fn thermo(&self) -> &ReactionThermo {
        &self.thermo
    }

    /// Species values keyed by reaction id.
    pub fn species_values(&self, prop: Property, t: &Temperature) -> Option<BTreeMap<String, Prop>> {
        self.batch.calc(t, prop, IdScheme::Reaction)
    }

    /// ΔH°, ΔS°, ΔG° or ΔCp° at `t`.
    pub fn delta(&self, prop: Property, t: &Temperature) -> ReactionResult<Option<Prop>> {
        let Some(values) = self.species_values(prop, t) else {
            return Ok(None);
        };
        match prop {
            Property::Enthalpy => self.thermo.delta_h(&values),
            Property::Entropy => self.thermo.delta_s(&values),
            Property::Gibbs => self.thermo.delta_g(&values),
            Property::HeatCapacity => self.thermo.delta_cp(&values),
        }
    }

    /// Molar SI value of `delta(prop)` at `t_k`, for use inside integrands
    /// and objective functions.
    fn delta_value(&self, prop: Property, t_k: f64) -> Option<f64> {
        match self.delta(prop, &Temperature::kelvin_value(t_k)) {
            Ok(value) => value.map(|p| p.value),
            Err(e) => {
                tracing::warn!(error = %e, %prop, t_k, "reaction property failed");
                None
            }
        }
    }

    pub fn equilibrium_constant(&self, t: &Temperature) -> ReactionResult<Option<Prop>> {
        match self.delta(Property::Gibbs, t)? {
            Some(dg) => self.thermo.equilibrium_constant(&dg, t),
            None => Ok(None),
        }
    }

    fn reference_temperature(&self) -> Temperature {
        Temperature::kelvin_value(self.thermo.constants().t_ref)
    }

    /// Van't Hoff shortcut with ΔH° and Keq evaluated at the reference
    /// temperature.
    pub fn vant_hoff_shortcut(&self, t: &Temperature) -> ReactionResult<Option<Prop>> {
        let t_ref = self.reference_temperature();
        let (Some(dh_ref), Some(k_ref)) = (
            self.delta(Property::Enthalpy, &t_ref)?,
            self.equilibrium_constant(&t_ref)?,
        ) else {
            return Ok(None);
        };
        self.thermo.vant_hoff_shortcut(&k_ref, &dh_ref, t)
    }

    /// Integrated Van't Hoff relation over the species' own ΔH°(T).
    pub fn vant_hoff_exact(&self, t: &Temperature) -> ReactionResult<Option<Prop>> {
        let Some(k_ref) = self.equilibrium_constant(&self.reference_temperature())? else {
            return Ok(None);
        };
        self.thermo
            .vant_hoff_exact(&k_ref, |x| self.delta_value(Property::Enthalpy, x), t)
    }

    pub fn sensitivities(&self, t: &Temperature) -> ReactionResult<Option<Sensitivities>> {
        let (Some(dh), Some(dcp)) = (
            self.delta(Property::Enthalpy, t)?,
            self.delta(Property::HeatCapacity, t)?,
        ) else {
            return Ok(None);
        };
        self.thermo.sensitivities(&dh, &dcp, t)
    }

    /// See [`ReactionThermo::equilibrium_temperature`].
    pub fn equilibrium_temperature(
        &self,
        target: Option<f64>,
        bracket: (Temperature, Temperature),
    ) -> ReactionResult<Option<EquilibriumTemperature>> {
        self.thermo.equilibrium_temperature(
            |t| self.delta_value(Property::Gibbs, t),
            target,
            (bracket.0.kelvin(), bracket.1.kelvin()),
        )
    }
}
