//! Ideal-gas mixture properties over the store's components.
//!
//! Mole fractions come from the components themselves; components without a
//! fraction take no part in the mixture.

use std::collections::BTreeMap;

use serde::Serialize;
use tc_core::timing::timed;
use tc_core::units::Pressure;
use tc_core::{Basis, Prop, Temperature};
use tc_species::{IdScheme, IdealMixture, Property, SpeciesBatch};
use uom::si::pressure::pascal;

use crate::context::ThermoContext;
use crate::error::AppResult;

/// Every mixture property at one state point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixtureReport {
    pub temperature_k: f64,
    pub pressure_pa: f64,
    /// Normalized mole fractions by component id
    pub composition: BTreeMap<String, f64>,
    /// [g/mol]
    pub molecular_weight: Option<f64>,
    pub enthalpy: Option<Prop>,
    pub entropy: Option<Prop>,
    pub gibbs: Option<Prop>,
    pub heat_capacity: Option<Prop>,
    pub chemical_potentials: Option<BTreeMap<String, Prop>>,
}

struct MixtureState {
    mixture: IdealMixture,
    batch: SpeciesBatch,
}

impl MixtureState {
    fn new(ctx: &ThermoContext<'_>) -> AppResult<Self> {
        let key = ctx.key();
        let mixture = IdealMixture::from_components(ctx.components(), key)?;
        // mixing rules work on molar values; mass basis is applied last
        let batch = SpeciesBatch::new(
            &ctx.data.store,
            ctx.components(),
            key,
            ctx.settings.polynomial,
            Basis::Molar,
            ctx.settings.constants,
        );
        Ok(Self { mixture, batch })
    }

    fn values(&self, prop: Property, t: &Temperature) -> Option<BTreeMap<String, Prop>> {
        self.batch.calc(t, prop, IdScheme::Component)
    }

    fn molecular_weights(&self) -> BTreeMap<String, f64> {
        self.batch.molecular_weights(IdScheme::Component)
    }

    fn molar(
        &self,
        ctx: &ThermoContext<'_>,
        prop: Property,
        t: &Temperature,
        p: Pressure,
    ) -> AppResult<Option<Prop>> {
        let Some(values) = self.values(prop, t) else {
            return Ok(None);
        };
        let c = &ctx.settings.constants;
        let value = match prop {
            Property::Enthalpy => self.mixture.enthalpy(&values)?,
            Property::HeatCapacity => self.mixture.heat_capacity(&values)?,
            Property::Entropy => self.mixture.entropy(&values, p, c)?,
            Property::Gibbs => self.mixture.gibbs(&values, t.kelvin(), p, c)?,
        };
        Ok(value)
    }

    fn in_basis(&self, ctx: &ThermoContext<'_>, value: Option<Prop>) -> AppResult<Option<Prop>> {
        match (ctx.settings.basis, value) {
            (Basis::Mass, Some(molar)) => {
                Ok(self.mixture.to_mass_basis(&molar, &self.molecular_weights())?)
            }
            (_, value) => Ok(value),
        }
    }

    fn property(
        &self,
        ctx: &ThermoContext<'_>,
        prop: Property,
        t: &Temperature,
        p: Pressure,
    ) -> AppResult<Option<Prop>> {
        let molar = self.molar(ctx, prop, t, p)?;
        self.in_basis(ctx, molar)
    }
}

/// Mixture `prop` at `t` and `p`, on the basis the settings ask for.
pub fn mixture_property(
    ctx: &ThermoContext<'_>,
    prop: Property,
    t: &Temperature,
    p: Pressure,
) -> AppResult<Option<Prop>> {
    timed("mixture_property", || {
        MixtureState::new(ctx)?.property(ctx, prop, t, p)
    })
}

/// Chemical potential of every component [J/mol].
pub fn chemical_potentials(
    ctx: &ThermoContext<'_>,
    t: &Temperature,
    p: Pressure,
) -> AppResult<Option<BTreeMap<String, Prop>>> {
    timed("chemical_potentials", || {
        let state = MixtureState::new(ctx)?;
        let Some(g) = state.values(Property::Gibbs, t) else {
            return Ok(None);
        };
        Ok(state
            .mixture
            .chemical_potentials(&g, t.kelvin(), p, &ctx.settings.constants)?)
    })
}

pub fn mixture_report(
    ctx: &ThermoContext<'_>,
    t: &Temperature,
    p: Pressure,
) -> AppResult<MixtureReport> {
    timed("mixture_report", || {
        let state = MixtureState::new(ctx)?;
        let chemical_potentials = match state.values(Property::Gibbs, t) {
            Some(g) => state
                .mixture
                .chemical_potentials(&g, t.kelvin(), p, &ctx.settings.constants)?,
            None => None,
        };
        Ok(MixtureReport {
            temperature_k: t.kelvin(),
            pressure_pa: p.get::<pascal>(),
            composition: state
                .mixture
                .iter()
                .map(|(id, y)| (id.to_string(), y))
                .collect(),
            molecular_weight: state.mixture.molecular_weight(&state.molecular_weights()),
            enthalpy: state.property(ctx, Property::Enthalpy, t, p)?,
            entropy: state.property(ctx, Property::Entropy, t, p)?,
            gibbs: state.property(ctx, Property::Gibbs, t, p)?,
            heat_capacity: state.property(ctx, Property::HeatCapacity, t, p)?,
            chemical_potentials,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::store_io::StoreData;
    use tc_core::units::pa;
    use tc_species::{ComponentKey, fixtures};

    /// Equimolar H2/O2 keyed by formula-state.
    fn data() -> StoreData {
        StoreData {
            key: Some(ComponentKey::FormulaState),
            components: vec![
                fixtures::hydrogen().with_mole_fraction(1.0),
                fixtures::oxygen().with_mole_fraction(1.0),
                fixtures::water(),
            ],
            store: fixtures::store(),
        }
    }

    #[test]
    fn entropy_includes_mixing_term() {
        let data = data();
        let settings = Settings::default();
        let ctx = ThermoContext::new(&data, &settings);
        let t = Temperature::kelvin_value(800.0);
        let p = pa(settings.constants.p_ref);

        let s_mix = mixture_property(&ctx, Property::Entropy, &t, p).unwrap().unwrap();
        let s_h2 = crate::species_service::species_property(&ctx, "H2", Property::Entropy, &t)
            .unwrap()
            .unwrap();
        let s_o2 = crate::species_service::species_property(&ctx, "O2", Property::Entropy, &t)
            .unwrap()
            .unwrap();
        let expected = 0.5 * (s_h2.value + s_o2.value) + settings.constants.r * 2.0f64.ln();
        assert!((s_mix.value - expected).abs() < 1e-9);
    }

    #[test]
    fn report_on_mass_basis() {
        let data = data();
        let settings = Settings {
            basis: Basis::Mass,
            ..Settings::default()
        };
        let ctx = ThermoContext::new(&data, &settings);
        let report = mixture_report(&ctx, &Temperature::kelvin_value(1200.0), pa(2.0e5)).unwrap();

        let mw = report.molecular_weight.unwrap();
        assert!((mw - 0.5 * (fixtures::MW_H2 + fixtures::MW_O2)).abs() < 1e-9);
        assert_eq!(report.composition["H2O-g"], 0.0);
        assert_eq!(report.enthalpy.unwrap().unit, "J/kg");
        assert_eq!(report.heat_capacity.unwrap().unit, "J/kg.K");

        // water is absent, so its potential is the pure-component value
        let mu = report.chemical_potentials.unwrap();
        assert_eq!(mu.len(), 3);
        assert_eq!(mu["H2O-g"].unit, "J/mol");
    }

    #[test]
    fn no_fractions_means_no_value() {
        let data = StoreData::builtin().unwrap();
        let settings = Settings::default();
        let ctx = ThermoContext::new(&data, &settings);
        let h = mixture_property(
            &ctx,
            Property::Enthalpy,
            &Temperature::kelvin_value(500.0),
            pa(101_325.0),
        )
        .unwrap();
        assert_eq!(h, None);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn heat_capacity_lies_between_members(
                y_h2 in 0.01f64..1.0,
                y_o2 in 0.01f64..1.0,
                t_k in 300.0f64..5000.0,
            ) {
                let data = StoreData {
                    key: Some(ComponentKey::FormulaState),
                    components: vec![
                        fixtures::hydrogen().with_mole_fraction(y_h2),
                        fixtures::oxygen().with_mole_fraction(y_o2),
                    ],
                    store: fixtures::store(),
                };
                let settings = Settings::default();
                let ctx = ThermoContext::new(&data, &settings);
                let t = Temperature::kelvin_value(t_k);
                let p = pa(101_325.0);

                let cp = mixture_property(&ctx, Property::HeatCapacity, &t, p).unwrap().unwrap().value;
                let table = crate::species_service::species_table(&ctx, Property::HeatCapacity, &t)
                    .unwrap()
                    .unwrap();
                let (a, b) = (table["H2-g"].value, table["O2-g"].value);
                prop_assert!(cp >= a.min(b) - 1e-9 && cp <= a.max(b) + 1e-9);
            }
        }
    }
}
