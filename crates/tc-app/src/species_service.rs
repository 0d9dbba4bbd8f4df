//! Single-species and batch property queries.

use std::collections::BTreeMap;

use serde::Serialize;
use tc_core::timing::timed;
use tc_core::{Prop, Temperature};
use tc_species::{IdScheme, Property, SpeciesBatch, TemperatureSweep};

use crate::context::ThermoContext;
use crate::error::AppResult;

/// One point of a property series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub temperature_k: f64,
    pub value: Option<Prop>,
}

/// Static data known about a species in the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesSummary {
    pub id: String,
    pub reaction_id: String,
    pub has_records: bool,
    pub molecular_weight: Option<f64>,
    pub formation_enthalpy: Option<Prop>,
}

pub fn species_property(
    ctx: &ThermoContext<'_>,
    selector: &str,
    prop: Property,
    t: &Temperature,
) -> AppResult<Option<Prop>> {
    timed("species_property", || {
        let species = ctx.species(selector)?;
        let value = species.property(prop, t);
        if value.is_none() {
            tracing::info!(component = species.id(), %prop, %t, "species property unavailable");
        }
        Ok(value)
    })
}

/// Evaluate `prop` along `sweep`.
pub fn species_series(
    ctx: &ThermoContext<'_>,
    selector: &str,
    prop: Property,
    sweep: &TemperatureSweep,
) -> AppResult<Vec<SeriesPoint>> {
    timed("species_series", || {
        let species = ctx.species(selector)?;
        let temperatures = sweep.points();
        let values = species.property_series(prop, &temperatures);
        tracing::debug!(component = species.id(), %prop, %sweep, "evaluated sweep");
        Ok(temperatures
            .iter()
            .zip(values)
            .map(|(t, value)| SeriesPoint {
                temperature_k: t.kelvin(),
                value,
            })
            .collect())
    })
}

/// `prop` for every component in the store, keyed by component id.
pub fn species_table(
    ctx: &ThermoContext<'_>,
    prop: Property,
    t: &Temperature,
) -> AppResult<Option<BTreeMap<String, Prop>>> {
    timed("species_table", || {
        let batch = SpeciesBatch::new(
            &ctx.data.store,
            ctx.components(),
            ctx.key(),
            ctx.settings.polynomial,
            ctx.settings.basis,
            ctx.settings.constants,
        );
        Ok(batch.calc(t, prop, IdScheme::Component))
    })
}

pub fn species_summary(ctx: &ThermoContext<'_>, selector: &str) -> AppResult<SpeciesSummary> {
    let species = ctx.species(selector)?;
    Ok(SpeciesSummary {
        id: species.id().to_string(),
        reaction_id: species.reaction_id(),
        has_records: species.has_records(),
        molecular_weight: species.molecular_weight(),
        formation_enthalpy: species.formation_enthalpy(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::settings::Settings;
    use crate::store_io::StoreData;
    use tc_core::Basis;
    use tc_species::SweepType;

    fn run<T>(settings: Settings, f: impl FnOnce(&ThermoContext<'_>) -> T) -> T {
        let data = StoreData::builtin().unwrap();
        f(&ThermoContext::new(&data, &settings))
    }

    #[test]
    fn water_enthalpy_at_reference() {
        let h = run(Settings::default(), |ctx| {
            species_property(ctx, "water", Property::Enthalpy, &Temperature::kelvin_value(298.15))
        })
        .unwrap()
        .unwrap();
        assert!((h.value + 241_826.0).abs() < 10.0);
    }

    #[test]
    fn mass_basis_follows_settings() {
        let settings = Settings {
            basis: Basis::Mass,
            ..Settings::default()
        };
        let h = run(settings, |ctx| {
            species_property(ctx, "H2O", Property::Enthalpy, &Temperature::kelvin_value(298.15))
        })
        .unwrap()
        .unwrap();
        assert_eq!(h.unit, "J/kg");
        assert!((h.value + 241_826.0 / 0.018_015_28).abs() < 1e3);
    }

    #[test]
    fn unknown_component_is_an_error() {
        let err = run(Settings::default(), |ctx| {
            species_property(ctx, "argon", Property::Enthalpy, &Temperature::kelvin_value(300.0))
        })
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn series_and_table() {
        let sweep = TemperatureSweep::new(
            Temperature::kelvin_value(300.0),
            Temperature::kelvin_value(3000.0),
            10,
            SweepType::Logarithmic,
        )
        .unwrap();
        let series = run(Settings::default(), |ctx| {
            species_series(ctx, "oxygen", Property::HeatCapacity, &sweep)
        })
        .unwrap();
        assert_eq!(series.len(), 10);
        assert!(series.iter().all(|p| p.value.is_some()));
        assert_eq!(series[9].temperature_k, 3000.0);

        // NASA9 fixtures cover H2, O2 and H2O only
        let table = run(Settings::default(), |ctx| {
            species_table(ctx, Property::Entropy, &Temperature::kelvin_value(500.0))
        })
        .unwrap()
        .unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.contains_key("H2O-g"));
    }
}
