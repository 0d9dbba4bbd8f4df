//! End-to-end reaction thermodynamics against the fixture coefficient data.
//!
//! Expected values come from the same NASA7/NASA9 fits; tolerances cover
//! quadrature and bisection error only.

use tc_core::{PhysicalConstants, Temperature};
use tc_species::{Component, ComponentKey, PolynomialType, Property, fixtures};
use tc_reaction::{ParseOptions, ReactionAnalysis, ReactionError, ReactionSystem, ReactionThermo};

fn system(equation: &str, components: &[Component], poly: PolynomialType) -> ReactionSystem {
    let analysis =
        ReactionAnalysis::parse(equation, Some(components), &ParseOptions::default()).unwrap();
    let thermo = ReactionThermo::new(analysis, PhysicalConstants::default()).unwrap();
    ReactionSystem::new(
        thermo,
        &fixtures::store(),
        components,
        ComponentKey::FormulaState,
        poly,
    )
}

fn water_formation() -> ReactionSystem {
    system(
        "2 H2(g) + O2(g) => 2 H2O(g)",
        &[fixtures::hydrogen(), fixtures::oxygen(), fixtures::water()],
        PolynomialType::Nasa9,
    )
}

fn water_gas_shift() -> ReactionSystem {
    system(
        "CO(g) + H2O(g) <=> CO2(g) + H2(g)",
        &[
            fixtures::carbon_monoxide(),
            fixtures::water(),
            fixtures::carbon_dioxide(),
            fixtures::hydrogen(),
            fixtures::methane(),
        ],
        PolynomialType::Nasa7,
    )
}

#[test]
fn water_formation_at_1000k() {
    let sys = water_formation();
    let t = Temperature::kelvin_value(1000.0);

    let dh = sys.delta(Property::Enthalpy, &t).unwrap().unwrap();
    assert_eq!(dh.unit, "J/mol");
    assert!((dh.value + 495_708.0).abs() < 5.0, "dH = {}", dh.value);

    let dg = sys.delta(Property::Gibbs, &t).unwrap().unwrap();
    assert!((dg.value + 385_161.0).abs() < 5.0, "dG = {}", dg.value);

    let k = sys.equilibrium_constant(&t).unwrap().unwrap();
    assert_eq!(k.unit, "dimensionless");
    assert!(k.value > 1.0);
    assert!((k.value / 1.313e20 - 1.0).abs() < 0.01, "K = {}", k.value);
}

#[test]
fn water_formation_equilibrium_temperature() {
    let sys = water_formation();
    let res = sys
        .equilibrium_temperature(
            None,
            (Temperature::kelvin_value(3000.0), Temperature::kelvin_value(6000.0)),
        )
        .unwrap()
        .unwrap();
    assert!(res.converged);
    assert!((res.temperature.value - 4331.02).abs() < 0.05, "T = {}", res.temperature);
    assert!(res.iterations <= 30);

    // spontaneous over the whole bracket below the root
    let none = sys
        .equilibrium_temperature(
            None,
            (Temperature::kelvin_value(300.0), Temperature::kelvin_value(2000.0)),
        )
        .unwrap();
    assert!(none.is_none());
}

#[test]
fn water_gas_shift_reference_values() {
    let sys = water_gas_shift();
    let t_ref = Temperature::kelvin_value(298.15);
    let dh = sys.delta(Property::Enthalpy, &t_ref).unwrap().unwrap();
    assert!((dh.value + 41_153.8).abs() < 1.0, "dH = {}", dh.value);

    let k_ref = sys.equilibrium_constant(&t_ref).unwrap().unwrap();
    assert!((k_ref.value / 103_534.0 - 1.0).abs() < 1e-3, "K = {}", k_ref.value);

    let k_1000 = sys
        .equilibrium_constant(&Temperature::kelvin_value(1000.0))
        .unwrap()
        .unwrap();
    assert!((k_1000.value - 1.435).abs() < 0.005);
}

#[test]
fn water_gas_shift_vant_hoff() {
    let sys = water_gas_shift();
    let t = Temperature::kelvin_value(1000.0);

    let exact = sys.vant_hoff_exact(&t).unwrap().unwrap();
    assert!((exact.value - 1.435).abs() < 0.01, "exact = {}", exact.value);

    // constant-ΔH extrapolation from 298 K underestimates K here
    let short = sys.vant_hoff_shortcut(&t).unwrap().unwrap();
    assert!((short.value - 0.901).abs() < 0.01, "shortcut = {}", short.value);
}

#[test]
fn water_gas_shift_equilibrium_temperature_and_sensitivities() {
    let sys = water_gas_shift();
    let res = sys
        .equilibrium_temperature(
            Some(1.0),
            (Temperature::kelvin_value(500.0), Temperature::kelvin_value(1500.0)),
        )
        .unwrap()
        .unwrap();
    assert!((res.temperature.value - 1096.02).abs() < 0.01);

    let t = Temperature::kelvin_value(1000.0);
    let s = sys.sensitivities(&t).unwrap().unwrap();
    // exothermic: K falls with temperature
    assert!(s.dlnk_dt.value < 0.0);
    assert!((s.ddh_dt.value - 10.03).abs() < 0.01);
    assert!((s.dlnk_dinv_t.value - 34_762.6 / 8.314_462_618).abs() < 1.0);
}

#[test]
fn unresolved_reaction_is_rejected() {
    let comps = [fixtures::hydrogen(), fixtures::oxygen()];
    let analysis = ReactionAnalysis::parse(
        "2 H2(g) + O2(g) => 2 H2O(g)",
        Some(&comps),
        &ParseOptions::default(),
    )
    .unwrap();
    let err = ReactionThermo::new(analysis, PhysicalConstants::default()).unwrap_err();
    assert_eq!(
        err,
        ReactionError::UnresolvedComponents {
            missing: vec!["H2O-g".to_string()]
        }
    );
}

#[test]
fn species_without_data_make_properties_unavailable() {
    // resolved against the component list, but the store has no argon data
    let argon = Component::new("argon", "Ar", tc_species::Phase::Gas);
    let sys = system(
        "Ar(g) => Ar(g)",
        &[argon],
        PolynomialType::Nasa9,
    );
    let t = Temperature::kelvin_value(500.0);
    assert_eq!(sys.delta(Property::Enthalpy, &t).unwrap(), None);
    assert_eq!(sys.equilibrium_constant(&t).unwrap(), None);
}
