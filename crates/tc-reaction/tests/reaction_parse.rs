//! Reaction string parsing through the public API.

use proptest::prelude::*;
use tc_reaction::{ParseOptions, ReactionAnalysis, ReactionError, ReactionMode};
use tc_species::Phase;

fn parse(equation: &str) -> Result<ReactionAnalysis, ReactionError> {
    ReactionAnalysis::parse(equation, None, &ParseOptions::default())
}

#[test]
fn methane_combustion() {
    let rxn = parse("CH4(g) + 2O2(g) <=> CO2(g) + 2H2O(l)").unwrap();
    assert_eq!(rxn.mode, ReactionMode::Reversible);
    assert_eq!(rxn.stoichiometry["CH4-g"], -1.0);
    assert_eq!(rxn.stoichiometry["O2-g"], -2.0);
    assert_eq!(rxn.stoichiometry["CO2-g"], 1.0);
    assert_eq!(rxn.stoichiometry["H2O-l"], 2.0);
    assert_eq!(rxn.phase, "gas-liquid");
    assert_eq!(rxn.reaction_coefficients, 0.0);
    assert_eq!(rxn.carbon_count["CH4-g"], 1.0);
}

#[test]
fn solids_and_fractional_coefficients() {
    let rxn = parse("Ca(OH)2(s) = CaO(s) + H2O(g)").unwrap();
    assert_eq!(rxn.mode, ReactionMode::Equilibrium);
    assert_eq!(rxn.reactants[0].molecule, "Ca(OH)2");
    assert_eq!(rxn.reactants[0].state, Phase::Solid);

    let rxn = parse("H2(g) + 0.5 O2(g) => H2O(g)").unwrap();
    assert_eq!(rxn.stoichiometry["O2-g"], -0.5);
    assert_eq!(rxn.reaction_coefficients, 0.5);
}

#[test]
fn default_phase_rule() {
    assert!(matches!(
        parse("N2 + 3 H2 => 2 NH3"),
        Err(ReactionError::MissingPhase { .. })
    ));
    let opts = ParseOptions {
        default_phase: Some(Phase::Gas),
    };
    let rxn = ReactionAnalysis::parse("N2 + 3 H2 => 2 NH3", None, &opts).unwrap();
    assert_eq!(rxn.stoichiometry["NH3-g"], 2.0);
    assert_eq!(rxn.reaction_coefficients, 2.0);
}

proptest! {
    #[test]
    fn coefficients_land_signed_in_stoichiometry(a in 1u32..20, b in 1u32..20, c in 1u32..20) {
        let equation = format!("{a} CO(g) + {b} O2(g) => {c} CO2(g)");
        let rxn = parse(&equation).unwrap();
        prop_assert_eq!(rxn.stoichiometry["CO-g"], -(a as f64));
        prop_assert_eq!(rxn.stoichiometry["O2-g"], -(b as f64));
        prop_assert_eq!(rxn.stoichiometry["CO2-g"], c as f64);
        prop_assert_eq!(rxn.reaction_coefficients, (a + b) as f64 - c as f64);
        prop_assert_eq!(rxn.carbon_count["CO2-g"], c as f64);
    }
}
