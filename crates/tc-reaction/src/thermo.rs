//! Reaction thermodynamics over a resolved stoichiometry.
//!
//! All operations return `ReactionResult<Option<_>>`: `Err` for unusable
//! input (unknown unit strings, unresolved components), `Ok(None)` when a
//! value cannot be computed (missing species, non-finite arithmetic, no
//! root in the bracket).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tc_core::numeric::{finite, positive_finite};
use tc_core::prop::unit;
use tc_core::{MolarUnit, PhysicalConstants, Prop, TcError, Temperature};
use tc_solver::{BisectionConfig, QuadratureConfig, bisect, trapezoid};

use crate::analysis::ReactionAnalysis;
use crate::error::{ReactionError, ReactionResult};

/// Temperature derivatives of the equilibrium constant and reaction
/// properties at one temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensitivities {
    /// `d(ln K)/dT = ΔH/(R T²)` [1/K]
    pub dlnk_dt: Prop,
    /// `d(ln K)/d(1/T) = −ΔH/R` [K]
    pub dlnk_dinv_t: Prop,
    /// `∂(ln K)/∂(ΔH) = 1/(R T)` [mol/J]
    pub dlnk_ddh: Prop,
    /// `d(ΔH)/dT = ΔCp` [J/(mol·K)]
    pub ddh_dt: Prop,
    /// `d(ΔS)/dT = ΔCp/T` [J/(mol·K²)]
    pub dds_dt: Prop,
    /// `d²(ln K)/dT² = ΔCp/(R T²) − 2ΔH/(R T³)` [1/K²]
    pub d2lnk_dt2: Prop,
}

/// Result of an equilibrium-temperature search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumTemperature {
    pub temperature: Temperature,
    pub iterations: usize,
    /// False when the iteration cap was hit before the bracket shrank
    /// below tolerance
    pub converged: bool,
}

#[derive(Debug, Clone)]
pub struct ReactionThermo {
    analysis: ReactionAnalysis,
    constants: PhysicalConstants,
    bisection: BisectionConfig,
    quadrature: QuadratureConfig,
}

/// Normalize to `J/mol` (or `J/mol.K` when `per_kelvin`), rejecting the
/// other kind.
fn si_value(prop: &Prop, per_kelvin: bool) -> ReactionResult<f64> {
    let parsed: MolarUnit = prop.unit.parse()?;
    if parsed.per_kelvin != per_kelvin {
        return Err(TcError::UnsupportedUnit {
            unit: prop.unit.clone(),
            reason: if per_kelvin {
                "expected an entropy or heat-capacity unit"
            } else {
                "expected an energy unit"
            },
        }
        .into());
    }
    Ok(prop.to_si_molar()?.value)
}

impl ReactionThermo {
    /// Fails unless every participant resolved to a supplied component.
    pub fn new(analysis: ReactionAnalysis, constants: PhysicalConstants) -> ReactionResult<Self> {
        if !analysis.components_resolved {
            return Err(ReactionError::UnresolvedComponents {
                missing: analysis.unresolved.clone(),
            });
        }
        Ok(Self {
            analysis,
            constants,
            bisection: BisectionConfig::default(),
            quadrature: QuadratureConfig::default(),
        })
    }

    pub fn with_bisection(mut self, config: BisectionConfig) -> Self {
        self.bisection = config;
        self
    }

    pub fn with_quadrature(mut self, config: QuadratureConfig) -> Self {
        self.quadrature = config;
        self
    }

    pub fn analysis(&self) -> &ReactionAnalysis {
        &self.analysis
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// `Σ ν_i X_i` over the stoichiometry.
    fn delta(&self, values: &BTreeMap<String, Prop>, per_kelvin: bool) -> ReactionResult<Option<f64>> {
        let mut sum = 0.0;
        for (id, nu) in &self.analysis.stoichiometry {
            let Some(value) = values.get(id) else {
                tracing::debug!(species = %id, equation = %self.analysis.equation, "missing species property");
                return Ok(None);
            };
            sum += nu * si_value(value, per_kelvin)?;
        }
        Ok(finite(sum))
    }

    /// Standard reaction enthalpy ΔH° [J/mol].
    pub fn delta_h(&self, h: &BTreeMap<String, Prop>) -> ReactionResult<Option<Prop>> {
        Ok(self.delta(h, false)?.map(Prop::j_per_mol))
    }

    /// Standard reaction entropy ΔS° [J/(mol·K)].
    pub fn delta_s(&self, s: &BTreeMap<String, Prop>) -> ReactionResult<Option<Prop>> {
        Ok(self.delta(s, true)?.map(Prop::j_per_mol_k))
    }

    /// Standard reaction Gibbs energy ΔG° [J/mol].
    pub fn delta_g(&self, g: &BTreeMap<String, Prop>) -> ReactionResult<Option<Prop>> {
        Ok(self.delta(g, false)?.map(Prop::j_per_mol))
    }

    /// Reaction heat capacity change ΔCp° [J/(mol·K)].
    pub fn delta_cp(&self, cp: &BTreeMap<String, Prop>) -> ReactionResult<Option<Prop>> {
        Ok(self.delta(cp, true)?.map(Prop::j_per_mol_k))
    }

    /// `Keq = exp(−ΔG°/(R T))`
    pub fn equilibrium_constant(&self, dg: &Prop, t: &Temperature) -> ReactionResult<Option<Prop>> {
        let dg = si_value(dg, false)?;
        let Some(t_k) = positive_finite(t.kelvin()) else {
            return Ok(None);
        };
        Ok(finite((-dg / (self.constants.r * t_k)).exp()).map(Prop::dimensionless))
    }

    /// `Keq(T) = Keq_ref · exp[(−ΔH°_ref/R)(1/T − 1/T_ref)]`
    pub fn vant_hoff_shortcut(
        &self,
        keq_ref: &Prop,
        dh_ref: &Prop,
        t: &Temperature,
    ) -> ReactionResult<Option<Prop>> {
        let dh = si_value(dh_ref, false)?;
        let (Some(k_ref), Some(t_k)) = (positive_finite(keq_ref.value), positive_finite(t.kelvin()))
        else {
            return Ok(None);
        };
        let exponent = (-dh / self.constants.r) * (1.0 / t_k - 1.0 / self.constants.t_ref);
        Ok(finite(k_ref * exponent.exp()).map(Prop::dimensionless))
    }

    /// Integrated Van't Hoff relation:
    /// `ln K(T) = ln K_ref + ∫_{T_ref}^{T} ΔH(T')/(R T'²) dT'`.
    ///
    /// `dh_of_t` returns ΔH in J/mol at a temperature in kelvin.
    pub fn vant_hoff_exact<F>(&self, keq_ref: &Prop, dh_of_t: F, t: &Temperature) -> ReactionResult<Option<Prop>>
    where
        F: Fn(f64) -> Option<f64>,
    {
        let (Some(k_ref), Some(t_k)) = (positive_finite(keq_ref.value), positive_finite(t.kelvin()))
        else {
            return Ok(None);
        };
        let r = self.constants.r;
        let integrand = |x: f64| dh_of_t(x).map(|dh| dh / (r * x * x));
        let integral = match trapezoid(integrand, self.constants.t_ref, t_k, &self.quadrature) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!(error = %e, "Van't Hoff integration failed");
                return Ok(None);
            }
        };
        Ok(finite((k_ref.ln() + integral).exp()).map(Prop::dimensionless))
    }

    /// Closed-form sensitivities from ΔH and ΔCp at `t`.
    pub fn sensitivities(
        &self,
        dh: &Prop,
        dcp: &Prop,
        t: &Temperature,
    ) -> ReactionResult<Option<Sensitivities>> {
        let dh = si_value(dh, false)?;
        let dcp = si_value(dcp, true)?;
        let Some(t_k) = positive_finite(t.kelvin()) else {
            return Ok(None);
        };
        let r = self.constants.r;

        let values = [
            dh / (r * t_k * t_k),
            -dh / r,
            1.0 / (r * t_k),
            dcp,
            dcp / t_k,
            dcp / (r * t_k * t_k) - 2.0 * dh / (r * t_k.powi(3)),
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Ok(None);
        }

        Ok(Some(Sensitivities {
            dlnk_dt: Prop::new(values[0], unit::PER_K),
            dlnk_dinv_t: Prop::new(values[1], unit::KELVIN),
            dlnk_ddh: Prop::new(values[2], unit::MOL_PER_J),
            ddh_dt: Prop::new(values[3], unit::J_PER_MOL_K),
            dds_dt: Prop::new(values[4], unit::J_PER_MOL_K2),
            d2lnk_dt2: Prop::new(values[5], unit::PER_K2),
        }))
    }

    /// Temperature in `[low, high]` kelvin where `Keq(T) = target`
    /// (`Keq = 1`, i.e. ΔG° = 0, when `target` is `None`).
    ///
    /// Bisects `f(T) = ΔG°(T) + R T ln(target)`; `dg_of_t` returns ΔG° in
    /// J/mol.
    pub fn equilibrium_temperature<F>(
        &self,
        dg_of_t: F,
        target: Option<f64>,
        bracket: (f64, f64),
    ) -> ReactionResult<Option<EquilibriumTemperature>>
    where
        F: Fn(f64) -> Option<f64>,
    {
        let ln_target = match target {
            None => 0.0,
            Some(k) if k.is_finite() && k > 0.0 => k.ln(),
            Some(k) => {
                tracing::warn!(target = k, "target Keq must be positive and finite");
                return Ok(None);
            }
        };
        let r = self.constants.r;
        let f = |t: f64| dg_of_t(t).map(|dg| dg + r * t * ln_target);

        match bisect(f, bracket.0, bracket.1, &self.bisection) {
            Ok(res) => Ok(Some(EquilibriumTemperature {
                temperature: Temperature::kelvin_value(res.root),
                iterations: res.iterations,
                converged: res.converged,
            })),
            Err(e) => {
                tracing::debug!(error = %e, equation = %self.analysis.equation, "no equilibrium temperature");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ParseOptions;
    use tc_species::{Component, Phase};

    fn water_thermo() -> ReactionThermo {
        let comps: Vec<Component> = ["H2", "O2", "H2O"]
            .into_iter()
            .map(|f| Component::new(f, f, Phase::Gas))
            .collect();
        let analysis = ReactionAnalysis::parse(
            "2 H2(g) + O2(g) => 2 H2O(g)",
            Some(&comps),
            &ParseOptions::default(),
        )
        .unwrap();
        ReactionThermo::new(analysis, PhysicalConstants::default()).unwrap()
    }

    fn map(entries: &[(&str, f64, &str)]) -> BTreeMap<String, Prop> {
        entries
            .iter()
            .map(|(k, v, u)| (k.to_string(), Prop::new(*v, *u)))
            .collect()
    }

    #[test]
    fn unresolved_components_fail_construction() {
        let analysis =
            ReactionAnalysis::parse("2 H2(g) + O2(g) => 2 H2O(g)", None, &ParseOptions::default())
                .unwrap();
        let err = ReactionThermo::new(analysis, PhysicalConstants::default()).unwrap_err();
        assert!(matches!(err, ReactionError::UnresolvedComponents { missing } if missing.len() == 3));
    }

    #[test]
    fn delta_normalizes_mixed_units() {
        let rt = water_thermo();
        let h = map(&[
            ("H2-g", 0.0, "J/mol"),
            ("O2-g", 0.0, "kJ/mol"),
            ("H2O-g", -241.826, "kJ/mol"),
        ]);
        let dh = rt.delta_h(&h).unwrap().unwrap();
        assert!((dh.value + 483_652.0).abs() < 1e-6);
        assert_eq!(dh.unit, "J/mol");
    }

    #[test]
    fn missing_species_is_unavailable() {
        let rt = water_thermo();
        let h = map(&[("H2-g", 0.0, "J/mol"), ("H2O-g", -241_826.0, "J/mol")]);
        assert_eq!(rt.delta_h(&h).unwrap(), None);
    }

    #[test]
    fn wrong_unit_kind_is_fatal() {
        let rt = water_thermo();
        let s = map(&[
            ("H2-g", 130.0, "J/mol"),
            ("O2-g", 205.0, "J/mol.K"),
            ("H2O-g", 188.0, "J/mol.K"),
        ]);
        assert!(rt.delta_s(&s).is_err());
        let bad = map(&[
            ("H2-g", 1.0, "J/mol/K"),
            ("O2-g", 1.0, "J/mol.K"),
            ("H2O-g", 1.0, "J/mol.K"),
        ]);
        assert!(matches!(
            rt.delta_cp(&bad),
            Err(ReactionError::Core(TcError::UnsupportedUnit { .. }))
        ));
    }

    #[test]
    fn keq_sign_follows_delta_g() {
        let rt = water_thermo();
        let t = Temperature::kelvin_value(1000.0);
        let k = |dg: f64| rt.equilibrium_constant(&Prop::j_per_mol(dg), &t).unwrap().unwrap().value;
        assert!(k(10_000.0) < 1.0);
        assert!(k(-10_000.0) > 1.0);
        assert_eq!(k(0.0), 1.0);
        assert_eq!(
            rt.equilibrium_constant(&Prop::j_per_mol(1.0), &Temperature::kelvin_value(0.0))
                .unwrap(),
            None
        );
    }

    #[test]
    fn vant_hoff_shortcut_matches_exact_for_constant_dh() {
        let rt = water_thermo();
        let k_ref = Prop::dimensionless(1e5);
        let dh = -40_000.0;
        let t = Temperature::kelvin_value(700.0);
        let short = rt
            .vant_hoff_shortcut(&k_ref, &Prop::j_per_mol(dh), &t)
            .unwrap()
            .unwrap();
        let exact = rt
            .vant_hoff_exact(&k_ref, |_| Some(dh), &t)
            .unwrap()
            .unwrap();
        assert!((short.value - exact.value).abs() / short.value < 1e-3);
        assert!(short.value < k_ref.value, "exothermic K falls with T");
    }

    #[test]
    fn vant_hoff_exact_fails_on_unavailable_dh() {
        let rt = water_thermo();
        let out = rt
            .vant_hoff_exact(
                &Prop::dimensionless(1.0),
                |t| (t < 500.0).then_some(-1.0),
                &Temperature::kelvin_value(900.0),
            )
            .unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn sensitivity_bundle() {
        let rt = water_thermo();
        let r = rt.constants().r;
        let t = 1000.0;
        let s = rt
            .sensitivities(
                &Prop::j_per_mol(-500_000.0),
                &Prop::j_per_mol_k(-20.0),
                &Temperature::kelvin_value(t),
            )
            .unwrap()
            .unwrap();
        assert!((s.dlnk_dt.value - (-500_000.0 / (r * t * t))).abs() < 1e-12);
        assert_eq!(s.dlnk_dt.unit, "1/K");
        assert_eq!(s.dlnk_dinv_t.unit, "K");
        assert_eq!(s.dlnk_ddh.unit, "mol/J");
        assert_eq!(s.ddh_dt.value, -20.0);
        assert_eq!(s.dds_dt.unit, "J/mol.K^2");
        assert!((s.dds_dt.value + 0.02).abs() < 1e-15);
        assert_eq!(s.d2lnk_dt2.unit, "1/K^2");
    }

    #[test]
    fn equilibrium_temperature_on_linear_dg() {
        let rt = water_thermo();
        // ΔG = ΔH − TΔS with ΔH = −100 kJ, ΔS = −100 J/K: root at 1000 K
        let dg = |t: f64| Some(-100_000.0 + 100.0 * t);
        let res = rt
            .equilibrium_temperature(dg, None, (300.0, 3000.0))
            .unwrap()
            .unwrap();
        assert!(res.converged);
        assert!((res.temperature.value - 1000.0).abs() < 1e-4);

        // Keq = e at f(T) = ΔG + RT
        let r = rt.constants().r;
        let res = rt
            .equilibrium_temperature(dg, Some(std::f64::consts::E), (300.0, 3000.0))
            .unwrap()
            .unwrap();
        let expected = 100_000.0 / (100.0 + r);
        assert!((res.temperature.value - expected).abs() < 1e-4);
    }

    #[test]
    fn equilibrium_temperature_degrades_to_none() {
        let rt = water_thermo();
        let dg = |t: f64| Some(-100_000.0 + 100.0 * t);
        assert_eq!(rt.equilibrium_temperature(dg, None, (1500.0, 3000.0)).unwrap(), None);
        assert_eq!(rt.equilibrium_temperature(dg, Some(-1.0), (300.0, 3000.0)).unwrap(), None);
    }
}
