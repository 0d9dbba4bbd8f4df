//! Ideal mixture of components defined by mole fractions.
//!
//! Per-species values arrive as maps keyed by the same identifiers the
//! mixture was built with. Only species with a non-zero mole fraction take
//! part in the mixing sums.
//!
//! Results use the two-channel convention of the rest of the workspace:
//! `Err` for unusable input (unknown unit strings, invalid fractions),
//! `Ok(None)` when a value is unavailable.

use std::collections::BTreeMap;

use tc_core::numeric::finite;
use tc_core::units::Pressure;
use tc_core::{PhysicalConstants, Prop, TcError, TcResult};
use uom::si::pressure::pascal;

use crate::component::{Component, ComponentKey};

/// Mole fractions, normalized to sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct IdealMixture {
    items: Vec<(String, f64)>,
}

impl IdealMixture {
    /// Build from components, keyed by `key`. Missing fractions count as zero.
    pub fn from_components(components: &[Component], key: ComponentKey) -> TcResult<Self> {
        Self::from_fractions(
            components
                .iter()
                .map(|c| (c.id(key), c.mole_fraction.unwrap_or(0.0)))
                .collect(),
        )
    }

    /// Build from `(id, fraction)` pairs.
    ///
    /// A negative or non-finite fraction is malformed input, not missing data,
    /// so it is an `Err` rather than a mixture that evaluates to `None`. If
    /// the fractions sum to zero every normalized fraction is zero and the
    /// mixture has no active species. Repeated ids are merged into one entry
    /// holding the summed fraction.
    pub fn from_fractions(fractions: Vec<(String, f64)>) -> TcResult<Self> {
        let mut items: Vec<(String, f64)> = Vec::with_capacity(fractions.len());
        let mut sum = 0.0;
        for (id, y) in fractions {
            if !y.is_finite() {
                return Err(TcError::NonFinite {
                    what: "mole fraction",
                    value: y,
                });
            }
            if y < 0.0 {
                return Err(TcError::InvalidArg {
                    what: "negative mole fraction",
                });
            }
            sum += y;
            match items.iter_mut().find(|(s, _)| *s == id) {
                Some((_, acc)) => {
                    tracing::warn!(species = %id, "duplicate mixture member; fractions merged");
                    *acc += y;
                }
                None => items.push((id, y)),
            }
        }

        for (_, y) in &mut items {
            *y = if sum > 0.0 { *y / sum } else { 0.0 };
        }
        Ok(Self { items })
    }

    /// Mole fraction of `id` (0.0 if not present).
    pub fn mole_fraction(&self, id: &str) -> f64 {
        self.items
            .iter()
            .find(|(s, _)| s == id)
            .map(|(_, y)| *y)
            .unwrap_or(0.0)
    }

    /// All species, including zero fractions, in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.items.iter().map(|(id, y)| (id.as_str(), *y))
    }

    fn active(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.iter().filter(|(_, y)| *y > 0.0)
    }

    /// `Σ y_i ln y_i` over active species.
    fn mixing_sum(&self) -> f64 {
        self.active().map(|(_, y)| y * y.ln()).sum()
    }

    /// `Σ y_i X_i` with `X_i` normalized to molar SI.
    fn weighted_sum(&self, values: &BTreeMap<String, Prop>) -> TcResult<Option<f64>> {
        let mut any = false;
        let mut sum = 0.0;
        for (id, y) in self.active() {
            let Some(value) = values.get(id) else {
                tracing::debug!(species = id, "mixture member missing from property map");
                return Ok(None);
            };
            sum += y * value.to_si_molar()?.value;
            any = true;
        }
        Ok(if any { finite(sum) } else { None })
    }

    /// `H_mix = Σ y_i H_i` [J/mol]
    pub fn enthalpy(&self, h: &BTreeMap<String, Prop>) -> TcResult<Option<Prop>> {
        Ok(self.weighted_sum(h)?.map(Prop::j_per_mol))
    }

    /// `Cp_mix = Σ y_i Cp_i` [J/(mol·K)]
    pub fn heat_capacity(&self, cp: &BTreeMap<String, Prop>) -> TcResult<Option<Prop>> {
        Ok(self.weighted_sum(cp)?.map(Prop::j_per_mol_k))
    }

    /// `S_mix = Σ y_i S_i − R Σ y_i ln y_i − R ln(P/P_ref)` [J/(mol·K)]
    pub fn entropy(
        &self,
        s: &BTreeMap<String, Prop>,
        p: Pressure,
        constants: &PhysicalConstants,
    ) -> TcResult<Option<Prop>> {
        let Some(sum) = self.weighted_sum(s)? else {
            return Ok(None);
        };
        let r = constants.r;
        let value = sum - r * self.mixing_sum() - r * constants.ln_pressure_ratio(p.get::<pascal>());
        Ok(finite(value).map(Prop::j_per_mol_k))
    }

    /// `G_mix = Σ y_i G_i + R T (Σ y_i ln y_i + ln(P/P_ref))` [J/mol]
    pub fn gibbs(
        &self,
        g: &BTreeMap<String, Prop>,
        t_k: f64,
        p: Pressure,
        constants: &PhysicalConstants,
    ) -> TcResult<Option<Prop>> {
        let Some(sum) = self.weighted_sum(g)? else {
            return Ok(None);
        };
        let rt = constants.r * t_k;
        let value = sum + rt * (self.mixing_sum() + constants.ln_pressure_ratio(p.get::<pascal>()));
        Ok(finite(value).map(Prop::j_per_mol))
    }

    /// `μ_i = G_i + R T (ln y_i + ln(P/P_ref))` for every species with a
    /// Gibbs value.
    ///
    /// `ln y_i` is taken as 0 when `y_i = 0`, so an absent species reports
    /// its pressure-corrected pure-component Gibbs energy instead of −∞.
    pub fn chemical_potentials(
        &self,
        g: &BTreeMap<String, Prop>,
        t_k: f64,
        p: Pressure,
        constants: &PhysicalConstants,
    ) -> TcResult<Option<BTreeMap<String, Prop>>> {
        let rt = constants.r * t_k;
        let ln_p = constants.ln_pressure_ratio(p.get::<pascal>());

        let mut out = BTreeMap::new();
        for (id, y) in self.iter() {
            let Some(gi) = g.get(id) else {
                if y > 0.0 {
                    tracing::debug!(species = id, "mixture member missing from Gibbs map");
                    return Ok(None);
                }
                continue;
            };
            let ln_y = if y > 0.0 { y.ln() } else { 0.0 };
            let Some(mu) = finite(gi.to_si_molar()?.value + rt * (ln_y + ln_p)) else {
                return Ok(None);
            };
            out.insert(id.to_string(), Prop::j_per_mol(mu));
        }
        Ok((!out.is_empty()).then_some(out))
    }

    /// Mole-fraction-weighted molecular weight [g/mol].
    pub fn molecular_weight(&self, mw: &BTreeMap<String, f64>) -> Option<f64> {
        let mut any = false;
        let mut sum = 0.0;
        for (id, y) in self.active() {
            sum += y * mw.get(id)?;
            any = true;
        }
        if any { finite(sum).filter(|m| *m > 0.0) } else { None }
    }

    /// Convert a molar mixture property to mass basis.
    pub fn to_mass_basis(&self, value: &Prop, mw: &BTreeMap<String, f64>) -> TcResult<Option<Prop>> {
        match self.molecular_weight(mw) {
            Some(m) => Ok(Some(value.to_mass_basis(m)?)),
            None => Ok(None),
        }
    }
}
