//! NASA7/NASA9 polynomial evaluation.
//!
//! All functions are pure and return molar SI values (`J/mol`, `J/mol.K`).
//! They return `None` for `T <= 0`, non-finite `T`, or any non-finite
//! intermediate.
//!
//! NASA9:
//! ```text
//! Cp/R  = a1 T^-2 + a2 T^-1 + a3 + a4 T + a5 T^2 + a6 T^3 + a7 T^4
//! H/RT  = -a1 T^-2 + a2 ln(T)/T + a3 + a4 T/2 + a5 T^2/3 + a6 T^3/4 + a7 T^4/5 + b1/T
//! S/R   = -a1 T^-2/2 - a2/T + a3 ln T + a4 T + a5 T^2/2 + a6 T^3/3 + a7 T^4/4 + b2
//! ```
//!
//! NASA7:
//! ```text
//! Cp/R  = a1 + a2 T + a3 T^2 + a4 T^3 + a5 T^4
//! H/RT  = a1 + a2 T/2 + a3 T^2/3 + a4 T^3/4 + a5 T^4/5 + a6/T
//! S/R   = a1 ln T + a2 T + a3 T^2/2 + a4 T^3/3 + a5 T^4/4 + a7
//! ```

use std::fmt;
use std::str::FromStr;

use tc_core::numeric::{finite, positive_finite};
use tc_core::prop::unit;
use tc_core::{Prop, TcError};

use crate::polynomial::PolynomialCoefficients;

/// Molar enthalpy [J/mol].
pub fn enthalpy(c: &PolynomialCoefficients, t: f64, r: f64) -> Option<f64> {
    let t = positive_finite(t)?;
    let h_rt = match c {
        PolynomialCoefficients::Nasa9 { a, b1, .. } => {
            -a[0] / (t * t)
                + a[1] * t.ln() / t
                + a[2]
                + a[3] * t / 2.0
                + a[4] * t.powi(2) / 3.0
                + a[5] * t.powi(3) / 4.0
                + a[6] * t.powi(4) / 5.0
                + b1 / t
        }
        PolynomialCoefficients::Nasa7 { a } => {
            a[0] + a[1] * t / 2.0
                + a[2] * t.powi(2) / 3.0
                + a[3] * t.powi(3) / 4.0
                + a[4] * t.powi(4) / 5.0
                + a[5] / t
        }
    };
    finite(r * t * finite(h_rt)?)
}

/// Molar absolute entropy [J/(mol·K)].
pub fn entropy(c: &PolynomialCoefficients, t: f64, r: f64) -> Option<f64> {
    let t = positive_finite(t)?;
    let s_r = match c {
        PolynomialCoefficients::Nasa9 { a, b2, .. } => {
            -a[0] / (2.0 * t * t) - a[1] / t
                + a[2] * t.ln()
                + a[3] * t
                + a[4] * t.powi(2) / 2.0
                + a[5] * t.powi(3) / 3.0
                + a[6] * t.powi(4) / 4.0
                + b2
        }
        PolynomialCoefficients::Nasa7 { a } => {
            a[0] * t.ln()
                + a[1] * t
                + a[2] * t.powi(2) / 2.0
                + a[3] * t.powi(3) / 3.0
                + a[4] * t.powi(4) / 4.0
                + a[6]
        }
    };
    finite(r * finite(s_r)?)
}

/// Molar isobaric heat capacity [J/(mol·K)].
pub fn heat_capacity(c: &PolynomialCoefficients, t: f64, r: f64) -> Option<f64> {
    let t = positive_finite(t)?;
    let cp_r = match c {
        PolynomialCoefficients::Nasa9 { a, .. } => {
            a[0] / (t * t)
                + a[1] / t
                + a[2]
                + a[3] * t
                + a[4] * t.powi(2)
                + a[5] * t.powi(3)
                + a[6] * t.powi(4)
        }
        PolynomialCoefficients::Nasa7 { a } => {
            a[0] + a[1] * t + a[2] * t.powi(2) + a[3] * t.powi(3) + a[4] * t.powi(4)
        }
    };
    finite(r * finite(cp_r)?)
}

/// Molar Gibbs energy `G = H - T·S` [J/mol].
pub fn gibbs(c: &PolynomialCoefficients, t: f64, r: f64) -> Option<f64> {
    let h = enthalpy(c, t, r)?;
    let s = entropy(c, t, r)?;
    finite(h - t * s)
}

/// Species property selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Enthalpy,
    Entropy,
    Gibbs,
    HeatCapacity,
}

impl Property {
    pub const ALL: [Property; 4] = [
        Property::Enthalpy,
        Property::Entropy,
        Property::Gibbs,
        Property::HeatCapacity,
    ];

    /// Molar SI unit of the evaluated value.
    pub fn unit(&self) -> &'static str {
        match self {
            Property::Enthalpy | Property::Gibbs => unit::J_PER_MOL,
            Property::Entropy | Property::HeatCapacity => unit::J_PER_MOL_K,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Property::Enthalpy => "enthalpy",
            Property::Entropy => "entropy",
            Property::Gibbs => "gibbs",
            Property::HeatCapacity => "heat_capacity",
        }
    }

    /// Evaluate at `t` kelvin.
    pub fn evaluate(&self, c: &PolynomialCoefficients, t: f64, r: f64) -> Option<Prop> {
        let value = match self {
            Property::Enthalpy => enthalpy(c, t, r),
            Property::Entropy => entropy(c, t, r),
            Property::Gibbs => gibbs(c, t, r),
            Property::HeatCapacity => heat_capacity(c, t, r),
        }?;
        Some(Prop::new(value, self.unit()))
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = TcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "enthalpy" | "h" => Ok(Property::Enthalpy),
            "entropy" | "s" => Ok(Property::Entropy),
            "gibbs" | "g" => Ok(Property::Gibbs),
            "heat_capacity" | "heat-capacity" | "cp" => Ok(Property::HeatCapacity),
            _ => Err(TcError::Parse {
                input: s.to_string(),
                reason: "property must be enthalpy, entropy, gibbs or heat_capacity",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use tc_core::constants::R_J_PER_MOL_K as R;
    use tc_core::numeric::{Tolerances, nearly_equal};

    const TOL: Tolerances = Tolerances {
        abs: 1e-6,
        rel: 1e-6,
    };

    #[test]
    fn water_nasa9_reference_state() {
        let c = fixtures::H2O_NASA9_LOW;
        let h = enthalpy(&c, 298.15, R).unwrap();
        let s = entropy(&c, 298.15, R).unwrap();
        let cp = heat_capacity(&c, 298.15, R).unwrap();
        assert!((h + 241_826.0).abs() < 10.0, "h = {h}");
        assert!((s - 188.83).abs() < 0.05, "s = {s}");
        assert!((cp - 33.59).abs() < 0.05, "cp = {cp}");
    }

    #[test]
    fn water_nasa7_matches_nasa9_at_reference() {
        let h7 = enthalpy(&fixtures::H2O_NASA7_LOW, 298.15, R).unwrap();
        let h9 = enthalpy(&fixtures::H2O_NASA9_LOW, 298.15, R).unwrap();
        assert!((h7 - h9).abs() < 5.0);

        let s7 = entropy(&fixtures::H2O_NASA7_LOW, 298.15, R).unwrap();
        let s9 = entropy(&fixtures::H2O_NASA9_LOW, 298.15, R).unwrap();
        assert!((s7 - s9).abs() < 0.05);
    }

    #[test]
    fn elements_have_zero_reference_enthalpy() {
        for c in [fixtures::H2_NASA9_LOW, fixtures::O2_NASA9_LOW] {
            let h = enthalpy(&c, 298.15, R).unwrap();
            assert!(h.abs() < 1.0, "h = {h}");
        }
    }

    #[test]
    fn rejects_non_positive_or_non_finite_temperature() {
        let c = fixtures::H2O_NASA9_LOW;
        for t in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert_eq!(enthalpy(&c, t, R), None);
            assert_eq!(entropy(&c, t, R), None);
            assert_eq!(heat_capacity(&c, t, R), None);
            assert_eq!(gibbs(&c, t, R), None);
        }
    }

    #[test]
    fn overflow_yields_none() {
        let c = PolynomialCoefficients::Nasa7 {
            a: [1.0, 1.0, 1.0, 1.0, 1e300, 0.0, 0.0],
        };
        assert_eq!(heat_capacity(&c, 1e10, R), None);
    }

    #[test]
    fn property_units() {
        let c = fixtures::H2O_NASA9_MID;
        let h = Property::Enthalpy.evaluate(&c, 1500.0, R).unwrap();
        assert_eq!(h.unit, "J/mol");
        let cp = Property::HeatCapacity.evaluate(&c, 1500.0, R).unwrap();
        assert_eq!(cp.unit, "J/mol.K");
        assert!(nearly_equal(
            cp.value,
            heat_capacity(&c, 1500.0, R).unwrap(),
            TOL
        ));
    }

    #[test]
    fn property_parse() {
        assert_eq!("Cp".parse::<Property>().unwrap(), Property::HeatCapacity);
        assert_eq!("gibbs".parse::<Property>().unwrap(), Property::Gibbs);
        assert!("volume".parse::<Property>().is_err());
    }
}
