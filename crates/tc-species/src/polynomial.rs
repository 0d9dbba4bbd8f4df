//! Coefficient records and the tags that index them.
//!
//! A store holds [`CoefficientRecord`]s, whose fields may be missing: that is
//! what ingestion produces. A record becomes usable only after validation
//! into a [`PolynomialRecord`], whose coefficients are a tagged
//! [`PolynomialCoefficients`] variant with every required value present and
//! finite.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::component::Phase;
use crate::error::{SpeciesError, SpeciesResult};

/// NASA polynomial family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolynomialType {
    Nasa7,
    #[default]
    Nasa9,
}

impl PolynomialType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolynomialType::Nasa7 => "nasa7",
            PolynomialType::Nasa9 => "nasa9",
        }
    }
}

impl fmt::Display for PolynomialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolynomialType {
    type Err = SpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nasa7" => Ok(PolynomialType::Nasa7),
            "nasa9" => Ok(PolynomialType::Nasa9),
            _ => Err(SpeciesError::UnknownRangeTag(s.to_string())),
        }
    }
}

/// Tabulated temperature sub-range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemperatureWindow {
    /// 200–1000 K
    Low,
    /// 1000–6000 K
    Mid,
    /// 6000–20000 K
    High,
}

impl TemperatureWindow {
    pub const ALL: [TemperatureWindow; 3] = [
        TemperatureWindow::Low,
        TemperatureWindow::Mid,
        TemperatureWindow::High,
    ];

    /// Nominal tabulation bounds [K].
    pub fn span(&self) -> (f64, f64) {
        match self {
            TemperatureWindow::Low => (200.0, 1000.0),
            TemperatureWindow::Mid => (1000.0, 6000.0),
            TemperatureWindow::High => (6000.0, 20000.0),
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            TemperatureWindow::Low => 0,
            TemperatureWindow::Mid => 1,
            TemperatureWindow::High => 2,
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            TemperatureWindow::Low => "200_1000_K",
            TemperatureWindow::Mid => "1000_6000_K",
            TemperatureWindow::High => "6000_20000_K",
        }
    }
}

/// One of the six (polynomial type, window) pairs a record is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RangeTag {
    pub poly: PolynomialType,
    pub window: TemperatureWindow,
}

impl RangeTag {
    pub fn new(poly: PolynomialType, window: TemperatureWindow) -> Self {
        Self { poly, window }
    }

    /// All six tags, NASA7 first.
    pub fn all() -> impl Iterator<Item = RangeTag> {
        [PolynomialType::Nasa7, PolynomialType::Nasa9]
            .into_iter()
            .flat_map(|poly| TemperatureWindow::ALL.map(|w| RangeTag::new(poly, w)))
    }
}

impl fmt::Display for RangeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.poly, self.window.suffix())
    }
}

impl FromStr for RangeTag {
    type Err = SpeciesError;

    /// Parse `"nasa9_1000_6000_K"` and friends.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        RangeTag::all()
            .find(|tag| tag.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SpeciesError::UnknownRangeTag(s.to_string()))
    }
}

impl TryFrom<String> for RangeTag {
    type Error = SpeciesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RangeTag> for String {
    fn from(tag: RangeTag) -> Self {
        tag.to_string()
    }
}

/// Validated polynomial coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolynomialCoefficients {
    /// `a1..a7`; `a6`, `a7` are the enthalpy and entropy integration constants.
    Nasa7 { a: [f64; 7] },
    /// `a1..a7` plus integration constants `b1` (enthalpy) and `b2` (entropy).
    Nasa9 { a: [f64; 7], b1: f64, b2: f64 },
}

impl PolynomialCoefficients {
    pub fn poly_type(&self) -> PolynomialType {
        match self {
            PolynomialCoefficients::Nasa7 { .. } => PolynomialType::Nasa7,
            PolynomialCoefficients::Nasa9 { .. } => PolynomialType::Nasa9,
        }
    }
}

/// Store-side record for one component and one range tag.
///
/// Field presence is not guaranteed; see [`PolynomialRecord::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoefficientRecord {
    #[serde(default)]
    pub a1: Option<f64>,
    #[serde(default)]
    pub a2: Option<f64>,
    #[serde(default)]
    pub a3: Option<f64>,
    #[serde(default)]
    pub a4: Option<f64>,
    #[serde(default)]
    pub a5: Option<f64>,
    #[serde(default)]
    pub a6: Option<f64>,
    #[serde(default)]
    pub a7: Option<f64>,
    #[serde(default)]
    pub b1: Option<f64>,
    #[serde(default)]
    pub b2: Option<f64>,
    /// Molecular weight [g/mol]
    #[serde(default, alias = "MW")]
    pub molecular_weight: Option<f64>,
    /// Standard formation enthalpy [J/mol]
    #[serde(default)]
    pub formation_enthalpy: Option<f64>,
    #[serde(default)]
    pub t_min: Option<f64>,
    #[serde(default)]
    pub t_max: Option<f64>,
    #[serde(default)]
    pub phase: Option<Phase>,
}

impl CoefficientRecord {
    /// Record carrying the seven `a` coefficients.
    pub fn nasa7(a: [f64; 7], molecular_weight: f64) -> Self {
        Self {
            a1: Some(a[0]),
            a2: Some(a[1]),
            a3: Some(a[2]),
            a4: Some(a[3]),
            a5: Some(a[4]),
            a6: Some(a[5]),
            a7: Some(a[6]),
            molecular_weight: Some(molecular_weight),
            ..Self::default()
        }
    }

    /// Record carrying `a1..a7`, `b1` and `b2`.
    pub fn nasa9(a: [f64; 7], b1: f64, b2: f64, molecular_weight: f64) -> Self {
        Self {
            b1: Some(b1),
            b2: Some(b2),
            ..Self::nasa7(a, molecular_weight)
        }
    }

    pub fn with_formation_enthalpy(mut self, h_f: f64) -> Self {
        self.formation_enthalpy = Some(h_f);
        self
    }

    pub fn with_bounds(mut self, t_min: f64, t_max: f64) -> Self {
        self.t_min = Some(t_min);
        self.t_max = Some(t_max);
        self
    }

    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = Some(phase);
        self
    }
}

/// A record that passed validation for its range tag.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialRecord {
    pub tag: RangeTag,
    pub coefficients: PolynomialCoefficients,
    /// Molecular weight [g/mol], always positive and finite.
    pub molecular_weight: f64,
    /// Standard formation enthalpy [J/mol]
    pub formation_enthalpy: Option<f64>,
    /// Valid temperature bounds [K]; the window span when the store has none.
    pub t_bounds: (f64, f64),
    pub phase: Option<Phase>,
}

impl PolynomialRecord {
    /// Check that every coefficient required by `tag.poly` is present and
    /// finite and that the molecular weight is positive.
    pub fn validate(raw: &CoefficientRecord, tag: RangeTag) -> SpeciesResult<Self> {
        let required = |name: &'static str, v: Option<f64>| -> SpeciesResult<f64> {
            let v = v.ok_or_else(|| SpeciesError::MissingCoefficient {
                name,
                tag: tag.to_string(),
            })?;
            if !v.is_finite() {
                return Err(SpeciesError::NonFiniteCoefficient {
                    name,
                    tag: tag.to_string(),
                });
            }
            Ok(v)
        };

        let a = [
            required("a1", raw.a1)?,
            required("a2", raw.a2)?,
            required("a3", raw.a3)?,
            required("a4", raw.a4)?,
            required("a5", raw.a5)?,
            required("a6", raw.a6)?,
            required("a7", raw.a7)?,
        ];

        let coefficients = match tag.poly {
            PolynomialType::Nasa7 => PolynomialCoefficients::Nasa7 { a },
            PolynomialType::Nasa9 => PolynomialCoefficients::Nasa9 {
                a,
                b1: required("b1", raw.b1)?,
                b2: required("b2", raw.b2)?,
            },
        };

        let molecular_weight = raw
            .molecular_weight
            .filter(|mw| mw.is_finite() && *mw > 0.0)
            .ok_or_else(|| SpeciesError::InvalidMolecularWeight {
                tag: tag.to_string(),
            })?;

        let (span_min, span_max) = tag.window.span();
        let t_bounds = (raw.t_min.unwrap_or(span_min), raw.t_max.unwrap_or(span_max));

        Ok(Self {
            tag,
            coefficients,
            molecular_weight,
            formation_enthalpy: raw.formation_enthalpy.filter(|h| h.is_finite()),
            t_bounds,
            phase: raw.phase,
        })
    }
}
