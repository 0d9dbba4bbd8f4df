//! Value/unit envelope for every computed quantity.
//!
//! Species and reaction properties leave the engine as [`Prop`]: a value plus
//! the unit string it is expressed in. Units carry the molar-vs-mass and
//! energy-vs-entropy meaning, so arithmetic across records first goes through
//! [`Prop::to_si_molar`].
//!
//! Accepted molar grammar (case-insensitive, whitespace ignored):
//!
//! ```text
//! energy   := J | kJ | cal | kcal
//! amount   := mol | kmol
//! unit     := energy "/" amount [ ".K" ]
//! ```
//!
//! The temperature dimension must be written with a dot (`J/mol.K`);
//! `J/mol/K` is rejected.

use std::fmt;
use std::str::FromStr;

use crate::error::{TcError, TcResult};

pub mod unit {
    pub const J_PER_MOL: &str = "J/mol";
    pub const J_PER_MOL_K: &str = "J/mol.K";
    pub const J_PER_MOL_K2: &str = "J/mol.K^2";
    pub const J_PER_KG: &str = "J/kg";
    pub const J_PER_KG_K: &str = "J/kg.K";
    pub const DIMENSIONLESS: &str = "dimensionless";
    pub const PER_K: &str = "1/K";
    pub const PER_K2: &str = "1/K^2";
    pub const KELVIN: &str = "K";
    pub const MOL_PER_J: &str = "mol/J";
}

/// Whether an energy/entropy value is per mole or per kilogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Basis {
    #[default]
    Molar,
    Mass,
}

impl FromStr for Basis {
    type Err = TcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "molar" | "mol" => Ok(Basis::Molar),
            "mass" | "kg" => Ok(Basis::Mass),
            _ => Err(TcError::Parse {
                input: s.to_string(),
                reason: "basis must be 'molar' or 'mass'",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prop {
    pub value: f64,
    pub unit: String,
}

impl Prop {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    pub fn j_per_mol(value: f64) -> Self {
        Self::new(value, unit::J_PER_MOL)
    }

    pub fn j_per_mol_k(value: f64) -> Self {
        Self::new(value, unit::J_PER_MOL_K)
    }

    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, unit::DIMENSIONLESS)
    }

    /// Re-express a molar energy or entropy in `J/mol` or `J/mol.K`.
    ///
    /// Fails on any unit outside the molar grammar.
    pub fn to_si_molar(&self) -> TcResult<Prop> {
        let parsed: MolarUnit = self.unit.parse()?;
        if parsed.amount == AmountUnit::Kg {
            return Err(TcError::UnsupportedUnit {
                unit: self.unit.clone(),
                reason: "expected a molar unit",
            });
        }
        let value = self.value * parsed.energy.joules() / parsed.amount.moles();
        let unit = if parsed.per_kelvin {
            unit::J_PER_MOL_K
        } else {
            unit::J_PER_MOL
        };
        Ok(Prop::new(value, unit))
    }

    /// Convert a molar value to mass basis using a molecular weight in g/mol.
    ///
    /// `J/mol` becomes `J/kg`, `kJ/kmol.K` becomes `kJ/kg.K`; the energy
    /// symbol is kept as written.
    pub fn to_mass_basis(&self, mw_g_per_mol: f64) -> TcResult<Prop> {
        let mw_kg_per_mol = mw_kg_per_mol(mw_g_per_mol)?;
        let parsed: MolarUnit = self.unit.parse()?;
        let kg_per_amount = match parsed.amount {
            AmountUnit::Mol => mw_kg_per_mol,
            // g/mol numerically equals kg/kmol
            AmountUnit::Kmol => mw_g_per_mol,
            AmountUnit::Kg => {
                return Err(TcError::UnsupportedUnit {
                    unit: self.unit.clone(),
                    reason: "value is already on mass basis",
                });
            }
        };
        Ok(Prop::new(
            self.value / kg_per_amount,
            parsed.with_amount(AmountUnit::Kg).render(energy_symbol(&self.unit)),
        ))
    }

    /// Inverse of [`Prop::to_mass_basis`]: `J/kg` back to `J/mol`.
    pub fn to_molar_basis(&self, mw_g_per_mol: f64) -> TcResult<Prop> {
        let mw_kg_per_mol = mw_kg_per_mol(mw_g_per_mol)?;
        let parsed: MolarUnit = self.unit.parse()?;
        if parsed.amount != AmountUnit::Kg {
            return Err(TcError::UnsupportedUnit {
                unit: self.unit.clone(),
                reason: "value is not on mass basis",
            });
        }
        Ok(Prop::new(
            self.value * mw_kg_per_mol,
            parsed.with_amount(AmountUnit::Mol).render(energy_symbol(&self.unit)),
        ))
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

fn mw_kg_per_mol(mw_g_per_mol: f64) -> TcResult<f64> {
    if !(mw_g_per_mol.is_finite() && mw_g_per_mol > 0.0) {
        return Err(TcError::InvalidArg {
            what: "molecular weight must be positive and finite",
        });
    }
    Ok(mw_g_per_mol / 1000.0)
}

fn energy_symbol(unit: &str) -> &str {
    unit.split('/').next().unwrap_or(unit).trim()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyUnit {
    J,
    KJ,
    Cal,
    KCal,
}

impl EnergyUnit {
    /// Joules per one unit.
    pub fn joules(&self) -> f64 {
        match self {
            EnergyUnit::J => 1.0,
            EnergyUnit::KJ => 1e3,
            EnergyUnit::Cal => 4.184,
            EnergyUnit::KCal => 4184.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountUnit {
    Mol,
    Kmol,
    Kg,
}

impl AmountUnit {
    fn moles(&self) -> f64 {
        match self {
            AmountUnit::Mol => 1.0,
            AmountUnit::Kmol => 1e3,
            AmountUnit::Kg => f64::NAN,
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            AmountUnit::Mol => "mol",
            AmountUnit::Kmol => "kmol",
            AmountUnit::Kg => "kg",
        }
    }
}

/// Parsed energy or entropy unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MolarUnit {
    pub energy: EnergyUnit,
    pub amount: AmountUnit,
    pub per_kelvin: bool,
}

impl MolarUnit {
    fn with_amount(self, amount: AmountUnit) -> Self {
        Self { amount, ..self }
    }

    fn render(&self, energy: &str) -> String {
        let suffix = if self.per_kelvin { ".K" } else { "" };
        format!("{}/{}{}", energy, self.amount.symbol(), suffix)
    }
}

impl FromStr for MolarUnit {
    type Err = TcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = |reason| TcError::UnsupportedUnit {
            unit: s.to_string(),
            reason,
        };

        let norm: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        let (energy, rest) = norm
            .split_once('/')
            .ok_or_else(|| unsupported("expected '<energy>/<amount>'"))?;

        let energy = match energy {
            "j" => EnergyUnit::J,
            "kj" => EnergyUnit::KJ,
            "cal" => EnergyUnit::Cal,
            "kcal" => EnergyUnit::KCal,
            _ => return Err(unsupported("energy must be J, kJ, cal or kcal")),
        };

        let (amount, per_kelvin) = match rest.split_once('.') {
            Some((amount, "k")) => (amount, true),
            Some(_) => return Err(unsupported("only '.K' may follow the amount")),
            None => (rest, false),
        };

        let amount = match amount {
            "mol" => AmountUnit::Mol,
            "kmol" => AmountUnit::Kmol,
            "kg" => AmountUnit::Kg,
            _ => return Err(unsupported("amount must be mol, kmol or kg")),
        };

        Ok(Self {
            energy,
            amount,
            per_kelvin,
        })
    }
}
