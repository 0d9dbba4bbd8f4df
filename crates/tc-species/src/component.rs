//! Chemical component definitions and identifier schemes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpeciesError;

/// Physical phase of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Gas (`g`)
    #[serde(rename = "g", alias = "gas")]
    Gas,
    /// Liquid (`l`)
    #[serde(rename = "l", alias = "liquid")]
    Liquid,
    /// Solid (`s`)
    #[serde(rename = "s", alias = "solid")]
    Solid,
    /// Aqueous solution (`aq`)
    #[serde(rename = "aq", alias = "aqueous")]
    Aqueous,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Gas, Phase::Liquid, Phase::Solid, Phase::Aqueous];

    /// Short code used in reaction strings and identifiers.
    pub fn code(&self) -> &'static str {
        match self {
            Phase::Gas => "g",
            Phase::Liquid => "l",
            Phase::Solid => "s",
            Phase::Aqueous => "aq",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Gas => "gas",
            Phase::Liquid => "liquid",
            Phase::Solid => "solid",
            Phase::Aqueous => "aqueous",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Phase {
    type Err = SpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gas" => Ok(Phase::Gas),
            "l" | "liquid" => Ok(Phase::Liquid),
            "s" | "solid" => Ok(Phase::Solid),
            "aq" | "aqueous" => Ok(Phase::Aqueous),
            _ => Err(SpeciesError::UnknownPhase(s.to_string())),
        }
    }
}

/// A chemical component as supplied by the caller.
///
/// Identity for lookups is derived from [`ComponentKey`], never from the
/// value itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub formula: String,
    pub state: Phase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mole_fraction: Option<f64>,
    /// Molecular weight [g/mol]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molecular_weight: Option<f64>,
}

impl Component {
    pub fn new(name: impl Into<String>, formula: impl Into<String>, state: Phase) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
            state,
            mole_fraction: None,
            molecular_weight: None,
        }
    }

    pub fn with_mole_fraction(mut self, y: f64) -> Self {
        self.mole_fraction = Some(y);
        self
    }

    pub fn with_molecular_weight(mut self, mw: f64) -> Self {
        self.molecular_weight = Some(mw);
        self
    }

    /// Identifier under the given scheme.
    pub fn id(&self, key: ComponentKey) -> String {
        component_id(self, key)
    }

    /// `"{formula}-{state}"`, the identifier reaction stoichiometry uses.
    pub fn reaction_id(&self) -> String {
        component_id(self, ComponentKey::FormulaState)
    }
}

/// Identifier scheme used to key a coefficient store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComponentKey {
    /// `"{name}-{state}"`
    #[serde(rename = "Name-State")]
    NameState,
    /// `"{formula}-{state}"`
    #[serde(rename = "Formula-State")]
    FormulaState,
    /// `"{name}-{formula}"`
    #[default]
    #[serde(rename = "Name-Formula")]
    NameFormula,
}

impl ComponentKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKey::NameState => "Name-State",
            ComponentKey::FormulaState => "Formula-State",
            ComponentKey::NameFormula => "Name-Formula",
        }
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKey {
    type Err = SpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name-state" => Ok(ComponentKey::NameState),
            "formula-state" => Ok(ComponentKey::FormulaState),
            "name-formula" => Ok(ComponentKey::NameFormula),
            _ => Err(SpeciesError::UnknownComponentKey(s.to_string())),
        }
    }
}

/// Deterministic identifier for `component` under `key`.
pub fn component_id(component: &Component, key: ComponentKey) -> String {
    match key {
        ComponentKey::NameState => format!("{}-{}", component.name, component.state),
        ComponentKey::FormulaState => format!("{}-{}", component.formula, component.state),
        ComponentKey::NameFormula => format!("{}-{}", component.name, component.formula),
    }
}
