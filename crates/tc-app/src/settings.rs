//! Calculation settings shared by every service call.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tc_core::{Basis, PhysicalConstants};
use tc_reaction::ParseOptions;
use tc_solver::{BisectionConfig, QuadratureConfig};
use tc_species::{ComponentKey, Phase, PolynomialType};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Identifier scheme the coefficient store is keyed by
    pub component_key: ComponentKey,
    pub polynomial: PolynomialType,
    pub basis: Basis,
    /// Phase for reaction species written without one
    pub default_phase: Option<Phase>,
    pub constants: PhysicalConstants,
    pub bisection: BisectionConfig,
    pub quadrature: QuadratureConfig,
}

impl Settings {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            default_phase: self.default_phase,
        }
    }
}

/// Load settings from a YAML file. Absent fields take their defaults.
pub fn load_settings(path: &Path) -> AppResult<Settings> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_settings(&content)
}

pub fn parse_settings(yaml: &str) -> AppResult<Settings> {
    serde_yaml::from_str(yaml).map_err(|e| AppError::Format {
        what: "settings YAML",
        message: e.to_string(),
    })
}

/// Save settings to a YAML file.
pub fn save_settings(path: &Path, settings: &Settings) -> AppResult<()> {
    let content = serde_yaml::to_string(settings).map_err(|e| AppError::Format {
        what: "settings",
        message: e.to_string(),
    })?;
    std::fs::write(path, content).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
