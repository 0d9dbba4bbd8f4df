//! Coefficient store files.
//!
//! A store file is a YAML document:
//!
//! ```yaml
//! key: Formula-State
//! components:
//!   - { name: water, formula: H2O, state: g, mole_fraction: 1.0 }
//! records:
//!   - id: H2O-g
//!     range: nasa9_200_1000_K
//!     coefficients: { a1: -39479.6, a2: 575.573, ..., b2: 17.242, MW: 18.015 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tc_species::{CoefficientRecord, Component, ComponentKey, InMemoryStore, RangeTag};

use crate::error::{AppError, AppResult};

const REFERENCE_STORE: &str = include_str!("../data/reference_species.yaml");

/// One record entry of a store file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub id: String,
    pub range: RangeTag,
    pub coefficients: CoefficientRecord,
}

/// On-disk layout of a store file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ComponentKey>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub records: Vec<RecordEntry>,
}

/// A loaded store with the components and key scheme it was written for.
#[derive(Debug, Clone)]
pub struct StoreData {
    /// Key scheme of the record ids; `None` defers to the settings
    pub key: Option<ComponentKey>,
    pub components: Vec<Component>,
    pub store: InMemoryStore,
}

impl StoreData {
    /// Bundled reference data (H2, O2, H2O, CH4, CO, CO2) keyed by
    /// `Formula-State`.
    pub fn builtin() -> AppResult<Self> {
        parse_store(REFERENCE_STORE)
    }

    /// Key scheme used for lookups in this store.
    pub fn key_or(&self, fallback: ComponentKey) -> ComponentKey {
        self.key.unwrap_or(fallback)
    }

    /// Component matching `selector` by name, formula or `formula-state`.
    pub fn component(&self, selector: &str) -> Option<&Component> {
        self.components.iter().find(|c| {
            c.name.eq_ignore_ascii_case(selector)
                || c.formula == selector
                || c.reaction_id() == selector
        })
    }
}

impl From<StoreDocument> for StoreData {
    fn from(doc: StoreDocument) -> Self {
        let mut store = InMemoryStore::new();
        for entry in doc.records {
            store.insert(&entry.id, entry.range, entry.coefficients);
        }
        Self {
            key: doc.key,
            components: doc.components,
            store,
        }
    }
}

/// Load a store from a YAML file.
pub fn load_store(path: &Path) -> AppResult<StoreData> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let data = parse_store(&content)?;
    tracing::debug!(
        path = %path.display(),
        components = data.components.len(),
        records = data.store.len(),
        "loaded coefficient store"
    );
    Ok(data)
}

pub fn parse_store(yaml: &str) -> AppResult<StoreData> {
    let doc: StoreDocument = serde_yaml::from_str(yaml).map_err(|e| AppError::Format {
        what: "store YAML",
        message: e.to_string(),
    })?;
    Ok(doc.into())
}

/// Write a store document to a YAML file.
pub fn save_store(path: &Path, doc: &StoreDocument) -> AppResult<()> {
    let content = serde_yaml::to_string(doc).map_err(|e| AppError::Format {
        what: "store",
        message: e.to_string(),
    })?;
    std::fs::write(path, content).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_species::{CoefficientStore, PolynomialType, TemperatureWindow};

    const DOC: &str = r#"
key: Formula-State
components:
  - name: water
    formula: H2O
    state: g
    mole_fraction: 1.0
records:
  - id: H2O-g
    range: nasa7_200_1000_K
    coefficients:
      a1: 4.19864056
      a2: -2.03643410e-3
      a3: 6.52040211e-6
      a4: -5.48797062e-9
      a5: 1.77197817e-12
      a6: -3.02937267e4
      a7: -8.49032208e-1
      MW: 18.01528
"#;

    #[test]
    fn parses_store_document() {
        let data = parse_store(DOC).unwrap();
        assert_eq!(data.key, Some(ComponentKey::FormulaState));
        assert_eq!(data.components.len(), 1);
        assert_eq!(data.components[0].mole_fraction, Some(1.0));
        let tag = RangeTag::new(PolynomialType::Nasa7, TemperatureWindow::Low);
        let rec = data.store.lookup("H2O-g", tag).unwrap();
        assert_eq!(rec.molecular_weight, Some(18.01528));
        assert_eq!(rec.b1, None);
        assert!(data.component("water").is_some());
        assert!(data.component("H2O-g").is_some());
    }

    #[test]
    fn rejects_unknown_range() {
        let bad = DOC.replace("nasa7_200_1000_K", "nasa7_100_200_K");
        assert!(matches!(parse_store(&bad), Err(AppError::Format { .. })));
    }

    #[test]
    fn builtin_store() {
        let data = StoreData::builtin().unwrap();
        assert_eq!(data.key, Some(ComponentKey::FormulaState));
        assert_eq!(data.components.len(), 6);
        assert_eq!(data.store.len(), 20);
        assert_eq!(data.component("CO2").unwrap().name, "carbon dioxide");
        assert!(data.component("argon").is_none());
    }

    #[test]
    fn builtin_store_matches_reference_records() {
        let data = StoreData::builtin().unwrap();
        let reference = tc_species::fixtures::store();
        assert_eq!(data.store.len(), reference.len());
        for poly in [PolynomialType::Nasa7, PolynomialType::Nasa9] {
            for window in TemperatureWindow::ALL {
                let tag = RangeTag::new(poly, window);
                for c in &data.components {
                    let id = c.id(ComponentKey::FormulaState);
                    assert_eq!(data.store.lookup(&id, tag), reference.lookup(&id, tag), "{id} {tag}");
                }
            }
        }
    }

    #[test]
    fn missing_key_defers_to_fallback() {
        let data = parse_store("components: []\n").unwrap();
        assert_eq!(data.key_or(ComponentKey::NameState), ComponentKey::NameState);
        assert!(data.store.is_empty());
    }
}
