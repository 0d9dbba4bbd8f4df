//! Coefficient store contract.

use std::collections::HashMap;

use crate::polynomial::{CoefficientRecord, RangeTag};

/// Read-only lookup of coefficient records by component id and range tag.
///
/// How records get into a store is outside this crate; see `tc-app` for the
/// YAML loader.
pub trait CoefficientStore: Send + Sync {
    fn lookup(&self, component_id: &str, tag: RangeTag) -> Option<CoefficientRecord>;
}

/// A store resident in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: HashMap<String, HashMap<RangeTag, CoefficientRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for `(component_id, tag)`.
    pub fn insert(&mut self, component_id: &str, tag: RangeTag, record: CoefficientRecord) {
        self.records
            .entry(component_id.to_string())
            .or_default()
            .insert(tag, record);
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Component ids with at least one record, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.records.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl CoefficientStore for InMemoryStore {
    fn lookup(&self, component_id: &str, tag: RangeTag) -> Option<CoefficientRecord> {
        self.records.get(component_id)?.get(&tag).cloned()
    }
}
