//! Borrowed inputs shared by the service calls.

use tc_species::{Component, ComponentKey, SpeciesThermo};

use crate::error::{AppError, AppResult};
use crate::settings::Settings;
use crate::store_io::StoreData;

#[derive(Debug, Clone, Copy)]
pub struct ThermoContext<'a> {
    pub data: &'a StoreData,
    pub settings: &'a Settings,
}

impl<'a> ThermoContext<'a> {
    pub fn new(data: &'a StoreData, settings: &'a Settings) -> Self {
        Self { data, settings }
    }

    /// Key scheme for store lookups. The store file wins over settings.
    pub fn key(&self) -> ComponentKey {
        self.data.key_or(self.settings.component_key)
    }

    pub fn components(&self) -> &'a [Component] {
        &self.data.components
    }

    pub fn component(&self, selector: &str) -> AppResult<&'a Component> {
        self.data
            .component(selector)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown component '{selector}'")))
    }

    pub fn species(&self, selector: &str) -> AppResult<SpeciesThermo> {
        let component = self.component(selector)?;
        Ok(SpeciesThermo::new(
            &self.data.store,
            component,
            self.key(),
            self.settings.polynomial,
            self.settings.basis,
            self.settings.constants,
        ))
    }
}
