//! Shared application service layer for thermochem.
//!
//! This crate sits between the engine crates and the CLI: it loads
//! coefficient stores and settings from YAML and exposes species, reaction
//! and mixture queries as plain functions over a [`ThermoContext`].

pub mod context;
pub mod error;
pub mod mixture_service;
pub mod reaction_service;
pub mod settings;
pub mod species_service;
pub mod store_io;

// Re-export key types for convenience
pub use context::ThermoContext;
pub use error::{AppError, AppResult};
pub use mixture_service::{MixtureReport, chemical_potentials, mixture_property, mixture_report};
pub use reaction_service::{
    ReactionReport, VantHoffMethod, analyze_reaction, equilibrium_constant,
    equilibrium_temperature, reaction_property, reaction_report, reaction_sensitivities,
    reaction_system, vant_hoff,
};
pub use settings::{Settings, load_settings, parse_settings, save_settings};
pub use species_service::{
    SeriesPoint, SpeciesSummary, species_property, species_series, species_summary, species_table,
};
pub use store_io::{RecordEntry, StoreData, StoreDocument, load_store, parse_store, save_store};
