//! Error types for reaction parsing and reaction thermodynamics.

use tc_core::error::TcError;
use tc_species::SpeciesError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReactionError {
    #[error("Reaction '{equation}' has no '<=>', '=>' or '=' separator")]
    MissingSeparator { equation: String },

    #[error("Reaction '{equation}' has more than one separator")]
    MultipleSeparators { equation: String },

    #[error("Syntax error at '{near}': {reason}")]
    Syntax { near: String, reason: &'static str },

    #[error("Species '{species}' has no phase and no default phase was given")]
    MissingPhase { species: String },

    #[error("Invalid stoichiometric coefficient '{text}'")]
    InvalidCoefficient { text: String },

    #[error("Reaction components not resolved: {missing:?}")]
    UnresolvedComponents { missing: Vec<String> },

    #[error("Species error: {0}")]
    Species(#[from] SpeciesError),

    #[error("Core error: {0}")]
    Core(#[from] TcError),
}

pub type ReactionResult<T> = Result<T, ReactionError>;
