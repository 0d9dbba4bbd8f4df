//! Error types for the tc-app service layer.
//!
//! Only fatal conditions become an [`AppError`]. Values that merely cannot be
//! computed come back from the services as `Ok(None)`.

use std::path::PathBuf;

/// Application error type that wraps errors from the engine crates and
/// file handling.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {what}: {message}")]
    Format { what: &'static str, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Reaction error: {0}")]
    Reaction(#[from] tc_reaction::ReactionError),

    #[error("Species error: {0}")]
    Species(#[from] tc_species::SpeciesError),

    #[error("Core error: {0}")]
    Core(#[from] tc_core::TcError),
}

/// Result type for tc-app operations.
pub type AppResult<T> = Result<T, AppError>;
