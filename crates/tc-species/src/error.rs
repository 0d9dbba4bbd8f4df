//! Species-level errors.

use tc_core::TcError;
use thiserror::Error;

/// Result type for species operations.
pub type SpeciesResult<T> = Result<T, SpeciesError>;

/// Errors raised while reading or validating species data.
///
/// Property evaluation itself never surfaces these: a record that fails
/// validation simply makes the property unavailable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpeciesError {
    /// A coefficient required by the polynomial type is absent.
    #[error("Missing coefficient {name} for {tag}")]
    MissingCoefficient { name: &'static str, tag: String },

    /// A coefficient is NaN or infinite.
    #[error("Non-finite coefficient {name} for {tag}")]
    NonFiniteCoefficient { name: &'static str, tag: String },

    /// Molecular weight absent, non-positive or non-finite.
    #[error("Invalid molecular weight for {tag}")]
    InvalidMolecularWeight { tag: String },

    /// Unrecognized phase code or name.
    #[error("Unknown phase '{0}'")]
    UnknownPhase(String),

    /// Unrecognized identifier scheme.
    #[error("Unknown component key '{0}'")]
    UnknownComponentKey(String),

    /// Unrecognized range tag or polynomial type.
    #[error("Unknown range tag '{0}'")]
    UnknownRangeTag(String),

    #[error(transparent)]
    Core(#[from] TcError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SpeciesError::MissingCoefficient {
            name: "b1",
            tag: "nasa9_200_1000_K".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("b1"));
        assert!(msg.contains("nasa9_200_1000_K"));
    }
}
