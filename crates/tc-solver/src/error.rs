//! Error types for root finding and integration.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("No sign change in bracket: f(low) = {f_low}, f(high) = {f_high}")]
    NoSignChange { f_low: f64, f_high: f64 },

    #[error("Objective unavailable or non-finite at x = {at}")]
    NonFinite { at: f64 },

    #[error("Invalid bracket [{low}, {high}]")]
    InvalidBracket { low: f64, high: f64 },

    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: &'static str },
}

pub type SolverResult<T> = Result<T, SolverError>;

