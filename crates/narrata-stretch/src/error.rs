//! Error types for narrata-stretch

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid speed factor: {0} (must be finite and greater than zero)")]
    InvalidSpeed(f64),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Core(#[from] narrata_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
