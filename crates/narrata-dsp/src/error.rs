//! Error types for narrata-dsp

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Core(#[from] narrata_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
