//! Error types for narrata-codec

use thiserror::Error;

/// Codec error type
#[derive(Error, Debug)]
pub enum CodecError {
    /// Empty payload or invalid format parameters
    #[error(transparent)]
    Core(#[from] narrata_core::Error),

    /// WAV writer failure
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Inline payload that is not valid base64
    #[error("Invalid audio payload: {0}")]
    Payload(String),
}

impl CodecError {
    pub fn is_empty_audio(&self) -> bool {
        matches!(self, CodecError::Core(narrata_core::Error::EmptyAudio))
    }
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

// External library errors are flattened to strings at the API boundary

impl From<hound::Error> for CodecError {
    fn from(e: hound::Error) -> Self {
        CodecError::Encoding(e.to_string())
    }
}

impl From<base64::DecodeError> for CodecError {
    fn from(e: base64::DecodeError) -> Self {
        CodecError::Payload(e.to_string())
    }
}
