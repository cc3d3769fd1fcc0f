//! Error types for narrata-core.

use thiserror::Error;

/// Error type shared by every pipeline stage.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Audio data is empty")]
    EmptyAudio,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid sample rate: {0}. Must be greater than zero")]
    InvalidSampleRate(u32),

    #[error("Invalid channel count: {0}. Only mono and stereo are supported")]
    InvalidChannelCount(usize),

    #[error("Channel {channel} has {found} frames, expected {expected}")]
    ChannelLengthMismatch {
        channel: usize,
        expected: usize,
        found: usize,
    },
}

impl Error {
    /// True for every variant that reports a bad caller-supplied value.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Error::InvalidParameter(_)
                | Error::InvalidSampleRate(_)
                | Error::InvalidChannelCount(_)
                | Error::ChannelLengthMismatch { .. }
        )
    }
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
