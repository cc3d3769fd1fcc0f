//! Centralized error type for the narrata umbrella crate.
//!
//! Wraps all stage errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] narrata_core::Error),

    #[error("Codec: {0}")]
    Codec(#[from] narrata_codec::CodecError),

    #[error("DSP: {0}")]
    Dsp(#[from] narrata_dsp::Error),

    #[error("Stretch: {0}")]
    Stretch(#[from] narrata_stretch::Error),
}

impl Error {
    /// The decoded payload held no samples.
    pub fn is_empty_audio(&self) -> bool {
        matches!(self.core(), Some(narrata_core::Error::EmptyAudio))
    }

    /// A caller-supplied value (speed, format, settings) was rejected.
    pub fn is_invalid_parameter(&self) -> bool {
        match self {
            Error::Dsp(narrata_dsp::Error::InvalidParameter(_)) => true,
            Error::Stretch(
                narrata_stretch::Error::InvalidSpeed(_) | narrata_stretch::Error::InvalidParameter(_),
            ) => true,
            _ => self.core().is_some_and(narrata_core::Error::is_invalid_parameter),
        }
    }

    fn core(&self) -> Option<&narrata_core::Error> {
        match self {
            Error::Core(e)
            | Error::Codec(narrata_codec::CodecError::Core(e))
            | Error::Dsp(narrata_dsp::Error::Core(e))
            | Error::Stretch(narrata_stretch::Error::Core(e)) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_audio_detected_through_codec() {
        let err = Error::from(narrata_codec::CodecError::Core(narrata_core::Error::EmptyAudio));
        assert!(err.is_empty_audio());
        assert!(!err.is_invalid_parameter());
    }

    #[test]
    fn test_invalid_parameter_from_every_stage() {
        assert!(Error::from(narrata_core::Error::InvalidSampleRate(0)).is_invalid_parameter());
        assert!(Error::from(narrata_stretch::Error::InvalidSpeed(-1.0)).is_invalid_parameter());
        assert!(
            Error::from(narrata_dsp::Error::InvalidParameter("ratio".into())).is_invalid_parameter()
        );
        assert!(!Error::from(narrata_codec::CodecError::Encoding("io".into())).is_invalid_parameter());
    }
}
