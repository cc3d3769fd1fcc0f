//! Pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};
use narrata_core::RawPcmFormat;

/// Per-render options chosen by the caller.
///
/// Serializable so an application can keep it in its own settings file;
/// missing fields fall back to the defaults (24 kHz mono raw input, normal
/// speed, enhancement on).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Format assumed when the input has no RIFF/WAVE header
    pub raw_format: RawPcmFormat,
    /// Playback speed factor (1.0 = unchanged, 2.0 = twice as fast)
    pub speed: f64,
    /// Run the cinematic enhancement chain
    pub enhance: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            raw_format: RawPcmFormat::default(),
            speed: 1.0,
            enhance: true,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        self.raw_format.validate()?;
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(Error::Stretch(narrata_stretch::Error::InvalidSpeed(self.speed)));
        }
        Ok(())
    }

    /// True when the stretch stage would change the audio.
    pub fn needs_stretch(&self) -> bool {
        self.speed != 1.0
    }
}
