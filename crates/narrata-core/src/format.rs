//! Format of headerless PCM input.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Sample rate assumed for headerless PCM (the TTS producer's native rate).
pub const DEFAULT_SAMPLE_RATE: u32 = 24000;

/// Channel count assumed for headerless PCM.
pub const DEFAULT_CHANNEL_COUNT: usize = 1;

/// Largest channel count a [`SampleBuffer`](crate::SampleBuffer) may hold.
pub const MAX_CHANNELS: usize = 2;

/// Sample rate and channel count applied when the input is raw 16-bit PCM
/// rather than a RIFF/WAVE container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPcmFormat {
    pub sample_rate: u32,
    pub channels: usize,
}

impl Default for RawPcmFormat {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            channels: DEFAULT_CHANNEL_COUNT,
        }
    }
}

impl RawPcmFormat {
    pub fn new(sample_rate: u32, channels: usize) -> Self {
        Self {
            sample_rate,
            channels,
        }
    }

    pub fn mono(sample_rate: u32) -> Self {
        Self::new(sample_rate, 1)
    }

    pub fn stereo(sample_rate: u32) -> Self {
        Self::new(sample_rate, 2)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(Error::InvalidSampleRate(self.sample_rate));
        }
        if self.channels == 0 || self.channels > MAX_CHANNELS {
            return Err(Error::InvalidChannelCount(self.channels));
        }
        Ok(())
    }
}
