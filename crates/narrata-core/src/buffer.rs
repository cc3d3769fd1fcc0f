//! Multi-channel sample buffer passed between pipeline stages.

use crate::{Error, Result, MAX_CHANNELS};

/// Planar (non-interleaved) float audio, one `Vec` per channel.
///
/// Samples are nominally in `[-1.0, 1.0]`. Values outside that range are
/// allowed (the enhancer can overshoot) and are clamped when re-quantized.
///
/// The buffer is immutable once built: every stage reads it by slice and
/// produces a new buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl SampleBuffer {
    /// Build a buffer from planar channel data.
    ///
    /// Fails if the sample rate is zero, the channel count is not 1 or 2,
    /// or the channels differ in length.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> Result<Self> {
        if sample_rate == 0 {
            return Err(Error::InvalidSampleRate(sample_rate));
        }
        if channels.is_empty() || channels.len() > MAX_CHANNELS {
            return Err(Error::InvalidChannelCount(channels.len()));
        }

        let expected = channels[0].len();
        if let Some((channel, found)) = channels
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(Error::ChannelLengthMismatch {
                channel,
                expected,
                found,
            });
        }

        Ok(Self {
            sample_rate,
            channels,
        })
    }

    pub fn mono(sample_rate: u32, samples: Vec<f32>) -> Result<Self> {
        Self::new(sample_rate, vec![samples])
    }

    pub fn stereo(sample_rate: u32, left: Vec<f32>, right: Vec<f32>) -> Result<Self> {
        Self::new(sample_rate, vec![left, right])
    }

    /// All-zero buffer of the given shape.
    pub fn silence(sample_rate: u32, channel_count: usize, frames: usize) -> Result<Self> {
        Self::new(sample_rate, vec![vec![0.0; frames]; channel_count])
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of frames (samples per channel).
    pub fn frame_count(&self) -> usize {
        self.channels[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    /// Duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// Samples of one channel.
    ///
    /// # Panics
    ///
    /// Panics if `index >= channel_count()`.
    pub fn channel(&self, index: usize) -> &[f32] {
        &self.channels[index]
    }

    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    pub fn into_channels(self) -> Vec<Vec<f32>> {
        self.channels
    }

    /// Build a new buffer of the same rate by mapping every channel.
    ///
    /// The closure must return channels of equal length; the result is
    /// validated like [`SampleBuffer::new`].
    pub fn map_channels<F>(&self, mut f: F) -> Result<Self>
    where
        F: FnMut(&[f32]) -> Vec<f32>,
    {
        let channels = self.channels.iter().map(|c| f(c)).collect();
        Self::new(self.sample_rate, channels)
    }
}
