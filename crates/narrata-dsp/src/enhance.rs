//! Cinematic enhancement chain: low shelf, high shelf, then compression.

use crate::dynamics::Compressor;
use crate::error::{Error, Result};
use crate::filter::{Biquad, ShelfKind};
use narrata_core::SampleBuffer;

/// Corner and gain of one shelving stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShelfSettings {
    /// Corner frequency in Hz
    pub frequency: f64,
    /// Shelf gain in dB
    pub gain_db: f64,
}

/// Static curve and timing of the compressor stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressorSettings {
    pub threshold_db: f32,
    pub knee_db: f32,
    pub ratio: f32,
    pub attack_seconds: f32,
    pub release_seconds: f32,
}

/// Full enhancement chain.
///
/// The default is the cinematic preset: +6 dB below 120 Hz, +2 dB above
/// 8 kHz, then a 12:1 compressor at -24 dB with a 30 dB knee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnhancementSettings {
    pub low_shelf: ShelfSettings,
    pub high_shelf: ShelfSettings,
    pub compressor: CompressorSettings,
}

impl Default for EnhancementSettings {
    fn default() -> Self {
        Self {
            low_shelf: ShelfSettings {
                frequency: 120.0,
                gain_db: 6.0,
            },
            high_shelf: ShelfSettings {
                frequency: 8000.0,
                gain_db: 2.0,
            },
            compressor: CompressorSettings {
                threshold_db: -24.0,
                knee_db: 30.0,
                ratio: 12.0,
                attack_seconds: 0.003,
                release_seconds: 0.25,
            },
        }
    }
}

impl EnhancementSettings {
    pub fn validate(&self) -> Result<()> {
        for (name, shelf) in [("low shelf", &self.low_shelf), ("high shelf", &self.high_shelf)] {
            if !shelf.frequency.is_finite() || shelf.frequency < 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "{name} frequency must be finite and non-negative, got {}",
                    shelf.frequency
                )));
            }
            if !shelf.gain_db.is_finite() {
                return Err(Error::InvalidParameter(format!(
                    "{name} gain must be finite, got {}",
                    shelf.gain_db
                )));
            }
        }

        let comp = &self.compressor;
        if !comp.threshold_db.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "compressor threshold must be finite, got {}",
                comp.threshold_db
            )));
        }
        if !comp.knee_db.is_finite() || comp.knee_db < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "compressor knee must be finite and non-negative, got {}",
                comp.knee_db
            )));
        }
        if !comp.ratio.is_finite() || comp.ratio < 1.0 {
            return Err(Error::InvalidParameter(format!(
                "compressor ratio must be at least 1, got {}",
                comp.ratio
            )));
        }
        if !(comp.attack_seconds.is_finite() && comp.attack_seconds >= 0.0)
            || !(comp.release_seconds.is_finite() && comp.release_seconds >= 0.0)
        {
            return Err(Error::InvalidParameter(format!(
                "compressor attack/release must be finite and non-negative, got {}/{}",
                comp.attack_seconds, comp.release_seconds
            )));
        }

        Ok(())
    }
}

/// Applies the enhancement chain to whole buffers.
///
/// Each channel gets its own filter and compressor state, so channels never
/// influence each other.
#[derive(Debug, Clone)]
pub struct Enhancer {
    settings: EnhancementSettings,
}

impl Enhancer {
    pub fn new(settings: EnhancementSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn cinematic() -> Self {
        Self {
            settings: EnhancementSettings::default(),
        }
    }

    pub fn settings(&self) -> &EnhancementSettings {
        &self.settings
    }

    pub fn process(&self, buffer: &SampleBuffer) -> Result<SampleBuffer> {
        let sample_rate = buffer.sample_rate();
        let enhanced = buffer.map_channels(|samples| self.process_channel(samples, sample_rate))?;
        Ok(enhanced)
    }

    fn process_channel(&self, samples: &[f32], sample_rate: u32) -> Vec<f32> {
        let s = &self.settings;
        let mut low = Biquad::shelf(
            ShelfKind::Low,
            sample_rate,
            s.low_shelf.frequency,
            s.low_shelf.gain_db,
        );
        let mut high = Biquad::shelf(
            ShelfKind::High,
            sample_rate,
            s.high_shelf.frequency,
            s.high_shelf.gain_db,
        );
        let mut comp = Compressor::builder()
            .threshold_db(s.compressor.threshold_db)
            .soft_knee_db(s.compressor.knee_db)
            .ratio(s.compressor.ratio)
            .attack_seconds(s.compressor.attack_seconds)
            .release_seconds(s.compressor.release_seconds)
            .auto_makeup(true)
            .build(sample_rate as f64);

        samples
            .iter()
            .map(|&x| comp.process_sample(high.process_sample(low.process_sample(x))))
            .collect()
    }
}

impl Default for Enhancer {
    fn default() -> Self {
        Self::cinematic()
    }
}

/// Run the cinematic preset over a buffer.
pub fn enhance(buffer: &SampleBuffer) -> Result<SampleBuffer> {
    Enhancer::cinematic().process(buffer)
}
