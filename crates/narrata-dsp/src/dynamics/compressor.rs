//! Feed-forward compressor (mono)

use super::utils::{amplitude_to_db, db_to_amplitude, time_to_coeff};

/// Share of the full-scale gain reduction given back as automatic makeup.
const AUTO_MAKEUP_EXPONENT: f32 = 0.6;

/// Feed-forward compressor with a smoothed level detector and soft knee.
///
/// The detector follows `|x|` with separate attack and release time
/// constants. The static curve is applied to the detector level in dB and
/// the resulting gain (plus makeup) scales the input sample.
#[derive(Debug, Clone)]
pub struct Compressor {
    threshold_db: f32,
    ratio: f32,
    knee_db: f32,
    makeup_db: f32,

    envelope: f32,
    gain_reduction: f32,
    attack_coeff: f32,
    release_coeff: f32,
}

impl Compressor {
    /// Create a new compressor. Prefer [`Compressor::builder()`].
    pub(crate) fn new(
        threshold_db: f32,
        ratio: f32,
        attack: f32,
        release: f32,
        sample_rate: f64,
    ) -> Self {
        Self {
            threshold_db,
            ratio: ratio.max(1.0),
            knee_db: 0.0,
            makeup_db: 0.0,
            envelope: 0.0,
            gain_reduction: 0.0,
            attack_coeff: time_to_coeff(attack.max(0.0), sample_rate),
            release_coeff: time_to_coeff(release.max(0.0), sample_rate),
        }
    }

    /// Create a builder for configuring a compressor
    pub fn builder() -> CompressorBuilder {
        CompressorBuilder::default()
    }

    pub fn with_soft_knee(mut self, knee_db: f32) -> Self {
        self.knee_db = knee_db.max(0.0);
        self
    }

    pub fn with_makeup(mut self, makeup_db: f32) -> Self {
        self.makeup_db = makeup_db;
        self
    }

    /// Set makeup gain from the static curve: 0.6 x the reduction a 0 dBFS
    /// level would receive.
    pub fn with_auto_makeup(mut self) -> Self {
        self.makeup_db = AUTO_MAKEUP_EXPONENT * self.compute_gain_reduction(0.0);
        self
    }

    pub fn threshold_db(&self) -> f32 {
        self.threshold_db
    }

    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    pub fn knee_db(&self) -> f32 {
        self.knee_db
    }

    pub fn makeup_db(&self) -> f32 {
        self.makeup_db
    }

    pub fn set_ratio(&mut self, ratio: f32) {
        self.ratio = ratio.max(1.0);
    }

    /// Current gain reduction in dB (positive = attenuating)
    pub fn gain_reduction_db(&self) -> f32 {
        self.gain_reduction
    }

    pub fn envelope_level(&self) -> f32 {
        self.envelope
    }

    pub fn reset(&mut self) {
        self.envelope = 0.0;
        self.gain_reduction = 0.0;
    }

    /// Static curve: gain reduction in dB for a detector level in dB.
    #[inline]
    pub fn compute_gain_reduction(&self, input_db: f32) -> f32 {
        let threshold = self.threshold_db;
        let ratio = self.ratio;
        let knee = self.knee_db;

        if knee <= 0.0 {
            let over_db = (input_db - threshold).max(0.0);
            over_db * (1.0 - 1.0 / ratio)
        } else {
            let half_knee = knee / 2.0;
            let below = threshold - half_knee;
            let above = threshold + half_knee;

            if input_db <= below {
                0.0
            } else if input_db >= above {
                let over_db = input_db - threshold;
                over_db * (1.0 - 1.0 / ratio)
            } else {
                let x = input_db - below;
                let slope = (1.0 - 1.0 / ratio) / (2.0 * knee);
                slope * x * x
            }
        }
    }

    #[inline]
    pub fn process_sample(&mut self, input: f32) -> f32 {
        let level = input.abs();
        let coeff = if level > self.envelope {
            self.attack_coeff
        } else {
            self.release_coeff
        };
        self.envelope = coeff * self.envelope + (1.0 - coeff) * level;

        self.gain_reduction = self.compute_gain_reduction(amplitude_to_db(self.envelope));

        input * db_to_amplitude(self.makeup_db - self.gain_reduction)
    }

    /// Compress a block in time order, continuing from the current state.
    pub fn process(&mut self, input: &[f32]) -> Vec<f32> {
        input.iter().map(|&x| self.process_sample(x)).collect()
    }
}

/// Builder for configuring a Compressor with fluent API.
#[derive(Clone, Debug)]
pub struct CompressorBuilder {
    threshold_db: f32,
    ratio: f32,
    attack_seconds: f32,
    release_seconds: f32,
    auto_makeup: bool,
    knee_db: f32,
}

impl Default for CompressorBuilder {
    fn default() -> Self {
        Self {
            threshold_db: -20.0,
            ratio: 4.0,
            attack_seconds: 0.005,
            release_seconds: 0.1,
            auto_makeup: false,
            knee_db: 0.0,
        }
    }
}

impl CompressorBuilder {
    /// Set the threshold in decibels (-60.0 to 0.0 dB typical)
    pub fn threshold_db(mut self, db: f32) -> Self {
        self.threshold_db = db;
        self
    }

    /// Set the compression ratio (must be >= 1.0)
    pub fn ratio(mut self, ratio: f32) -> Self {
        self.ratio = ratio.max(1.0);
        self
    }

    /// Set the attack time in seconds (0.0001 to 0.1 typical)
    pub fn attack_seconds(mut self, seconds: f32) -> Self {
        self.attack_seconds = seconds.max(0.0);
        self
    }

    /// Set the release time in seconds (0.01 to 1.0 typical)
    pub fn release_seconds(mut self, seconds: f32) -> Self {
        self.release_seconds = seconds.max(0.0);
        self
    }

    /// Set soft knee width in decibels (0.0 = hard knee)
    pub fn soft_knee_db(mut self, db: f32) -> Self {
        self.knee_db = db.max(0.0);
        self
    }

    /// Derive makeup gain from the static curve
    pub fn auto_makeup(mut self, enabled: bool) -> Self {
        self.auto_makeup = enabled;
        self
    }

    /// Build the configured Compressor for a sample rate
    pub fn build(self, sample_rate: f64) -> Compressor {
        let comp = Compressor::new(
            self.threshold_db,
            self.ratio,
            self.attack_seconds,
            self.release_seconds,
            sample_rate,
        )
        .with_soft_knee(self.knee_db);

        if self.auto_makeup {
            comp.with_auto_makeup()
        } else {
            comp
        }
    }
}
