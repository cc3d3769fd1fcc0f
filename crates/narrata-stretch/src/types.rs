//! SOLA parameters.

use crate::error::{Error, Result};

/// Window, hop and search lengths for the SOLA stretcher, in milliseconds.
///
/// The defaults (40/20/8 ms) suit speech at any common sample rate. The
/// search radius must stay well below the hop, or the search can lock onto
/// the segment that was just placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolaConfig {
    /// Analysis/synthesis window length
    pub window_ms: f64,
    /// Synthesis hop; also the length of the segment compared during alignment
    pub overlap_ms: f64,
    /// Radius of the alignment search around the speed-adjusted position
    pub search_ms: f64,
}

impl Default for SolaConfig {
    fn default() -> Self {
        Self {
            window_ms: 40.0,
            overlap_ms: 20.0,
            search_ms: 8.0,
        }
    }
}

/// [`SolaConfig`] resolved to frame counts at one sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolaFrames {
    pub window: usize,
    pub overlap: usize,
    pub search: usize,
}

impl SolaConfig {
    pub fn new(window_ms: f64, overlap_ms: f64, search_ms: f64) -> Self {
        Self {
            window_ms,
            overlap_ms,
            search_ms,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.window_ms.is_finite() && self.window_ms > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "window must be positive, got {} ms",
                self.window_ms
            )));
        }
        if !(self.overlap_ms.is_finite() && self.overlap_ms > 0.0) || self.overlap_ms > self.window_ms {
            return Err(Error::InvalidParameter(format!(
                "overlap must be positive and no longer than the window, got {} ms",
                self.overlap_ms
            )));
        }
        if !(self.search_ms.is_finite() && self.search_ms >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "search radius must be non-negative, got {} ms",
                self.search_ms
            )));
        }
        Ok(())
    }

    /// Frame counts at `sample_rate`, each `round(sample_rate * ms / 1000)`.
    pub fn frames(&self, sample_rate: u32) -> SolaFrames {
        let to_frames = |ms: f64| (sample_rate as f64 * ms / 1000.0).round() as usize;
        SolaFrames {
            window: to_frames(self.window_ms),
            overlap: to_frames(self.overlap_ms),
            search: to_frames(self.search_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frames_at_24k() {
        let frames = SolaConfig::default().frames(24000);
        assert_eq!(
            frames,
            SolaFrames {
                window: 960,
                overlap: 480,
                search: 192,
            }
        );
    }

    #[test]
    fn test_frames_round_to_nearest() {
        // 22050 * 0.008 = 176.4, 22050 * 0.02 = 441
        let frames = SolaConfig::default().frames(22050);
        assert_eq!(frames.window, 882);
        assert_eq!(frames.overlap, 441);
        assert_eq!(frames.search, 176);

        // 44100 * 0.008 = 352.8
        assert_eq!(SolaConfig::default().frames(44100).search, 353);
    }

    #[test]
    fn test_validate() {
        assert!(SolaConfig::default().validate().is_ok());
        assert!(SolaConfig::new(0.0, 20.0, 8.0).validate().is_err());
        assert!(SolaConfig::new(40.0, 50.0, 8.0).validate().is_err());
        assert!(SolaConfig::new(40.0, 20.0, -1.0).validate().is_err());
        assert!(SolaConfig::new(40.0, f64::NAN, 8.0).validate().is_err());
    }
}
