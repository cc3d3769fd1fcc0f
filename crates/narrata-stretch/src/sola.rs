//! Synchronous overlap-add time-stretching
//!
//! ## Algorithm Overview
//!
//! 1. **Overlap-add**: add a Hann-windowed input window into the output
//! 2. **Align**: search around the speed-adjusted next input position for the
//!    candidate that best continues the segment after the current window
//! 3. **Advance**: input jumps to the aligned position, output moves by a
//!    fixed synthesis hop
//!
//! Output advances at a constant rate while the input advances by
//! `hop * speed` on average, so duration scales by `1 / speed` and pitch is
//! untouched. Alignment uses the first channel only; every channel is
//! advanced by the same offsets so stereo stays phase-locked.

use crate::correlation::best_alignment;
use crate::error::{Error, Result};
use crate::types::{SolaConfig, SolaFrames};
use crate::window::hann_window;
use narrata_core::SampleBuffer;
use tracing::debug;

/// Headroom added to the accumulation buffer beyond the estimated length.
const HEADROOM_SECONDS: f64 = 5.0;
const LENGTH_MARGIN: f64 = 1.2;

/// Longest output the stretcher will allocate: the frame count of a full
/// 16-bit mono WAV data chunk.
const MAX_OUTPUT_FRAMES: usize = (u32::MAX / 2) as usize;

/// SOLA time-stretcher.
///
/// Stateless between calls; one instance can process any number of buffers
/// at any sample rate.
#[derive(Debug, Clone, Default)]
pub struct TimeStretcher {
    config: SolaConfig,
}

impl TimeStretcher {
    pub fn new(config: SolaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolaConfig {
        &self.config
    }

    /// Re-time `buffer` so it plays `speed` times faster.
    ///
    /// `speed == 1.0` returns an unchanged copy. Inputs no longer than one
    /// window yield one window of silence.
    pub fn process(&self, buffer: &SampleBuffer, speed: f64) -> Result<SampleBuffer> {
        validate_speed(speed)?;
        if speed == 1.0 {
            return Ok(buffer.clone());
        }

        let sample_rate = buffer.sample_rate();
        let frames = self.config.frames(sample_rate);
        if frames.window == 0 || frames.overlap == 0 {
            return Err(Error::InvalidParameter(format!(
                "{:?} is shorter than one frame at {} Hz",
                self.config, sample_rate
            )));
        }

        let input_frames = buffer.frame_count();
        let max_len = output_capacity(input_frames, sample_rate, speed)?;
        // Saturates at usize::MAX for huge speeds
        let target_hop = (frames.overlap as f64 * speed).round() as usize;

        debug!(
            input_frames,
            speed,
            window = frames.window,
            hop = frames.overlap,
            target_hop,
            search = frames.search,
            "SOLA stretch"
        );

        let window = hann_window(frames.window);
        let mut outputs: Vec<Vec<f32>> = (0..buffer.channel_count())
            .map(|_| vec![0.0; max_len])
            .collect();

        let mut input_offset = 0usize;
        let mut output_offset = 0usize;
        let mut grains = 0usize;

        while output_offset + frames.window < max_len
            && input_offset.saturating_add(frames.window) < input_frames
        {
            for (input, output) in buffer.channels().iter().zip(outputs.iter_mut()) {
                overlap_add(
                    &mut output[output_offset..output_offset + frames.window],
                    &input[input_offset..input_offset + frames.window],
                    &window,
                );
            }

            input_offset = next_input_offset(buffer.channel(0), input_offset, target_hop, &frames);
            output_offset += frames.overlap;
            grains += 1;
        }

        let output_len = (output_offset + frames.window).min(max_len);
        for output in &mut outputs {
            output.truncate(output_len);
        }

        debug!(grains, output_frames = output_len, "SOLA stretch complete");

        Ok(SampleBuffer::new(sample_rate, outputs)?)
    }
}

/// Stretch with the default 40/20/8 ms configuration.
pub fn time_stretch(buffer: &SampleBuffer, speed: f64) -> Result<SampleBuffer> {
    TimeStretcher::default().process(buffer, speed)
}

fn validate_speed(speed: f64) -> Result<()> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidSpeed(speed))
    }
}

/// Accumulation buffer length: `ceil(ceil(n / speed) * 1.2)` plus five
/// seconds of headroom.
fn output_capacity(input_frames: usize, sample_rate: u32, speed: f64) -> Result<usize> {
    let estimated = (input_frames as f64 / speed).ceil();
    let capacity = (estimated * LENGTH_MARGIN).ceil() + sample_rate as f64 * HEADROOM_SECONDS;
    if capacity > MAX_OUTPUT_FRAMES as f64 {
        return Err(Error::InvalidParameter(format!(
            "speed {} would stretch {} frames past {} output frames",
            speed, input_frames, MAX_OUTPUT_FRAMES
        )));
    }
    Ok(capacity as usize)
}

#[inline]
fn overlap_add(output: &mut [f32], input: &[f32], window: &[f32]) {
    for ((out, &x), &w) in output.iter_mut().zip(input).zip(window) {
        *out += w * x;
    }
}

/// Aligned start of the next analysis window.
///
/// Requires `input_offset + window < guide.len()`.
fn next_input_offset(guide: &[f32], input_offset: usize, target_hop: usize, frames: &SolaFrames) -> usize {
    let natural = input_offset + frames.overlap;
    let approx = input_offset.saturating_add(target_hop);

    let last_start = guide.len() - frames.window;
    let low = approx.saturating_sub(frames.search);
    let high = last_start.min(approx.saturating_add(frames.search));

    best_alignment(guide, natural, low..=high, frames.overlap).unwrap_or(approx)
}
