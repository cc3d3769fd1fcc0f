//! # Narrata - Story Narration Audio Pipeline
//!
//! Turns the raw audio a text-to-speech service returns into a finished,
//! listenable WAV file.
//!
//! ## Architecture
//!
//! Narrata is an umbrella crate that coordinates:
//! - **narrata-core** - `SampleBuffer`, shared errors, playback clock formatting
//! - **narrata-codec** - WAV/raw PCM decoding, canonical WAV encoding, base64 payloads
//! - **narrata-dsp** - Shelving EQ, compressor, cinematic enhancement chain
//! - **narrata-stretch** - Pitch-preserving SOLA time-stretching
//!
//! ## Quick Start
//!
//! ```no_run
//! use narrata::prelude::*;
//!
//! # fn main() -> narrata::Result<()> {
//! # let tts_bytes: Vec<u8> = Vec::new();
//! let pipeline = Pipeline::builder()
//!     .raw_format(RawPcmFormat::mono(24000))
//!     .speed(1.5)
//!     .build()?;
//!
//! let audio = pipeline.render(&tts_bytes)?;
//! std::fs::write("story.wav", audio.bytes()).ok();
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `async` - `Pipeline::render_async`, yielding to tokio between stages

/// Re-export of narrata-core for direct access
pub use narrata_core as core;

/// Re-export of narrata-codec
pub use narrata_codec as codec;

/// Re-export of narrata-dsp
pub use narrata_dsp as dsp;

/// Re-export of narrata-stretch
pub use narrata_stretch as stretch;

// Core types
pub use narrata_core::{format_time, RawPcmFormat, SampleBuffer, DEFAULT_CHANNEL_COUNT, DEFAULT_SAMPLE_RATE};

// Stages
pub use narrata_codec::{decode, decode_base64_payload, detect_container, encode_wav, Container, WAV_MIME_TYPE};
pub use narrata_dsp::{enhance, EnhancementSettings, Enhancer};
pub use narrata_stretch::{time_stretch, SolaConfig, TimeStretcher};

mod config;
mod error;
pub mod narration;
mod pipeline;

pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use narration::{apply_pause_style, PauseStrength};
pub use pipeline::{Pipeline, PipelineBuilder, RenderedAudio};

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{Pipeline, PipelineBuilder, PipelineConfig, RenderedAudio};

    pub use crate::{PauseStrength, RawPcmFormat, SampleBuffer};

    pub use crate::{Error, Result};
}
