//! Core types shared by every stage of the narrata audio pipeline.
//!
//! - [`SampleBuffer`]: the immutable, validated multi-channel float buffer that
//!   flows between the decoder, enhancer, time-stretcher and encoder
//! - [`RawPcmFormat`]: out-of-band format used when input bytes carry no header
//! - [`Error`]: parameter and payload errors common to all stages

mod buffer;
mod error;
mod format;
mod time;

pub use buffer::SampleBuffer;
pub use error::{Error, Result};
pub use format::{RawPcmFormat, DEFAULT_CHANNEL_COUNT, DEFAULT_SAMPLE_RATE, MAX_CHANNELS};
pub use time::format_time;
