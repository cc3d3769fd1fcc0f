//! Pitch-preserving time-stretching for narration audio.
//!
//! A synchronous overlap-add (SOLA) stretcher that aligns each new window by
//! cross-correlation, so speech can be sped up or slowed down without
//! changing its pitch.
//!
//! ```no_run
//! use narrata_core::SampleBuffer;
//! use narrata_stretch::time_stretch;
//!
//! # fn main() -> narrata_stretch::Result<()> {
//! let speech = SampleBuffer::mono(24000, vec![0.0; 48000])?;
//! let faster = time_stretch(&speech, 1.5)?;
//! assert!(faster.frame_count() < speech.frame_count());
//! # Ok(())
//! # }
//! ```

mod error;
pub use error::{Error, Result};

mod types;
pub use types::{SolaConfig, SolaFrames};

mod window;
pub use window::hann_window;

pub mod correlation;

mod sola;
pub use sola::{time_stretch, TimeStretcher};
