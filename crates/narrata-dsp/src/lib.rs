//! Offline DSP building blocks: shelving biquads, a feed-forward compressor,
//! and the cinematic enhancement chain built from them.
//!
//! Everything here is plain sample-by-sample processing over slices; there is
//! no audio graph or host engine involved.

mod error;
pub use error::{Error, Result};

mod filter;
pub use filter::{Biquad, ShelfKind};

mod dynamics;
pub use dynamics::{Compressor, CompressorBuilder};

mod enhance;
pub use enhance::{enhance, CompressorSettings, EnhancementSettings, Enhancer, ShelfSettings};
