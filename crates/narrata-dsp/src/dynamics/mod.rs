//! Dynamics processors.
//!
//! - [`Compressor`] - feed-forward compressor with soft knee and automatic
//!   makeup gain
//!
//! ## Example
//!
//! ```ignore
//! use narrata_dsp::Compressor;
//!
//! let mut comp = Compressor::builder()
//!     .threshold_db(-24.0)
//!     .ratio(12.0)
//!     .soft_knee_db(30.0)
//!     .attack_seconds(0.003)
//!     .release_seconds(0.25)
//!     .auto_makeup(true)
//!     .build(24000.0);
//!
//! let out = comp.process(&samples);
//! ```

mod utils;

mod compressor;

pub use compressor::{Compressor, CompressorBuilder};
