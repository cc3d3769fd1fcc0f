//! Audio container encoders
//!
//! - `wav`: canonical 16-bit PCM WAV via hound (pure Rust)

pub mod wav;
