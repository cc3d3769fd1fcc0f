//! Tolerance constants for audio testing.
//!
//! Different operations require different precision levels.

/// Floating point rounding errors (for passthrough, exact gain).
pub const FLOAT_EPSILON: f32 = 1e-6;

/// DSP processing tolerance (filters may have slight variations).
pub const DSP_EPSILON: f32 = 1e-4;

/// Silence threshold (~-80dB).
/// Values below this are considered silent.
pub const SILENCE_THRESHOLD: f32 = 0.0001;

/// 16-bit quantization step size.
/// Use when testing a float -> i16 -> float round trip.
pub const INT16_EPSILON: f32 = 1.0 / 32768.0;

/// Allowed deviation of a stretched length from `frames / speed`.
pub const STRETCH_LENGTH_TOLERANCE: f64 = 0.25;

/// Float -> i16 -> float round trip bound.
/// Positive samples scale by 32767, truncate, and come back divided by
/// 32768, so the error stays below two quantization steps.
pub const ROUND_TRIP_EPSILON: f32 = 2.0 / 32768.0;
