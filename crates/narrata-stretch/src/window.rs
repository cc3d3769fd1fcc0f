//! Window functions

use std::f64::consts::PI;

/// Symmetric Hann window: `0.5 * (1 - cos(2πi / (len - 1)))`.
///
/// Both end points are zero. A one-point window is `[1.0]`.
pub fn hann_window(len: usize) -> Vec<f32> {
    match len {
        0 => Vec::new(),
        1 => vec![1.0],
        _ => {
            let denom = (len - 1) as f64;
            (0..len)
                .map(|i| (0.5 * (1.0 - (2.0 * PI * i as f64 / denom).cos())) as f32)
                .collect()
        }
    }
}
