//! Second-order shelving filters (audio EQ cookbook, slope 1).

use std::f64::consts::{PI, SQRT_2};

/// Which side of the corner frequency a shelf acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfKind {
    /// Boost or cut below the corner
    Low,
    /// Boost or cut above the corner
    High,
}

/// Biquad IIR filter in transposed direct form II.
///
/// Coefficients are normalized so `a0 == 1` and kept in `f64`; samples are
/// `f32` in and out.
#[derive(Debug, Clone)]
pub struct Biquad {
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,
    s1: f64,
    s2: f64,
}

impl Biquad {
    pub fn low_shelf(sample_rate: u32, frequency: f64, gain_db: f64) -> Self {
        Self::shelf(ShelfKind::Low, sample_rate, frequency, gain_db)
    }

    pub fn high_shelf(sample_rate: u32, frequency: f64, gain_db: f64) -> Self {
        Self::shelf(ShelfKind::High, sample_rate, frequency, gain_db)
    }

    /// Shelf with `Q` fixed at the slope-1 default.
    ///
    /// A corner at or past Nyquist leaves only the gain below it, so a low
    /// shelf becomes a flat `A²` and a high shelf becomes unity. A corner at
    /// or below zero is the mirror case.
    pub fn shelf(kind: ShelfKind, sample_rate: u32, frequency: f64, gain_db: f64) -> Self {
        let a = 10.0_f64.powf(gain_db / 40.0);
        let nyquist = sample_rate as f64 / 2.0;

        if frequency >= nyquist {
            return match kind {
                ShelfKind::Low => Self::flat(a * a),
                ShelfKind::High => Self::flat(1.0),
            };
        }
        if frequency <= 0.0 {
            return match kind {
                ShelfKind::Low => Self::flat(1.0),
                ShelfKind::High => Self::flat(a * a),
            };
        }

        let w0 = 2.0 * PI * frequency / sample_rate as f64;
        let cos_w0 = w0.cos();
        let alpha = w0.sin() / 2.0 * SQRT_2;
        let two_sqrt_a_alpha = 2.0 * a.sqrt() * alpha;

        let (b0, b1, b2, a0, a1, a2) = match kind {
            ShelfKind::Low => (
                a * ((a + 1.0) - (a - 1.0) * cos_w0 + two_sqrt_a_alpha),
                2.0 * a * ((a - 1.0) - (a + 1.0) * cos_w0),
                a * ((a + 1.0) - (a - 1.0) * cos_w0 - two_sqrt_a_alpha),
                (a + 1.0) + (a - 1.0) * cos_w0 + two_sqrt_a_alpha,
                -2.0 * ((a - 1.0) + (a + 1.0) * cos_w0),
                (a + 1.0) + (a - 1.0) * cos_w0 - two_sqrt_a_alpha,
            ),
            ShelfKind::High => (
                a * ((a + 1.0) + (a - 1.0) * cos_w0 + two_sqrt_a_alpha),
                -2.0 * a * ((a - 1.0) + (a + 1.0) * cos_w0),
                a * ((a + 1.0) + (a - 1.0) * cos_w0 - two_sqrt_a_alpha),
                (a + 1.0) - (a - 1.0) * cos_w0 + two_sqrt_a_alpha,
                2.0 * ((a - 1.0) - (a + 1.0) * cos_w0),
                (a + 1.0) - (a - 1.0) * cos_w0 - two_sqrt_a_alpha,
            ),
        };

        Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
            s1: 0.0,
            s2: 0.0,
        }
    }

    fn flat(gain: f64) -> Self {
        Self {
            b0: gain,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
            s1: 0.0,
            s2: 0.0,
        }
    }

    #[inline]
    pub fn process_sample(&mut self, input: f32) -> f32 {
        let x = input as f64;
        let y = self.b0 * x + self.s1;
        self.s1 = self.b1 * x - self.a1 * y + self.s2;
        self.s2 = self.b2 * x - self.a2 * y;
        y as f32
    }

    /// Filter a block in time order, continuing from the current state.
    pub fn process(&mut self, input: &[f32]) -> Vec<f32> {
        input.iter().map(|&x| self.process_sample(x)).collect()
    }

    /// Clear the delay line
    pub fn reset(&mut self) {
        self.s1 = 0.0;
        self.s2 = 0.0;
    }

    /// Linear magnitude response at `frequency` Hz.
    pub fn magnitude_at(&self, frequency: f64, sample_rate: u32) -> f64 {
        let w = 2.0 * PI * frequency / sample_rate as f64;
        let (c1, s1) = (w.cos(), w.sin());
        let (c2, s2) = ((2.0 * w).cos(), (2.0 * w).sin());

        let num_re = self.b0 + self.b1 * c1 + self.b2 * c2;
        let num_im = -(self.b1 * s1 + self.b2 * s2);
        let den_re = 1.0 + self.a1 * c1 + self.a2 * c2;
        let den_im = -(self.a1 * s1 + self.a2 * s2);

        (num_re.hypot(num_im)) / (den_re.hypot(den_im))
    }
}
