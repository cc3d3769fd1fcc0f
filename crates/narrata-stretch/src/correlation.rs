//! Cross-correlation alignment
//!
//! The SOLA stretcher picks each new analysis position by comparing the
//! segment that would naturally follow the current window against every
//! candidate in a small search range. The score is the plain (unnormalized)
//! sum of sample products; the largest score wins.

use std::ops::RangeInclusive;

/// Unnormalized cross-correlation of two equal-length segments.
///
/// Only the common prefix is compared if the lengths differ.
#[inline]
pub fn cross_correlation(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| x as f64 * y as f64)
        .sum()
}

/// Start position in `candidates` whose `len`-sample segment of `signal`
/// correlates best with the segment at `reference`.
///
/// Scans in ascending order and only replaces the best on a strictly
/// greater score, so ties resolve to the lowest position. Returns `None`
/// when the range is empty. Segments are cut short at the end of `signal`.
pub fn best_alignment(
    signal: &[f32],
    reference: usize,
    candidates: RangeInclusive<usize>,
    len: usize,
) -> Option<usize> {
    let segment = |start: usize| {
        let start = start.min(signal.len());
        let end = start.saturating_add(len).min(signal.len());
        &signal[start..end]
    };
    let reference = segment(reference);

    let mut best: Option<(usize, f64)> = None;
    for t in candidates {
        let score = cross_correlation(reference, segment(t));
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((t, score)),
        }
    }

    best.map(|(t, _)| t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_correlation_sum_of_products() {
        let a = [1.0, 2.0, -1.0];
        let b = [0.5, 0.5, 2.0];
        assert_eq!(cross_correlation(&a, &b), 0.5 + 1.0 - 2.0);
        assert_eq!(cross_correlation(&a, &b[..1]), 0.5);
    }

    #[test]
    fn test_best_alignment_finds_matching_shape() {
        // A spike pattern that repeats at offset 10
        let mut signal = vec![0.0_f32; 32];
        signal[2] = 1.0;
        signal[3] = -0.5;
        signal[12] = 1.0;
        signal[13] = -0.5;

        assert_eq!(best_alignment(&signal, 2, 6..=16, 4), Some(12));
    }

    #[test]
    fn test_ties_pick_lowest_candidate() {
        let silence = vec![0.0_f32; 64];
        assert_eq!(best_alignment(&silence, 0, 5..=20, 8), Some(5));

        let constant = vec![0.25_f32; 64];
        assert_eq!(best_alignment(&constant, 0, 3..=9, 8), Some(3));
    }

    #[test]
    fn test_empty_range_has_no_alignment() {
        let signal = vec![0.5_f32; 16];
        #[allow(clippy::reversed_empty_ranges)]
        let empty = 10..=4;
        assert_eq!(best_alignment(&signal, 0, empty, 4), None);
    }

    #[test]
    fn test_segments_clipped_at_signal_end() {
        let signal = vec![1.0_f32; 8];
        // Later candidates have shorter segments and lower scores
        assert_eq!(best_alignment(&signal, 0, 0..=20, 4), Some(0));
    }
}
