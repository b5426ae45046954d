//! Vectorized reducer with a pairwise ("tree") horizontal reduction
//!
//! Same stride accumulation as [`super::linear`]. The lane collapse folds the
//! vector against a copy with its halves swapped (`[c, d, a, b]`), leaving
//! `[max(a, c), max(b, d), ..]`, and finishes with one scalar max of those
//! two lanes. One shuffle replaces one scalar comparison.

use super::{accumulate_lanes, scalar::max_scalar};

/// Maximum of `chunk` using 4-lane vectors and a pairwise lane collapse
///
/// Chunks shorter than the lane width fall back to [`max_scalar`].
///
/// # Example
///
/// ```
/// use stratum_overview::reducer::tree::max_vector_tree;
///
/// assert_eq!(max_vector_tree(&[1.0, 2.0, 8.0, 4.0]), 8.0);
/// ```
#[inline]
pub fn max_vector_tree(chunk: &[f32]) -> f32 {
    match accumulate_lanes(chunk) {
        Some((lanes, tail)) => tail
            .iter()
            .fold(lanes.reduce_max_tree(), |max, &sample| max.max(sample)),
        None => max_scalar(chunk),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::linear::max_vector_linear;

    #[test]
    fn test_max_in_upper_lanes() {
        // Maxima that only survive if the reduced vector is read back
        assert_eq!(max_vector_tree(&[1.0, 2.0, 8.0, 4.0]), 8.0);
        assert_eq!(max_vector_tree(&[1.0, 2.0, 3.0, 9.0]), 9.0);
        assert_eq!(max_vector_tree(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 5.0, 0.0]), 5.0);
    }

    #[test]
    fn test_short_chunk_uses_scalar_fallback() {
        assert_eq!(max_vector_tree(&[-2.0, -3.0]), -2.0);
        assert_eq!(max_vector_tree(&[]), f32::NEG_INFINITY);
    }

    #[test]
    fn test_matches_linear_for_every_max_position() {
        for len in 1..=19 {
            for pos in 0..len {
                let mut chunk: Vec<f32> = (0..len).map(|i| -(i as f32) - 1.0).collect();
                chunk[pos] = 100.0;
                assert_eq!(max_vector_tree(&chunk), 100.0, "len={} pos={}", len, pos);
                assert_eq!(max_vector_tree(&chunk), max_vector_linear(&chunk));
            }
        }
    }
}
