//! Vectorized reducer with a linear horizontal reduction
//!
//! Scans the chunk in 4-lane strides keeping a lane-wise running maximum,
//! then collapses the lanes with `max(max(l0, l1), max(l2, l3))`. Elements
//! past the last whole stride go through a scalar scan.

use super::{accumulate_lanes, scalar::max_scalar};

/// Maximum of `chunk` using 4-lane vectors and a linear lane collapse
///
/// Chunks shorter than the lane width fall back to [`max_scalar`].
///
/// # Example
///
/// ```
/// use stratum_overview::reducer::linear::max_vector_linear;
///
/// assert_eq!(max_vector_linear(&[1.0, 5.0, 3.0, 2.0, 9.0, 0.0]), 9.0);
/// ```
#[inline]
pub fn max_vector_linear(chunk: &[f32]) -> f32 {
    match accumulate_lanes(chunk) {
        Some((lanes, tail)) => tail
            .iter()
            .fold(lanes.reduce_max_linear(), |max, &sample| max.max(sample)),
        None => max_scalar(chunk),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_strides() {
        assert_eq!(max_vector_linear(&[1.0, 5.0, 3.0, 2.0]), 5.0);
        assert_eq!(
            max_vector_linear(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]),
            8.0
        );
    }

    #[test]
    fn test_short_chunk_uses_scalar_fallback() {
        assert_eq!(max_vector_linear(&[2.0, -1.0]), 2.0);
        assert_eq!(max_vector_linear(&[-4.0]), -4.0);
        assert_eq!(max_vector_linear(&[]), f32::NEG_INFINITY);
    }

    #[test]
    fn test_max_in_tail() {
        // One full stride then a 3-element tail holding the maximum
        assert_eq!(
            max_vector_linear(&[0.0, 0.1, 0.2, 0.3, 0.4, 12.0, 0.6]),
            12.0
        );
    }

    #[test]
    fn test_negative_only() {
        assert_eq!(
            max_vector_linear(&[-3.0, -1.0, -7.0, -2.0, -9.0, -8.0, -6.0, -5.0]),
            -1.0
        );
    }
}
