//! Scalar reference reducer
//!
//! Linear scan with the running maximum seeded from the chunk's first
//! element. This is the correctness baseline for the vectorized reducers.

/// Maximum of `chunk` by a plain linear scan
///
/// The running maximum starts at `chunk[0]` and every element, including the
/// first, is compared. Negative-only chunks keep their true (negative)
/// maximum. An empty chunk yields `f32::NEG_INFINITY`.
///
/// # Example
///
/// ```
/// use stratum_overview::reducer::scalar::max_scalar;
///
/// assert_eq!(max_scalar(&[-3.0, -1.0, -7.0, -2.0]), -1.0);
/// assert_eq!(max_scalar(&[0.25]), 0.25);
/// ```
#[inline]
pub fn max_scalar(chunk: &[f32]) -> f32 {
    let Some(&first) = chunk.first() else {
        return f32::NEG_INFINITY;
    };
    chunk.iter().fold(first, |max, &sample| max.max(sample))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_scalar_basic() {
        assert_eq!(max_scalar(&[1.0, 5.0, 3.0, 2.0]), 5.0);
        assert_eq!(max_scalar(&[9.0, 0.0, 0.0, 0.0]), 9.0);
    }

    #[test]
    fn test_max_scalar_first_element_counts() {
        // The first element is the maximum and must not be skipped
        assert_eq!(max_scalar(&[7.0, 1.0, 2.0]), 7.0);
    }

    #[test]
    fn test_max_scalar_negative_not_clamped() {
        assert_eq!(max_scalar(&[-3.0, -1.0, -7.0, -2.0]), -1.0);
        assert_eq!(max_scalar(&[-0.5]), -0.5);
    }

    #[test]
    fn test_max_scalar_empty() {
        assert_eq!(max_scalar(&[]), f32::NEG_INFINITY);
    }
}
