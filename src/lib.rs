//! # Stratum Overview
//!
//! Max-pooling downsampling of audio waveforms for fixed-width visual
//! overviews. A long buffer of `f32` samples is split into contiguous chunks
//! and each chunk is reduced to its maximum.
//!
//! ## Features
//!
//! - **Chunk planning**: unaligned and lane-aligned chunk plans
//! - **Scalar reducer**: linear scan, the correctness baseline
//! - **Vector reducers**: 4-lane SIMD scan with a linear or a pairwise
//!   ("tree") horizontal reduction, with a scalar path for short tails
//! - **Parallel reduction**: optional `rayon` fan-out over chunks for large
//!   buffers (`parallel` feature, on by default)
//!
//! ## Quick Start
//!
//! ```
//! use stratum_overview::{downscale, Strategy};
//!
//! let samples = vec![1.0f32, 5.0, 3.0, 2.0, 9.0, 0.0, 0.0, 0.0];
//! let peaks = downscale(&samples, 2, Strategy::VectorTree)?;
//! assert_eq!(peaks, vec![5.0, 9.0]);
//! # Ok::<(), stratum_overview::DownscaleError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Samples + bucket count → ChunkPlan → per-chunk Reducer → Peaks
//! ```
//!
//! The output length is the realized chunk count, which can be smaller than
//! the requested bucket count and differs between the unaligned (scalar) and
//! aligned (vector) plans.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod overview;
pub mod plan;
pub mod reducer;
pub mod simd;

// Re-export main types
pub use config::DownscaleConfig;
pub use error::DownscaleError;
pub use overview::Overview;
pub use plan::{plan_aligned, plan_unaligned, ChunkPlan};
pub use reducer::Strategy;

/// Main downsampling function
///
/// Plans the chunking for `strategy` (unaligned for scalar, aligned to
/// [`simd::LANES`] for the vector strategies) and returns the maximum of each
/// chunk.
///
/// # Arguments
///
/// * `samples` - Input samples
/// * `requested_buckets` - Desired output length (must be > 0)
/// * `strategy` - Reduction strategy
///
/// # Returns
///
/// One value per chunk, in order. The length is the realized chunk count:
/// between 1 and `requested_buckets` for non-empty input, 0 for empty input.
///
/// # Errors
///
/// Returns `DownscaleError::InvalidArgument` if `requested_buckets` is 0.
///
/// # Example
///
/// ```
/// use stratum_overview::{downscale, Strategy};
///
/// let peaks = downscale(&[-3.0, -1.0, -7.0, -2.0], 1, Strategy::Scalar)?;
/// assert_eq!(peaks, vec![-1.0]);
/// # Ok::<(), stratum_overview::DownscaleError>(())
/// ```
pub fn downscale(
    samples: &[f32],
    requested_buckets: usize,
    strategy: Strategy,
) -> Result<Vec<f32>, DownscaleError> {
    downscale_with_config(
        samples,
        requested_buckets,
        &DownscaleConfig::with_strategy(strategy),
    )
}

/// Downsample with an explicit configuration
///
/// # Errors
///
/// Returns `DownscaleError::InvalidArgument` if `requested_buckets` is 0 or
/// `config.lane_width` is not a power of two.
pub fn downscale_with_config(
    samples: &[f32],
    requested_buckets: usize,
    config: &DownscaleConfig,
) -> Result<Vec<f32>, DownscaleError> {
    let plan = config
        .strategy
        .plan(samples.len(), requested_buckets, config.lane_width)?;

    log::debug!(
        "Downscaling {} samples into {} chunks of {} ({} strategy, {} backend)",
        samples.len(),
        plan.chunk_count(),
        plan.chunk_size(),
        config.strategy,
        simd::BACKEND
    );

    Ok(reduce_planned(
        samples,
        &plan,
        config.strategy,
        config.parallel_min_len,
    ))
}

/// Reduce `samples` over a caller-supplied plan
///
/// Lets any strategy run over any plan, e.g. the scalar reducer over an
/// aligned plan when comparing strategies chunk for chunk.
///
/// # Errors
///
/// Returns `DownscaleError::InvalidArgument` if the plan was computed for a
/// buffer of a different length.
///
/// # Example
///
/// ```
/// use stratum_overview::{downscale_with_plan, plan_aligned, Strategy};
///
/// let samples: Vec<f32> = (0..10).map(|i| i as f32).collect();
/// let plan = plan_aligned(samples.len(), 3, 4)?;
/// let scalar = downscale_with_plan(&samples, &plan, Strategy::Scalar)?;
/// let vector = downscale_with_plan(&samples, &plan, Strategy::VectorLinear)?;
/// assert_eq!(scalar, vector);
/// # Ok::<(), stratum_overview::DownscaleError>(())
/// ```
pub fn downscale_with_plan(
    samples: &[f32],
    plan: &ChunkPlan,
    strategy: Strategy,
) -> Result<Vec<f32>, DownscaleError> {
    if plan.buffer_len() != samples.len() {
        return Err(DownscaleError::InvalidArgument(format!(
            "Plan covers {} samples but buffer has {}",
            plan.buffer_len(),
            samples.len()
        )));
    }

    Ok(reduce_planned(
        samples,
        plan,
        strategy,
        DownscaleConfig::default().parallel_min_len,
    ))
}

/// Reduce every chunk of a plan that matches `samples`
pub(crate) fn reduce_planned(
    samples: &[f32],
    plan: &ChunkPlan,
    strategy: Strategy,
    parallel_min_len: usize,
) -> Vec<f32> {
    debug_assert_eq!(plan.buffer_len(), samples.len());

    if plan.is_empty() {
        return Vec::new();
    }

    let chunk_size = plan.chunk_size();

    #[cfg(feature = "parallel")]
    {
        if samples.len() >= parallel_min_len {
            use rayon::prelude::*;

            log::debug!("Reducing {} chunks in parallel", plan.chunk_count());
            return samples
                .par_chunks(chunk_size)
                .map(|chunk| strategy.reduce(chunk))
                .collect();
        }
    }

    #[cfg(not(feature = "parallel"))]
    let _ = parallel_min_len;

    samples
        .chunks(chunk_size)
        .map(|chunk| strategy.reduce(chunk))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downscale_scenario_aligned() {
        let samples = [1.0, 5.0, 3.0, 2.0, 9.0, 0.0, 0.0, 0.0];
        for strategy in Strategy::ALL {
            assert_eq!(downscale(&samples, 2, strategy).unwrap(), vec![5.0, 9.0]);
        }
    }

    #[test]
    fn test_downscale_negative_only() {
        let samples = [-3.0, -1.0, -7.0, -2.0];
        for strategy in Strategy::ALL {
            assert_eq!(downscale(&samples, 1, strategy).unwrap(), vec![-1.0]);
        }
    }

    #[test]
    fn test_downscale_partial_last_chunk() {
        let samples = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let peaks = downscale(&samples, 3, Strategy::VectorLinear).unwrap();
        assert_eq!(peaks, vec![3.0, 7.0, 9.0]);
        let peaks = downscale(&samples, 3, Strategy::VectorTree).unwrap();
        assert_eq!(peaks, vec![3.0, 7.0, 9.0]);
    }

    #[test]
    fn test_downscale_empty() {
        for strategy in Strategy::ALL {
            assert!(downscale(&[], 10, strategy).unwrap().is_empty());
        }
    }

    #[test]
    fn test_downscale_zero_buckets() {
        for strategy in Strategy::ALL {
            assert!(matches!(
                downscale(&[1.0, 2.0], 0, strategy),
                Err(DownscaleError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_downscale_bad_lane_width() {
        let config = DownscaleConfig {
            lane_width: 6,
            ..DownscaleConfig::default()
        };
        assert!(downscale_with_config(&[1.0; 16], 2, &config).is_err());
    }

    #[test]
    fn test_downscale_with_plan_length_mismatch() {
        let plan = plan_unaligned(8, 2).unwrap();
        assert!(downscale_with_plan(&[1.0; 9], &plan, Strategy::Scalar).is_err());
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let samples: Vec<f32> = (0..50_000).map(|i| ((i * 7919) % 1013) as f32 - 500.0).collect();
        let sequential = DownscaleConfig {
            parallel_min_len: usize::MAX,
            ..DownscaleConfig::default()
        };
        let parallel = DownscaleConfig {
            parallel_min_len: 0,
            ..DownscaleConfig::default()
        };

        for strategy in Strategy::ALL {
            let seq = downscale_with_config(
                &samples,
                333,
                &DownscaleConfig { strategy, ..sequential.clone() },
            )
            .unwrap();
            let par = downscale_with_config(
                &samples,
                333,
                &DownscaleConfig { strategy, ..parallel.clone() },
            )
            .unwrap();
            assert_eq!(seq, par, "{}", strategy);
        }
    }
}
