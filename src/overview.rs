//! Waveform overview result type

use serde::{Deserialize, Serialize};

use crate::config::DownscaleConfig;
use crate::error::DownscaleError;
use crate::reducer::Strategy;

/// Downsampled peaks together with the chunking that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    /// Number of input samples
    pub sample_count: usize,

    /// Bucket count the caller asked for
    pub requested_buckets: usize,

    /// Samples per chunk (the last chunk may be shorter)
    pub chunk_size: usize,

    /// Realized chunk count, equal to `peaks.len()`
    pub chunk_count: usize,

    /// Strategy used for the reduction
    pub strategy: Strategy,

    /// Maximum of each chunk, in chunk order
    pub peaks: Vec<f32>,
}

impl Overview {
    /// Downsample `samples` and keep the plan metadata alongside the peaks
    ///
    /// # Example
    ///
    /// ```
    /// use stratum_overview::{DownscaleConfig, Overview};
    ///
    /// let samples = [1.0, 5.0, 3.0, 2.0, 9.0, 0.0, 0.0, 0.0];
    /// let overview = Overview::build(&samples, 2, &DownscaleConfig::default())?;
    /// assert_eq!(overview.peaks, vec![5.0, 9.0]);
    /// assert_eq!(overview.chunk_size, 4);
    /// # Ok::<(), stratum_overview::DownscaleError>(())
    /// ```
    pub fn build(
        samples: &[f32],
        requested_buckets: usize,
        config: &DownscaleConfig,
    ) -> Result<Self, DownscaleError> {
        let plan = config
            .strategy
            .plan(samples.len(), requested_buckets, config.lane_width)?;
        let peaks = crate::reduce_planned(samples, &plan, config.strategy, config.parallel_min_len);

        Ok(Self {
            sample_count: samples.len(),
            requested_buckets,
            chunk_size: plan.chunk_size(),
            chunk_count: plan.chunk_count(),
            strategy: config.strategy,
            peaks,
        })
    }

    /// True when the input was empty
    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }
}
