//! Configuration parameters for downsampling

use serde::{Deserialize, Serialize};

use crate::reducer::Strategy;
use crate::simd::LANES;

/// Downsampling configuration parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownscaleConfig {
    /// Reduction strategy (default: VectorTree)
    pub strategy: Strategy,

    /// Lane width the vectorized strategies align chunks to (default: 4)
    /// Must be a power of two
    pub lane_width: usize,

    /// Minimum buffer length before chunks are reduced in parallel
    /// (default: 262144, only used with the `parallel` feature)
    pub parallel_min_len: usize,
}

impl Default for DownscaleConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::VectorTree,
            lane_width: LANES,
            parallel_min_len: 1 << 18,
        }
    }
}

impl DownscaleConfig {
    /// Default configuration with a different strategy
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }
}
