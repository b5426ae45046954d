//! Per-chunk max reducers
//!
//! Three interchangeable algorithms compute the maximum of one chunk:
//! - [`scalar`]: linear scan, the reference implementation
//! - [`linear`]: 4-lane vector scan with a linear horizontal reduction
//! - [`tree`]: 4-lane vector scan with a pairwise horizontal reduction
//!
//! All three seed the running maximum from the chunk's first element and scan
//! every element, so for finite input they return identical values for the
//! same chunk.

pub mod linear;
pub mod scalar;
pub mod tree;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DownscaleError;
use crate::plan::{plan_aligned, plan_unaligned, ChunkPlan};
use crate::simd::{F32x4, LANES};

/// Reduction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Scalar linear scan over an unaligned plan
    Scalar,
    /// Vector scan, linear lane collapse, lane-aligned plan
    VectorLinear,
    /// Vector scan, pairwise lane collapse, lane-aligned plan
    VectorTree,
}

impl Strategy {
    /// Every strategy, in reference-first order
    pub const ALL: [Strategy; 3] = [
        Strategy::Scalar,
        Strategy::VectorLinear,
        Strategy::VectorTree,
    ];

    /// Short name used in logs and CLI arguments
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Scalar => "scalar",
            Strategy::VectorLinear => "vector_linear",
            Strategy::VectorTree => "vector_tree",
        }
    }

    /// True for the strategies that scan in vector strides
    pub fn is_vectorized(&self) -> bool {
        !matches!(self, Strategy::Scalar)
    }

    /// Plan the chunking this strategy uses
    ///
    /// The scalar strategy plans without alignment; the vectorized ones round
    /// the chunk size up to a multiple of `lane_width`.
    pub fn plan(
        &self,
        buffer_len: usize,
        requested_buckets: usize,
        lane_width: usize,
    ) -> Result<ChunkPlan, DownscaleError> {
        if self.is_vectorized() {
            plan_aligned(buffer_len, requested_buckets, lane_width)
        } else {
            plan_unaligned(buffer_len, requested_buckets)
        }
    }

    /// Maximum of one chunk
    #[inline]
    pub fn reduce(&self, chunk: &[f32]) -> f32 {
        match self {
            Strategy::Scalar => scalar::max_scalar(chunk),
            Strategy::VectorLinear => linear::max_vector_linear(chunk),
            Strategy::VectorTree => tree::max_vector_tree(chunk),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = DownscaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scalar" | "basic" => Ok(Strategy::Scalar),
            "vector_linear" | "linear" => Ok(Strategy::VectorLinear),
            "vector_tree" | "tree" => Ok(Strategy::VectorTree),
            other => Err(DownscaleError::InvalidArgument(format!(
                "Unknown strategy '{}' (expected scalar, vector_linear or vector_tree)",
                other
            ))),
        }
    }
}

/// Fold every whole `LANES`-wide stride of `chunk` into a lane-wise maximum
///
/// The accumulator is seeded by broadcasting `chunk[0]`. Returns the
/// accumulator and the elements past the last whole stride, or `None` when
/// the chunk is shorter than one stride.
#[inline(always)]
fn accumulate_lanes(chunk: &[f32]) -> Option<(F32x4, &[f32])> {
    if chunk.len() < LANES {
        return None;
    }

    let strides = chunk.chunks_exact(LANES);
    let tail = strides.remainder();
    let lanes = strides.fold(F32x4::splat(chunk[0]), |acc, stride| {
        acc.max(F32x4::from_slice(stride))
    });

    Some((lanes, tail))
}
