//! Chunk planning for max-pooling downsampling
//!
//! A plan splits a buffer of `buffer_len` samples into `chunk_count`
//! contiguous, non-overlapping chunks of `chunk_size` samples. Only the last
//! chunk may be shorter.
//!
//! Two variants are provided:
//! - [`plan_unaligned`]: `chunk_size = ceil(len / buckets)`
//! - [`plan_aligned`]: as above, rounded up to a multiple of the lane width so
//!   every chunk but the last can be scanned in whole vector strides
//!
//! In both cases `chunk_count = ceil(len / chunk_size)`, which can be smaller
//! than the requested bucket count. Callers must read the realized count back
//! from the plan.
//!
//! # Example
//!
//! ```
//! use stratum_overview::plan::plan_aligned;
//!
//! let plan = plan_aligned(10, 3, 4)?;
//! assert_eq!(plan.chunk_size(), 4);
//! assert_eq!(plan.chunk_count(), 3);
//! assert_eq!(plan.chunk_range(2), Some(8..10));
//! # Ok::<(), stratum_overview::DownscaleError>(())
//! ```

use std::ops::Range;

use serde::Serialize;

use crate::error::DownscaleError;

/// Partition of a sample buffer into contiguous chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChunkPlan {
    buffer_len: usize,
    chunk_size: usize,
    chunk_count: usize,
}

impl ChunkPlan {
    /// Plan for an empty buffer: no chunks, empty output
    fn empty() -> Self {
        Self {
            buffer_len: 0,
            chunk_size: 0,
            chunk_count: 0,
        }
    }

    /// Caller guarantees `buffer_len > 0` and `chunk_size > 0`
    fn with_chunk_size(buffer_len: usize, chunk_size: usize) -> Self {
        debug_assert!(buffer_len > 0 && chunk_size > 0);
        Self {
            buffer_len,
            chunk_size,
            chunk_count: buffer_len.div_ceil(chunk_size),
        }
    }

    /// Length of the buffer this plan was computed for
    pub fn buffer_len(&self) -> usize {
        self.buffer_len
    }

    /// Nominal chunk size (0 for an empty buffer)
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Realized number of chunks, i.e. the output length
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    /// True when the plan covers an empty buffer
    pub fn is_empty(&self) -> bool {
        self.chunk_count == 0
    }

    /// Index range of chunk `index` within the buffer, or `None` when out of range
    pub fn chunk_range(&self, index: usize) -> Option<Range<usize>> {
        if index >= self.chunk_count {
            return None;
        }
        let start = index * self.chunk_size;
        let end = (start + self.chunk_size).min(self.buffer_len);
        Some(start..end)
    }

    /// Index ranges of all chunks, in order
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> {
        let plan = *self;
        (0..plan.chunk_count).filter_map(move |i| plan.chunk_range(i))
    }

    /// Length of the final chunk (0 for an empty buffer)
    pub fn last_chunk_len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.buffer_len - (self.chunk_count - 1) * self.chunk_size
    }

    /// True when every chunk has exactly `chunk_size` samples
    pub fn is_uniform(&self) -> bool {
        self.buffer_len % self.chunk_size.max(1) == 0
    }
}

fn validate_buckets(requested_buckets: usize) -> Result<(), DownscaleError> {
    if requested_buckets == 0 {
        return Err(DownscaleError::InvalidArgument(
            "Requested bucket count must be > 0".to_string(),
        ));
    }
    Ok(())
}

fn validate_lane_width(lane_width: usize) -> Result<(), DownscaleError> {
    if lane_width == 0 {
        return Err(DownscaleError::InvalidArgument(
            "Lane width must be > 0".to_string(),
        ));
    }
    if !lane_width.is_power_of_two() {
        return Err(DownscaleError::InvalidArgument(format!(
            "Lane width must be a power of two, got {}",
            lane_width
        )));
    }
    Ok(())
}

/// Plan chunks with no alignment constraint on the chunk size
///
/// # Arguments
///
/// * `buffer_len` - Number of samples in the buffer
/// * `requested_buckets` - Desired output length (must be > 0)
///
/// # Errors
///
/// Returns `DownscaleError::InvalidArgument` if `requested_buckets` is 0.
pub fn plan_unaligned(
    buffer_len: usize,
    requested_buckets: usize,
) -> Result<ChunkPlan, DownscaleError> {
    validate_buckets(requested_buckets)?;

    if buffer_len == 0 {
        return Ok(ChunkPlan::empty());
    }

    let chunk_size = buffer_len.div_ceil(requested_buckets);
    let plan = ChunkPlan::with_chunk_size(buffer_len, chunk_size);

    log::debug!(
        "Unaligned plan: {} samples, {} buckets requested -> chunk_size={}, chunk_count={}",
        buffer_len,
        requested_buckets,
        plan.chunk_size,
        plan.chunk_count
    );

    Ok(plan)
}

/// Plan chunks whose size is a multiple of `lane_width`
///
/// Used by the vectorized reducers. Rounding the chunk size up generally
/// yields fewer, larger chunks than [`plan_unaligned`] for the same request.
///
/// # Arguments
///
/// * `buffer_len` - Number of samples in the buffer
/// * `requested_buckets` - Desired output length (must be > 0)
/// * `lane_width` - Vector lane count (must be a power of two)
///
/// # Errors
///
/// Returns `DownscaleError::InvalidArgument` if `requested_buckets` is 0 or
/// `lane_width` is not a power of two.
pub fn plan_aligned(
    buffer_len: usize,
    requested_buckets: usize,
    lane_width: usize,
) -> Result<ChunkPlan, DownscaleError> {
    validate_buckets(requested_buckets)?;
    validate_lane_width(lane_width)?;

    if buffer_len == 0 {
        return Ok(ChunkPlan::empty());
    }

    let chunk_size = buffer_len
        .div_ceil(requested_buckets)
        .next_multiple_of(lane_width);
    let plan = ChunkPlan::with_chunk_size(buffer_len, chunk_size);

    log::debug!(
        "Aligned plan (lanes={}): {} samples, {} buckets requested -> chunk_size={}, chunk_count={}",
        lane_width,
        buffer_len,
        requested_buckets,
        plan.chunk_size,
        plan.chunk_count
    );

    Ok(plan)
}
