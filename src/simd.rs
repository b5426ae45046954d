//! Portable 4-lane `f32` vector used by the vectorized reducers
//!
//! [`F32x4`] exposes the handful of operations the reducers need: splat,
//! unaligned load, lane-wise max, a half-swapping shuffle, lane extraction and
//! the two horizontal reductions.
//!
//! # Backends
//!
//! | Target     | Backend      | Lane-wise max    |
//! |------------|--------------|------------------|
//! | `x86_64`   | SSE (128-bit)| `_mm_max_ps`     |
//! | `aarch64`  | NEON         | `vmaxnmq_f32`    |
//! | other      | `[f32; 4]`   | `f32::max`       |
//!
//! SSE and NEON are part of the baseline of their targets, so no runtime
//! feature detection is needed.
//!
//! NaN handling differs between backends; results for chunks containing NaN
//! are unspecified.

/// Number of `f32` lanes in a vector
pub const LANES: usize = 4;

/// Name of the compiled backend, for logging
#[cfg(target_arch = "x86_64")]
pub const BACKEND: &str = "sse";
/// Name of the compiled backend, for logging
#[cfg(target_arch = "aarch64")]
pub const BACKEND: &str = "neon";
/// Name of the compiled backend, for logging
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub const BACKEND: &str = "portable";

#[cfg(target_arch = "x86_64")]
mod imp {
    use std::arch::x86_64::*;

    pub type Repr = __m128;

    #[inline(always)]
    pub fn splat(value: f32) -> Repr {
        // SAFETY: SSE is baseline on x86_64
        unsafe { _mm_set1_ps(value) }
    }

    /// # Safety
    ///
    /// `ptr` must be valid for reading 4 consecutive `f32`s.
    #[inline(always)]
    pub unsafe fn load(ptr: *const f32) -> Repr {
        _mm_loadu_ps(ptr)
    }

    #[inline(always)]
    pub fn max(a: Repr, b: Repr) -> Repr {
        // SAFETY: SSE is baseline on x86_64
        unsafe { _mm_max_ps(a, b) }
    }

    /// [a, b, c, d] -> [c, d, a, b]
    #[inline(always)]
    pub fn swap_halves(v: Repr) -> Repr {
        // SAFETY: SSE is baseline on x86_64
        unsafe { _mm_shuffle_ps::<0b01_00_11_10>(v, v) }
    }

    #[inline(always)]
    pub fn to_array(v: Repr) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        // SAFETY: `out` holds exactly 4 f32s
        unsafe { _mm_storeu_ps(out.as_mut_ptr(), v) };
        out
    }
}

#[cfg(target_arch = "aarch64")]
mod imp {
    use std::arch::aarch64::*;

    pub type Repr = float32x4_t;

    #[inline(always)]
    pub fn splat(value: f32) -> Repr {
        // SAFETY: NEON is baseline on aarch64
        unsafe { vdupq_n_f32(value) }
    }

    /// # Safety
    ///
    /// `ptr` must be valid for reading 4 consecutive `f32`s.
    #[inline(always)]
    pub unsafe fn load(ptr: *const f32) -> Repr {
        vld1q_f32(ptr)
    }

    #[inline(always)]
    pub fn max(a: Repr, b: Repr) -> Repr {
        // SAFETY: NEON is baseline on aarch64
        unsafe { vmaxnmq_f32(a, b) }
    }

    /// [a, b, c, d] -> [c, d, a, b]
    #[inline(always)]
    pub fn swap_halves(v: Repr) -> Repr {
        // SAFETY: NEON is baseline on aarch64
        unsafe { vextq_f32::<2>(v, v) }
    }

    #[inline(always)]
    pub fn to_array(v: Repr) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        // SAFETY: `out` holds exactly 4 f32s
        unsafe { vst1q_f32(out.as_mut_ptr(), v) };
        out
    }
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
mod imp {
    pub type Repr = [f32; 4];

    #[inline(always)]
    pub fn splat(value: f32) -> Repr {
        [value; 4]
    }

    /// # Safety
    ///
    /// `ptr` must be valid for reading 4 consecutive `f32`s.
    #[inline(always)]
    pub unsafe fn load(ptr: *const f32) -> Repr {
        std::ptr::read_unaligned(ptr as *const [f32; 4])
    }

    #[inline(always)]
    pub fn max(a: Repr, b: Repr) -> Repr {
        [a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2]), a[3].max(b[3])]
    }

    #[inline(always)]
    pub fn swap_halves(v: Repr) -> Repr {
        [v[2], v[3], v[0], v[1]]
    }

    #[inline(always)]
    pub fn to_array(v: Repr) -> [f32; 4] {
        v
    }
}

/// Four `f32` lanes held in a native vector register where available
#[derive(Clone, Copy)]
pub struct F32x4(imp::Repr);

impl F32x4 {
    /// Broadcast `value` to all lanes
    #[inline(always)]
    pub fn splat(value: f32) -> Self {
        Self(imp::splat(value))
    }

    /// Load the first four elements of `slice`
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than [`LANES`] elements.
    #[inline(always)]
    pub fn from_slice(slice: &[f32]) -> Self {
        assert!(
            slice.len() >= LANES,
            "F32x4::from_slice needs {} elements, got {}",
            LANES,
            slice.len()
        );
        // SAFETY: length checked above
        Self(unsafe { imp::load(slice.as_ptr()) })
    }

    /// Lane-wise maximum
    #[inline(always)]
    pub fn max(self, other: Self) -> Self {
        Self(imp::max(self.0, other.0))
    }

    /// Rotate the upper two lanes into the lower two: `[a, b, c, d] -> [c, d, a, b]`
    #[inline(always)]
    pub fn swap_halves(self) -> Self {
        Self(imp::swap_halves(self.0))
    }

    /// Copy the lanes out, lane 0 first
    #[inline(always)]
    pub fn to_array(self) -> [f32; LANES] {
        imp::to_array(self.0)
    }

    /// Horizontal max by three scalar comparisons: `max(max(l0, l1), max(l2, l3))`
    #[inline(always)]
    pub fn reduce_max_linear(self) -> f32 {
        let [l0, l1, l2, l3] = self.to_array();
        l0.max(l1).max(l2.max(l3))
    }

    /// Horizontal max by one vector max against the half-swapped copy, then
    /// one scalar comparison of the two surviving lanes
    #[inline(always)]
    pub fn reduce_max_tree(self) -> f32 {
        let folded = self.max(self.swap_halves());
        let [l0, l1, _, _] = folded.to_array();
        l0.max(l1)
    }
}

impl std::fmt::Debug for F32x4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("F32x4").field(&self.to_array()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splat_and_load() {
        assert_eq!(F32x4::splat(1.5).to_array(), [1.5; 4]);

        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(F32x4::from_slice(&data).to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(F32x4::from_slice(&data[1..]).to_array(), [2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    #[should_panic]
    fn test_load_short_slice_panics() {
        let _ = F32x4::from_slice(&[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_lanewise_max() {
        let a = F32x4::from_slice(&[1.0, -5.0, 3.0, 0.0]);
        let b = F32x4::from_slice(&[0.5, -2.0, 7.0, -1.0]);
        assert_eq!(a.max(b).to_array(), [1.0, -2.0, 7.0, 0.0]);
    }

    #[test]
    fn test_swap_halves() {
        let v = F32x4::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.swap_halves().to_array(), [3.0, 4.0, 1.0, 2.0]);
    }

    #[test]
    fn test_horizontal_reductions_agree() {
        // Put the maximum in every lane position in turn
        for pos in 0..LANES {
            let mut lanes = [-4.0f32, -3.0, -2.0, -1.0];
            lanes[pos] = 9.0;
            let v = F32x4::from_slice(&lanes);
            assert_eq!(v.reduce_max_linear(), 9.0);
            assert_eq!(v.reduce_max_tree(), 9.0);
        }

        let v = F32x4::from_slice(&[-8.0, -3.0, -6.0, -7.0]);
        assert_eq!(v.reduce_max_linear(), -3.0);
        assert_eq!(v.reduce_max_tree(), -3.0);
    }
}
