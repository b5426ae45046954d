//! Sample I/O
//!
//! Loading raw little-endian `f32` sample dumps for the benchmark harness.

pub mod raw;
