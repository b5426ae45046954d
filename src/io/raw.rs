//! Raw little-endian `f32` sample files
//!
//! The format is a headerless array of IEEE-754 single-precision samples in
//! little-endian byte order. Trailing bytes that do not form a whole sample
//! are ignored.
//!
//! # Example
//!
//! ```
//! use stratum_overview::io::raw::decode_raw_f32;
//!
//! let bytes = [0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x00, 0xc0];
//! assert_eq!(decode_raw_f32(&bytes), vec![1.0, -2.0]);
//! ```

use std::path::Path;

use crate::error::DownscaleError;

const SAMPLE_BYTES: usize = std::mem::size_of::<f32>();

/// Decode a raw little-endian `f32` byte buffer
pub fn decode_raw_f32(bytes: &[u8]) -> Vec<f32> {
    let chunks = bytes.chunks_exact(SAMPLE_BYTES);
    let trailing = chunks.remainder().len();
    if trailing != 0 {
        log::warn!(
            "Ignoring {} trailing byte(s) after {} whole samples",
            trailing,
            bytes.len() / SAMPLE_BYTES
        );
    }

    chunks
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect()
}

/// Read and decode a raw little-endian `f32` file
///
/// # Errors
///
/// Returns `DownscaleError::DecodingError` if the file cannot be read.
pub fn read_raw_f32<P: AsRef<Path>>(path: P) -> Result<Vec<f32>, DownscaleError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        DownscaleError::DecodingError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let samples = decode_raw_f32(&bytes);
    log::debug!("Read {} samples from {}", samples.len(), path.display());

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(samples: &[f32]) -> Vec<u8> {
        samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }

    #[test]
    fn test_decode_known_values() {
        let samples = [0.0f32, 1.0, -1.5, f32::MAX, f32::MIN_POSITIVE];
        assert_eq!(decode_raw_f32(&encode(&samples)), samples.to_vec());
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let mut bytes = encode(&[0.25, 0.5]);
        bytes.extend_from_slice(&[0xff, 0xff]);
        assert_eq!(decode_raw_f32(&bytes), vec![0.25, 0.5]);
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_raw_f32(&[]).is_empty());
    }

    #[test]
    fn test_read_file() {
        let path = std::env::temp_dir().join(format!(
            "stratum_overview_raw_{}.dat",
            std::process::id()
        ));
        std::fs::write(&path, encode(&[3.0, -4.0, 5.5])).unwrap();

        let samples = read_raw_f32(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(samples, vec![3.0, -4.0, 5.5]);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_raw_f32("/nonexistent/stratum_overview/missing.dat").unwrap_err();
        assert!(matches!(err, DownscaleError::DecodingError(_)));
    }
}
