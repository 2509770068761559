//! Integer amplitude to ratio mapping.
//!
//! 8-bit samples are unsigned and centered on 128; 16-bit samples are signed
//! and divided by 32767, so -32768 lands slightly below -1.0. The renderer is
//! responsible for clamping if it needs to.

use super::error::{Result, WaveformError};

/// Offset and divisor that map a sample width's integer domain to ratios.
fn domain(sample_width: u16) -> Result<(f32, f32)> {
    match sample_width {
        1 => Ok((128.0, 128.0)),
        2 => Ok((0.0, 32767.0)),
        other => Err(WaveformError::UnsupportedSampleWidth(other)),
    }
}

/// Maps one amplitude of the given sample width to a ratio.
///
/// # Errors
/// - `UnsupportedSampleWidth` for widths other than 1 or 2 bytes
pub fn normalize_sample(value: f32, sample_width: u16) -> Result<f32> {
    let (offset, divisor) = domain(sample_width)?;
    Ok((value - offset) / divisor)
}

/// Maps every amplitude in `samples` to a ratio.
///
/// # Errors
/// - `UnsupportedSampleWidth` for widths other than 1 or 2 bytes
pub fn normalize(samples: &[f32], sample_width: u16) -> Result<Vec<f32>> {
    let (offset, divisor) = domain(sample_width)?;
    Ok(samples.iter().map(|&v| (v - offset) / divisor).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_8bit_range() {
        let out = normalize(&[0.0, 128.0, 255.0], 1).unwrap();
        assert_eq!(out, vec![-1.0, 0.0, 127.0 / 128.0]);
        assert!(out.iter().all(|v| (-1.0..=1.0).contains(v)));
    }

    #[test]
    fn test_16bit_asymmetric_extreme() {
        let out = normalize(&[32767.0, 0.0, -32768.0], 2).unwrap();
        assert_eq!(out[0], 1.0);
        assert_eq!(out[1], 0.0);
        assert!(out[2] < -1.0);
        assert!(out[2] >= -1.00004);
    }

    #[test]
    fn test_matches_single_sample_mapping() {
        let input = [-1234.0, 17.5, 32000.0];
        let batch = normalize(&input, 2).unwrap();
        for (v, n) in input.iter().zip(batch) {
            assert_eq!(normalize_sample(*v, 2).unwrap(), n);
        }
    }

    #[test]
    fn test_unsupported_width() {
        assert!(matches!(
            normalize(&[1.0], 3),
            Err(WaveformError::UnsupportedSampleWidth(3))
        ));
        assert!(matches!(
            normalize_sample(1.0, 4),
            Err(WaveformError::UnsupportedSampleWidth(4))
        ));
    }
}
