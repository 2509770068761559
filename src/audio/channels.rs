//! Stereo to mono reduction.

use super::error::{Result, WaveformError};

/// Collapses interleaved samples to a single channel.
///
/// Mono input is passed through; stereo frames are averaged as
/// `(left + right) / 2` in floating point, so the result can fall halfway
/// between two integer amplitudes.
///
/// # Errors
/// - `UnsupportedChannelLayout` for any channel count other than 1 or 2
pub fn reduce_to_mono(samples: &[i32], channels: u16) -> Result<Vec<f32>> {
    match channels {
        1 => Ok(samples.iter().map(|&s| s as f32).collect()),
        2 => Ok(samples
            .chunks_exact(2)
            .map(|frame| (frame[0] as f32 + frame[1] as f32) / 2.0)
            .collect()),
        other => Err(WaveformError::UnsupportedChannelLayout(other)),
    }
}
