//! Error types for the waveform pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while decoding, reducing or scaling a waveform.
#[derive(Error, Debug)]
pub enum WaveformError {
    #[error("Audio file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported channel layout: {0} channels (expected 1 or 2)")]
    UnsupportedChannelLayout(u16),

    #[error("Unsupported sample width: {0} bytes (expected 1 or 2)")]
    UnsupportedSampleWidth(u16),

    #[error("Corrupt audio data: {0}")]
    CorruptFormat(String),

    #[error("Cannot build a ruler for a zero-length recording")]
    ZeroDuration,

    #[error("No audio loaded")]
    NotLoaded,
}

pub type Result<T> = std::result::Result<T, WaveformError>;
