//! PCM wave decoding.
//!
//! Reads a whole wave container into memory and returns its format together
//! with the interleaved integer samples. Only integer PCM with 8-bit unsigned
//! or 16-bit signed samples is accepted.

use super::error::{Result, WaveformError};
use hound::{SampleFormat, WavReader, WavSpec};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Format metadata of a decoded wave container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    /// Number of interleaved channels
    pub channel_count: u16,
    /// Bytes per sample (1 or 2)
    pub sample_width: u16,
    /// Frames per second
    pub frame_rate: u32,
    /// Total number of frames
    pub frame_count: u32,
}

impl AudioFormat {
    /// Validates a hound spec and turns it into an `AudioFormat`.
    ///
    /// # Errors
    /// - `UnsupportedFormat` for floating-point PCM or widths other than 8/16 bits
    /// - `CorruptFormat` when the frame rate is zero
    pub fn from_spec(spec: &WavSpec, frame_count: u32) -> Result<Self> {
        if spec.sample_format != SampleFormat::Int {
            return Err(WaveformError::UnsupportedFormat(
                "floating-point PCM".to_string(),
            ));
        }

        let sample_width = match spec.bits_per_sample {
            8 => 1,
            16 => 2,
            bits => {
                return Err(WaveformError::UnsupportedFormat(format!(
                    "{bits}-bit samples"
                )))
            }
        };

        if spec.sample_rate == 0 {
            return Err(WaveformError::CorruptFormat(
                "frame rate is zero".to_string(),
            ));
        }

        Ok(Self {
            channel_count: spec.channels,
            sample_width,
            frame_rate: spec.sample_rate,
            frame_count,
        })
    }

    /// Length of the recording in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frame_count as f64 / self.frame_rate as f64
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ch, {}-bit, {} Hz, {} frames",
            self.channel_count,
            self.sample_width * 8,
            self.frame_rate,
            self.frame_count
        )
    }
}

/// Format and raw interleaved samples of a fully read container.
///
/// 8-bit samples are kept in their unsigned `0..=255` domain, 16-bit samples
/// in their signed domain.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    pub format: AudioFormat,
    pub samples: Vec<i32>,
}

/// Decodes the wave file at `path`.
///
/// # Errors
/// - `FileNotFound` if nothing exists at `path`
/// - any error returned by [`decode_reader`]
pub fn decode_file(path: &Path) -> Result<DecodedAudio> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => WaveformError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => WaveformError::CorruptFormat(format!("{}: {e}", path.display())),
    })?;

    tracing::debug!("Decoding {}", path.display());
    decode_reader(BufReader::new(file))
}

/// Decodes a wave container from any byte source.
///
/// # Errors
/// - `UnsupportedFormat` for non-PCM containers or unsupported sample widths
/// - `CorruptFormat` for a zero frame rate, a malformed header or truncated frame data
pub fn decode_reader<R: Read>(source: R) -> Result<DecodedAudio> {
    let mut reader = WavReader::new(source).map_err(map_header_error)?;
    let spec = reader.spec();
    let format = AudioFormat::from_spec(&spec, reader.duration())?;

    let offset = if format.sample_width == 1 { 128 } else { 0 };
    let samples = reader
        .samples::<i16>()
        .map(|s| {
            s.map(|v| v as i32 + offset)
                .map_err(|e| WaveformError::CorruptFormat(format!("truncated frame data: {e}")))
        })
        .collect::<Result<Vec<i32>>>()?;

    let expected = format.frame_count as usize * format.channel_count as usize;
    if samples.len() != expected {
        return Err(WaveformError::CorruptFormat(format!(
            "expected {expected} samples, read {}",
            samples.len()
        )));
    }

    Ok(DecodedAudio { format, samples })
}

fn map_header_error(err: hound::Error) -> WaveformError {
    match err {
        hound::Error::Unsupported => {
            WaveformError::UnsupportedFormat("not an integer PCM wave".to_string())
        }
        hound::Error::FormatError(msg) => WaveformError::CorruptFormat(msg.to_string()),
        hound::Error::IoError(e) => WaveformError::CorruptFormat(e.to_string()),
        other => WaveformError::UnsupportedFormat(other.to_string()),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use hound::{SampleFormat, WavSpec, WavWriter};
    use std::io::Cursor;

    pub fn wav_i16(channels: u16, sample_rate: u32, samples: &[i16]) -> Vec<u8> {
        let spec = WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut bytes = Vec::new();
        {
            let mut writer = WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
            for &s in samples {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }
        bytes
    }

    /// Writes 8-bit samples given in their unsigned domain.
    pub fn wav_u8(channels: u16, sample_rate: u32, samples: &[u8]) -> Vec<u8> {
        let spec = WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 8,
            sample_format: SampleFormat::Int,
        };
        let mut bytes = Vec::new();
        {
            let mut writer = WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
            for &s in samples {
                writer.write_sample((s as i16 - 128) as i8).unwrap();
            }
            writer.finalize().unwrap();
        }
        bytes
    }
}
