//! Cached waveform with on-demand views.
//!
//! A file is decoded once per load, reduced to mono, capped to the load-time
//! maximum length with the dual-extremum decimator and normalized. Every
//! later view is derived from that cached buffer, never from the file.

use super::channels::reduce_to_mono;
use super::decimate::{decimate, DecimationPolicy};
use super::decoder::{decode_file, decode_reader, AudioFormat, DecodedAudio};
use super::error::{Result, WaveformError};
use super::normalize::normalize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone)]
struct LoadedWaveform {
    format: AudioFormat,
    /// Normalized mono samples, at most `max_length` long
    samples: Vec<f32>,
}

/// Holds the max-resolution normalized buffer of the loaded recording.
#[derive(Debug, Default)]
pub struct WaveformBuffer {
    loaded: Option<LoadedWaveform>,
}

impl WaveformBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the wave file at `path`, caching at most `max_length` samples.
    ///
    /// On failure the previously loaded recording, if any, stays in place.
    ///
    /// # Errors
    /// - `FileNotFound`, `UnsupportedFormat`, `CorruptFormat` from decoding
    /// - `UnsupportedChannelLayout` for anything but mono or stereo
    pub fn load(&mut self, path: &Path, max_length: usize) -> Result<AudioFormat> {
        let decoded = decode_file(path)?;
        let format = self.install(decoded, max_length)?;
        tracing::info!("Loaded {} ({})", path.display(), format);
        Ok(format)
    }

    /// Same as [`load`](Self::load) but reads the container from `source`.
    pub fn load_reader<R: Read>(&mut self, source: R, max_length: usize) -> Result<AudioFormat> {
        let decoded = decode_reader(source)?;
        self.install(decoded, max_length)
    }

    fn install(&mut self, decoded: DecodedAudio, max_length: usize) -> Result<AudioFormat> {
        let DecodedAudio { format, samples } = decoded;

        let mono = reduce_to_mono(&samples, format.channel_count)?;
        let capped = decimate(&mono, max_length, DecimationPolicy::DualExtremum);
        let normalized = normalize(&capped, format.sample_width)?;

        tracing::debug!(
            "Cached {} of {} frames (cap {})",
            normalized.len(),
            mono.len(),
            max_length
        );

        self.loaded = Some(LoadedWaveform {
            format,
            samples: normalized,
        });
        Ok(format)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Format of the loaded recording.
    pub fn format(&self) -> Option<AudioFormat> {
        self.loaded.as_ref().map(|l| l.format)
    }

    /// Duration of the loaded recording in seconds.
    pub fn duration(&self) -> Option<f64> {
        self.loaded.as_ref().map(|l| l.format.duration_secs())
    }

    /// The cached max-resolution buffer; empty when nothing is loaded.
    pub fn samples(&self) -> &[f32] {
        self.loaded.as_ref().map_or(&[], |l| l.samples.as_slice())
    }

    /// Derives a view of `target` samples from the cached buffer.
    ///
    /// Shorter targets are reduced with the peak-magnitude policy. Targets at
    /// or above the cached length get the cached buffer as is, which is
    /// shorter than requested when the target exceeds it.
    ///
    /// # Errors
    /// - `NotLoaded` if no recording has been loaded
    pub fn view(&self, target: usize) -> Result<Vec<f32>> {
        let loaded = self.loaded.as_ref().ok_or(WaveformError::NotLoaded)?;
        let cached = &loaded.samples;

        if target < cached.len() {
            Ok(decimate(cached, target, DecimationPolicy::PeakMagnitude))
        } else {
            if target > cached.len() {
                tracing::warn!(
                    "Requested {} samples but only {} are cached; returning cached buffer",
                    target,
                    cached.len()
                );
            }
            Ok(cached.clone())
        }
    }
}
