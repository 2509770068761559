//! Waveform data pipeline.
//!
//! Decodes PCM wave files, reduces them to mono, caps and normalizes the
//! result and derives display-sized views with a peak-preserving decimator.

pub mod buffer;
pub mod channels;
pub mod decimate;
pub mod decoder;
pub mod error;
pub mod normalize;

pub use buffer::WaveformBuffer;
pub use channels::reduce_to_mono;
pub use decimate::{decimate, window_bounds, DecimationPolicy};
pub use decoder::{decode_file, decode_reader, AudioFormat, DecodedAudio};
pub use error::{Result, WaveformError};
pub use normalize::{normalize, normalize_sample};
