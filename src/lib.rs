//! wavescope: decode PCM wave files into display-ready waveforms with a
//! time ruler that adapts to the available width.

pub mod app;
pub mod audio;
pub mod commands;
pub mod config;
pub mod logging;
pub mod ruler;
pub mod scope;
pub mod view;

pub use audio::{AudioFormat, WaveformBuffer, WaveformError};
pub use ruler::{ScaleFactor, ScaleSetting, TickScaleSelector, TickSet};
pub use scope::Oscilloscope;
