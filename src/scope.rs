//! Oscilloscope model consumed by renderers.
//!
//! Bundles the cached waveform and the ruler scale selector behind the
//! operations a display needs: load a file once, then ask for samples and
//! ticks for whatever width the display currently has.

use crate::audio::{AudioFormat, Result, WaveformBuffer};
use crate::ruler::{ScaleSetting, TickScaleSelector, TickSet};
use std::path::Path;

#[derive(Debug, Default)]
pub struct Oscilloscope {
    waveform: WaveformBuffer,
    ruler: TickScaleSelector,
}

impl Oscilloscope {
    pub fn new(scale: ScaleSetting) -> Self {
        Self {
            waveform: WaveformBuffer::new(),
            ruler: TickScaleSelector::new(scale),
        }
    }

    /// Loads a wave file, caching at most `max_length` normalized samples.
    ///
    /// A failed load leaves the previously loaded recording in place.
    pub fn load_audio(&mut self, path: &Path, max_length: usize) -> Result<AudioFormat> {
        self.waveform.load(path, max_length)
    }

    /// Duration of the loaded recording in seconds, 0.0 when nothing is loaded.
    pub fn duration(&self) -> f64 {
        self.waveform.duration().unwrap_or(0.0)
    }

    pub fn format(&self) -> Option<AudioFormat> {
        self.waveform.format()
    }

    pub fn waveform(&self) -> &WaveformBuffer {
        &self.waveform
    }

    /// Samples for a display `width` columns wide.
    ///
    /// The result is `width` long unless the cached buffer itself is shorter.
    pub fn view_samples(&self, width: usize) -> Result<Vec<f32>> {
        self.waveform.view(width)
    }

    /// Ruler ticks for a display `pixel_width` columns wide.
    ///
    /// # Errors
    /// - `ZeroDuration` when nothing is loaded or the recording is empty
    pub fn tick_set(&self, pixel_width: u32) -> Result<TickSet> {
        self.ruler.tick_set(self.duration(), pixel_width)
    }

    pub fn set_scale(&mut self, scale: ScaleSetting) {
        self.ruler = TickScaleSelector::new(scale);
    }
}
