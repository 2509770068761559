//! Tick placement for the time ruler.

use super::scale::{pixels_per_second, ScaleFactor, ScaleSetting};
use crate::audio::Result;

/// A labelled ruler tick.
#[derive(Debug, Clone, PartialEq)]
pub struct MajorTick {
    pub offset_secs: f64,
    pub x: f64,
    pub label: String,
}

/// Tick positions for one duration and pixel width.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSet {
    pub scale: ScaleFactor,
    pub pixels_per_second: f64,
    pub major: Vec<MajorTick>,
    /// Pixel positions of unlabelled ticks
    pub minor: Vec<f64>,
}

/// Number of ticks spaced `interval_ms` apart in `[0, duration_secs]`.
///
/// The duration is snapped to a millionth of a millisecond first so that
/// `201.0 / 200.0` seconds still counts its end tick.
fn tick_count(duration_secs: f64, interval_ms: u64) -> u64 {
    let duration_ms = (duration_secs * 1000.0 * 1e6).round() / 1e6;
    (duration_ms / interval_ms as f64).floor() as u64 + 1
}

/// Lays out major and minor ticks from 0 up to and including `duration_secs`.
pub fn emit_ticks(scale: ScaleFactor, duration_secs: f64, pixels_per_second: f64) -> TickSet {
    let precision = scale.label_precision();

    let major_ms = scale.major_interval_ms();
    let major = (0..tick_count(duration_secs, major_ms))
        .map(|i| {
            let offset_secs = (i * major_ms) as f64 / 1000.0;
            MajorTick {
                offset_secs,
                x: offset_secs * pixels_per_second,
                label: format!("{offset_secs:.precision$}s"),
            }
        })
        .collect();

    let minor_ms = scale.minor_interval_ms();
    let minor = (0..tick_count(duration_secs, minor_ms))
        .map(|i| (i * minor_ms) as f64 / 1000.0 * pixels_per_second)
        .collect();

    TickSet {
        scale,
        pixels_per_second,
        major,
        minor,
    }
}

/// Chooses a scale per the configured setting and emits ticks for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickScaleSelector {
    setting: ScaleSetting,
}

impl TickScaleSelector {
    pub fn new(setting: ScaleSetting) -> Self {
        Self { setting }
    }

    pub fn setting(&self) -> ScaleSetting {
        self.setting
    }

    /// Builds the tick set for `duration_secs` spread over `pixel_width` pixels.
    ///
    /// # Errors
    /// - `ZeroDuration` if `duration_secs` is zero or negative
    pub fn tick_set(&self, duration_secs: f64, pixel_width: u32) -> Result<TickSet> {
        let density = pixels_per_second(duration_secs, pixel_width)?;
        let mut scale = self.setting.resolve(density);

        // A pinned scale may be far finer than the width can show; step it
        // up until minor ticks are at least a pixel apart.
        while tick_count(duration_secs, scale.minor_interval_ms()) > u64::from(pixel_width) + 1 {
            let Some(&coarser) = ScaleFactor::ALL.iter().find(|f| **f > scale) else {
                break;
            };
            tracing::warn!(
                "Scale {} too fine for {}px over {:.3}s, using {}",
                scale,
                pixel_width,
                duration_secs,
                coarser
            );
            scale = coarser;
        }

        tracing::debug!(
            "Ruler {}px over {:.3}s: {:.3} px/s, scale {} ({})",
            pixel_width,
            duration_secs,
            density,
            scale,
            self.setting
        );
        Ok(emit_ticks(scale, duration_secs, density))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::WaveformError;

    #[test]
    fn test_medium_scale_scenario() {
        let ticks = TickScaleSelector::default().tick_set(12.5, 1250).unwrap();

        assert_eq!(ticks.scale, ScaleFactor::M);
        assert_eq!(ticks.pixels_per_second, 100.0);
        assert_eq!(ticks.major.len(), 13);
        for (i, tick) in ticks.major.iter().enumerate() {
            assert_eq!(tick.offset_secs, i as f64);
            assert_eq!(tick.x, i as f64 * 100.0);
            assert_eq!(tick.label, format!("{i}s"));
        }

        // 0.0s through 12.5s inclusive at 0.1s spacing.
        assert_eq!(ticks.minor.len(), 126);
        assert_eq!(ticks.minor.first(), Some(&0.0));
        assert_eq!(ticks.minor.last(), Some(&1250.0));
    }

    #[test]
    fn test_label_precision_follows_interval() {
        let fine = emit_ticks(ScaleFactor::XS, 0.05, 20_000.0);
        let labels: Vec<_> = fine.major.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0.00s", "0.01s", "0.02s", "0.03s", "0.04s", "0.05s"]);
        assert_eq!(fine.minor.len(), 51);

        let tenths = emit_ticks(ScaleFactor::S, 0.35, 2000.0);
        let labels: Vec<_> = tenths.major.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0.0s", "0.1s", "0.2s", "0.3s"]);
    }

    #[test]
    fn test_coarse_scale() {
        let ticks = emit_ticks(ScaleFactor::XXL, 150.0, 2.0);
        let offsets: Vec<_> = ticks.major.iter().map(|t| t.offset_secs).collect();
        assert_eq!(offsets, vec![0.0, 60.0, 120.0]);
        assert_eq!(ticks.minor, vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0]);
    }

    #[test]
    fn test_fixed_setting_overrides_density() {
        let selector = TickScaleSelector::new(ScaleSetting::Fixed(ScaleFactor::L));
        let ticks = selector.tick_set(12.5, 1250).unwrap();
        assert_eq!(ticks.scale, ScaleFactor::L);
        assert_eq!(ticks.major.len(), 2);
        assert_eq!(ticks.major[1].label, "10s");
    }

    #[test]
    fn test_end_tick_survives_float_error() {
        // 201 frames at 200 Hz
        let duration = 201.0 / 200.0;
        assert!(duration * 1000.0 < 1005.0);
        let ticks = emit_ticks(ScaleFactor::XS, duration, 1000.0);
        assert_eq!(ticks.minor.len(), 1006);
        assert_eq!(ticks.major.len(), 101);
    }

    #[test]
    fn test_pinned_scale_coarsened_to_width() {
        let selector = TickScaleSelector::new(ScaleSetting::Fixed(ScaleFactor::XS));
        let ticks = selector.tick_set(3600.0, 1000).unwrap();
        assert_eq!(ticks.scale, ScaleFactor::XL);
        assert_eq!(ticks.minor.len(), 361);
        assert!(ticks.minor.windows(2).all(|w| w[1] - w[0] >= 1.0));

        // Pins that fit are left alone.
        let ticks = selector.tick_set(0.05, 1000).unwrap();
        assert_eq!(ticks.scale, ScaleFactor::XS);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = TickScaleSelector::default().tick_set(0.0, 800).unwrap_err();
        assert!(matches!(err, WaveformError::ZeroDuration));
    }

    #[test]
    fn test_positions_sorted() {
        let ticks = TickScaleSelector::default().tick_set(3.7, 913).unwrap();
        assert!(ticks.major.windows(2).all(|w| w[0].x < w[1].x));
        assert!(ticks.minor.windows(2).all(|w| w[0] < w[1]));
        assert!(ticks.major.last().unwrap().offset_secs <= 3.7);
    }
}
