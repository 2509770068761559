//! Ruler scale table and density-based scale selection.

use crate::audio::{Result, WaveformError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ruler granularity, from finest (`XS`) to coarsest (`XXL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScaleFactor {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
}

impl ScaleFactor {
    /// All factors, finest first. Selection walks this order.
    pub const ALL: [ScaleFactor; 6] = [
        ScaleFactor::XS,
        ScaleFactor::S,
        ScaleFactor::M,
        ScaleFactor::L,
        ScaleFactor::XL,
        ScaleFactor::XXL,
    ];

    /// Minimum pixels per second for this factor to be chosen.
    pub fn min_density(self) -> f64 {
        match self {
            Self::XS => 10_000.0,
            Self::S => 1_000.0,
            Self::M => 100.0,
            Self::L => 10.0,
            Self::XL => 1.0,
            Self::XXL => 0.0,
        }
    }

    /// Spacing of labelled ticks, in milliseconds.
    pub fn major_interval_ms(self) -> u64 {
        match self {
            Self::XS => 10,
            Self::S => 100,
            Self::M => 1_000,
            Self::L => 10_000,
            Self::XL => 30_000,
            Self::XXL => 60_000,
        }
    }

    /// Spacing of unlabelled ticks, in milliseconds.
    pub fn minor_interval_ms(self) -> u64 {
        match self {
            Self::XS => 1,
            Self::S => 10,
            Self::M => 100,
            Self::L => 1_000,
            Self::XL => 10_000,
            Self::XXL => 30_000,
        }
    }

    pub fn major_interval(self) -> f64 {
        self.major_interval_ms() as f64 / 1000.0
    }

    pub fn minor_interval(self) -> f64 {
        self.minor_interval_ms() as f64 / 1000.0
    }

    /// Decimal places implied by the major interval (0.01s -> 2, 1s -> 0).
    pub fn label_precision(self) -> usize {
        let mut ms = self.major_interval_ms();
        let mut places = 0;
        while ms < 1000 {
            ms *= 10;
            places += 1;
        }
        places
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::XS => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::XL => "XL",
            Self::XXL => "XXL",
        }
    }

    /// Picks the factor for a given pixel density.
    pub fn for_density(pixels_per_second: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| pixels_per_second >= f.min_density())
            .unwrap_or(Self::XXL)
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid scale '{0}': expected auto, XS, S, M, L, XL or XXL")]
pub struct ParseScaleError(pub String);

impl FromStr for ScaleFactor {
    type Err = ParseScaleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseScaleError(s.to_string()))
    }
}

/// Either pick the scale from pixel density or pin it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScaleSetting {
    #[default]
    Auto,
    Fixed(ScaleFactor),
}

impl ScaleSetting {
    /// Resolves the setting to a concrete factor for the given density.
    pub fn resolve(self, pixels_per_second: f64) -> ScaleFactor {
        match self {
            Self::Auto => ScaleFactor::for_density(pixels_per_second),
            Self::Fixed(factor) => factor,
        }
    }
}

impl fmt::Display for ScaleSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Fixed(factor) => factor.fmt(f),
        }
    }
}

impl FromStr for ScaleSetting {
    type Err = ParseScaleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else {
            s.parse().map(Self::Fixed)
        }
    }
}

impl TryFrom<String> for ScaleSetting {
    type Error = ParseScaleError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScaleSetting> for String {
    fn from(value: ScaleSetting) -> Self {
        value.to_string()
    }
}

/// Horizontal pixels available per second of audio.
///
/// # Errors
/// - `ZeroDuration` if `duration_secs` is zero, negative or not a number
pub fn pixels_per_second(duration_secs: f64, pixel_width: u32) -> Result<f64> {
    if duration_secs.is_nan() || duration_secs <= 0.0 {
        return Err(WaveformError::ZeroDuration);
    }
    Ok(pixel_width as f64 / duration_secs)
}

/// Selects the ruler scale for a recording of `duration_secs` shown across
/// `pixel_width` pixels.
///
/// # Errors
/// - `ZeroDuration` if `duration_secs` is zero or negative
pub fn select_scale(duration_secs: f64, pixel_width: u32) -> Result<ScaleFactor> {
    let density = pixels_per_second(duration_secs, pixel_width)?;
    let scale = ScaleFactor::for_density(density);
    tracing::debug!("Ruler density {:.3} px/s -> scale {}", density, scale);
    Ok(scale)
}
