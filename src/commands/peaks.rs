//! Print decimated samples for a display width.

use super::{open_scope, LoadOptions};
use crate::audio::{decimate, DecimationPolicy};
use clap::ValueEnum;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Decimation policy selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Largest-magnitude sample per column
    Magnitude,
    /// Maximum then minimum per pair of columns
    Extremum,
}

impl From<PolicyArg> for DecimationPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Magnitude => DecimationPolicy::PeakMagnitude,
            PolicyArg::Extremum => DecimationPolicy::DualExtremum,
        }
    }
}

/// Loads `file` and prints `width` derived samples, one per line.
///
/// # Errors
/// - If the file cannot be decoded
/// - If stdout cannot be written
pub fn handle_peaks(
    file: &Path,
    width: usize,
    policy: PolicyArg,
    options: &LoadOptions,
) -> anyhow::Result<()> {
    let scope = open_scope(file, options)?;

    let samples = match DecimationPolicy::from(policy) {
        DecimationPolicy::PeakMagnitude => scope.view_samples(width)?,
        DecimationPolicy::DualExtremum => decimate(
            scope.waveform().samples(),
            width,
            DecimationPolicy::DualExtremum,
        ),
    };

    if samples.len() < width {
        tracing::info!(
            "Only {} samples available for width {}",
            samples.len(),
            width
        );
    }

    let mut out = BufWriter::new(io::stdout().lock());
    for sample in &samples {
        writeln!(out, "{sample:.6}")?;
    }
    out.flush()?;
    Ok(())
}
