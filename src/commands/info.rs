//! Print format details of a wave file.

use super::{open_scope, LoadOptions};
use std::path::Path;

/// Loads `file` and prints its format, duration and cached length.
///
/// # Errors
/// - If the file cannot be decoded
pub fn handle_info(file: &Path, options: &LoadOptions) -> anyhow::Result<()> {
    let scope = open_scope(file, options)?;

    if let Some(format) = scope.format() {
        println!("File:        {}", file.display());
        println!("Channels:    {}", format.channel_count);
        println!("Sample size: {} bits", format.sample_width * 8);
        println!("Frame rate:  {} Hz", format.frame_rate);
        println!("Frames:      {}", format.frame_count);
        println!("Duration:    {:.3}s", scope.duration());
        println!(
            "Cached:      {} samples (cap {})",
            scope.waveform().samples().len(),
            options.max_length
        );
    }

    Ok(())
}
