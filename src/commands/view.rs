//! Full-screen waveform viewer command.

use super::{open_scope, LoadOptions};
use crate::config::WavescopeConfig;
use crate::view::{ScopeTui, Theme, ViewOptions};
use std::path::Path;
use std::time::Duration;

/// Loads `file` and shows it until the user quits.
///
/// The file is decoded before the terminal switches to the alternate screen,
/// so load errors are printed normally.
///
/// # Errors
/// - If the file cannot be decoded
/// - If the terminal cannot be initialized or drawn
pub fn handle_view(
    file: &Path,
    options: &LoadOptions,
    config: &WavescopeConfig,
) -> anyhow::Result<()> {
    tracing::info!("=== wavescope view: {} ===", file.display());
    let scope = open_scope(file, options)?;

    let title = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    let view_options = ViewOptions {
        settle: Duration::from_millis(config.display.settle_ms),
        theme: Theme::from_config(&config.theme),
        dense_labels: config.ruler.dense_labels,
        title,
    };

    let mut tui = ScopeTui::new(view_options)?;
    let result = tui.run(&scope);
    tui.cleanup()?;
    result
}
