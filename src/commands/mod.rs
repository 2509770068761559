//! Application command handlers for wavescope.
//!
//! # Commands
//! - `view`: Full-screen waveform and ruler viewer (default)
//! - `info`: Print format and duration of a wave file
//! - `peaks`: Print the decimated samples for a given width
//! - `ruler`: Print the ruler scale and ticks for a given width
//! - `config`: Open configuration file in user's preferred editor
//! - `logs`: Display recent log entries

pub mod config;
pub mod info;
pub mod logs;
pub mod peaks;
pub mod ruler;
pub mod view;

pub use config::handle_config;
pub use info::handle_info;
pub use logs::handle_logs;
pub use peaks::{handle_peaks, PolicyArg};
pub use ruler::handle_ruler;
pub use view::handle_view;

use crate::config::WavescopeConfig;
use crate::ruler::ScaleSetting;
use crate::scope::Oscilloscope;
use anyhow::Context;
use std::path::Path;

/// Settings shared by every command that loads a file, after CLI overrides.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub max_length: usize,
    pub scale: ScaleSetting,
}

impl LoadOptions {
    pub fn from_config(
        config: &WavescopeConfig,
        max_length: Option<usize>,
        scale: Option<ScaleSetting>,
    ) -> Self {
        Self {
            max_length: max_length.unwrap_or(config.display.max_length),
            scale: scale.unwrap_or(config.ruler.scale),
        }
    }
}

/// Loads `file` into a fresh oscilloscope.
///
/// # Errors
/// - If the file cannot be decoded
fn open_scope(file: &Path, options: &LoadOptions) -> anyhow::Result<Oscilloscope> {
    let mut scope = Oscilloscope::new(options.scale);
    scope
        .load_audio(file, options.max_length)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    Ok(scope)
}
