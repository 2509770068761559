//! Configuration file editor command.
//!
//! Writes the default wavescope configuration if none exists yet, then opens
//! it in the user's preferred editor.

use crate::config::{get_config_path, WavescopeConfig};
use std::process::Command;

/// Opens the wavescope configuration file in the user's preferred editor.
///
/// Editor lookup order is `$VISUAL`, `$EDITOR`, then nano and vi from PATH.
///
/// # Errors
/// - If the default configuration cannot be written
/// - If no editor can be found or executed
pub fn handle_config() -> anyhow::Result<()> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        tracing::info!("Writing default config to {}", config_path.display());
        WavescopeConfig::default().save()?;
    }

    let editor = find_editor(|name| std::env::var(name).ok(), is_editor_available)?;
    tracing::debug!("Using editor {} for {}", editor, config_path.display());

    let status = Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor '{editor}': {e}"))?;

    if !status.success() {
        anyhow::bail!(
            "Editor exited with error code: {}",
            status.code().unwrap_or(-1)
        );
    }

    // Surface syntax errors now rather than on the next launch.
    if let Err(e) = WavescopeConfig::load() {
        println!("Warning: {e:#}");
    }

    Ok(())
}

fn find_editor(
    env: impl Fn(&str) -> Option<String>,
    available: impl Fn(&str) -> bool,
) -> anyhow::Result<String> {
    for var in ["VISUAL", "EDITOR"] {
        if let Some(editor) = env(var).filter(|e| !e.trim().is_empty()) {
            return Ok(editor);
        }
    }

    ["nano", "vi"]
        .into_iter()
        .find(|e| available(e))
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("No editor found. Set $EDITOR to edit the config."))
}

fn is_editor_available(editor: &str) -> bool {
    Command::new("which")
        .arg(editor)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_wins_over_editor() {
        let editor = find_editor(
            |name| match name {
                "VISUAL" => Some("code -w".to_string()),
                "EDITOR" => Some("vim".to_string()),
                _ => None,
            },
            |_| true,
        )
        .unwrap();
        assert_eq!(editor, "code -w");
    }

    #[test]
    fn test_blank_env_falls_through_to_path() {
        let editor = find_editor(
            |name| (name == "EDITOR").then(|| "  ".to_string()),
            |e| e == "vi",
        )
        .unwrap();
        assert_eq!(editor, "vi");
    }

    #[test]
    fn test_no_editor_is_an_error() {
        assert!(find_editor(|_| None, |_| false).is_err());
    }
}
