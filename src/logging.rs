//! Structured logging for wavescope using the tracing crate.
//!
//! Log records go to a daily-rotated file under the XDG state directory and
//! never to the terminal, which belongs to the viewer. Only the newest
//! week of log files is kept.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::SystemTime;
use tracing_appender::rolling;
use tracing_subscriber::prelude::*;

/// Base name of the daily log files.
pub const LOG_FILE_PREFIX: &str = "wavescope.log";

const MAX_LOG_FILES: usize = 7;

/// Keeps the non-blocking writer alive for the program lifetime.
static APPENDER_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initializes the logging system with file-based output.
///
/// Log level is controlled by the RUST_LOG environment variable (defaults to "info").
///
/// # Errors
/// - If the log directory cannot be determined or created
/// - If logging was already initialized
pub fn init_logging() -> Result<(), anyhow::Error> {
    let log_dir = resolve_log_dir()?;
    fs::create_dir_all(&log_dir)?;

    if let Err(e) = cleanup_old_logs(&log_dir) {
        eprintln!("Warning: Failed to cleanup old logs: {}", e);
    }

    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(&log_dir, LOG_FILE_PREFIX));
    APPENDER_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Logging already initialized"))?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_level(true)
                .with_ansi(false),
        )
        .init();

    tracing::debug!("Logging initialized. Log dir: {}", log_dir.display());
    Ok(())
}

/// Resolves the log directory without creating it.
///
/// # Errors
/// - If neither XDG_STATE_HOME nor the home directory is available
pub fn resolve_log_dir() -> Result<PathBuf, anyhow::Error> {
    log_dir_from(std::env::var("XDG_STATE_HOME").ok(), dirs::home_dir())
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
}

fn log_dir_from(xdg_state: Option<String>, home: Option<PathBuf>) -> Option<PathBuf> {
    match xdg_state.filter(|s| !s.is_empty()) {
        Some(state) => Some(PathBuf::from(state).join("wavescope")),
        None => home.map(|h| h.join(".local").join("state").join("wavescope")),
    }
}

/// Whether `file_name` is a rotated log file (`wavescope.log.YYYY-MM-DD`).
pub fn is_rotated_log(file_name: &str) -> bool {
    file_name
        .strip_prefix(LOG_FILE_PREFIX)
        .and_then(|rest| rest.strip_prefix('.'))
        .is_some_and(|date| date.matches('-').count() == 2)
}

/// Rotated log files in `log_dir`, newest first.
pub fn rotated_logs(log_dir: &Path) -> Result<Vec<(PathBuf, SystemTime)>, anyhow::Error> {
    let mut logs: Vec<_> = fs::read_dir(log_dir)?
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            let name = path.file_name()?.to_str()?;
            if !is_rotated_log(name) {
                return None;
            }
            let modified = fs::metadata(&path).ok()?.modified().ok()?;
            Some((path, modified))
        })
        .collect();

    logs.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(logs)
}

/// Removes all but the newest `MAX_LOG_FILES` rotated logs.
fn cleanup_old_logs(log_dir: &Path) -> Result<(), anyhow::Error> {
    for (path, _) in rotated_logs(log_dir)?.iter().skip(MAX_LOG_FILES) {
        if let Err(e) = fs::remove_file(path) {
            tracing::warn!("Failed to delete old log file {}: {}", path.display(), e);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_prefers_xdg_state() {
        assert_eq!(
            log_dir_from(Some("/tmp/state".into()), Some(PathBuf::from("/home/u"))),
            Some(PathBuf::from("/tmp/state/wavescope"))
        );
        assert_eq!(
            log_dir_from(Some(String::new()), Some(PathBuf::from("/home/u"))),
            Some(PathBuf::from("/home/u/.local/state/wavescope"))
        );
        assert_eq!(log_dir_from(None, None), None);
    }

    #[test]
    fn test_rotated_log_names() {
        assert!(is_rotated_log("wavescope.log.2026-10-19"));
        assert!(!is_rotated_log("wavescope.log"));
        assert!(!is_rotated_log("other.log.2026-10-19"));
        assert!(!is_rotated_log("wavescope.log.backup"));
    }

    #[test]
    fn test_cleanup_keeps_newest() {
        let dir = std::env::temp_dir().join(format!("wavescope_logs_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        for day in 1..=9 {
            fs::write(dir.join(format!("wavescope.log.2026-10-{day:02}")), "x").unwrap();
        }
        fs::write(dir.join("notes.txt"), "keep").unwrap();

        cleanup_old_logs(&dir).unwrap();

        assert_eq!(rotated_logs(&dir).unwrap().len(), MAX_LOG_FILES);
        assert!(dir.join("notes.txt").exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
