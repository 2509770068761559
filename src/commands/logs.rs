//! Display recent log entries from the application.

use crate::logging::{resolve_log_dir, rotated_logs};
use anyhow::Context;
use std::fs;

const DEFAULT_LINES: usize = 50;

/// Prints the tail of the newest log file.
///
/// # Errors
/// - If the log directory cannot be determined
/// - If the log file cannot be read
pub fn handle_logs() -> anyhow::Result<()> {
    let log_dir = resolve_log_dir()?;

    if !log_dir.exists() {
        println!("Log directory does not exist yet: {}", log_dir.display());
        println!("Logs will be created when wavescope runs.");
        return Ok(());
    }

    let Some((log_file, _)) = rotated_logs(&log_dir)?.into_iter().next() else {
        println!("No log files found in: {}", log_dir.display());
        return Ok(());
    };

    let content = fs::read_to_string(&log_file)
        .with_context(|| format!("Failed to read log file {}", log_file.display()))?;

    if content.is_empty() {
        println!("Log file is empty: {}", log_file.display());
        return Ok(());
    }

    let lines: Vec<&str> = content.lines().collect();
    let tail = tail(&lines, DEFAULT_LINES);

    if tail.len() < lines.len() {
        println!("Showing last {} of {} lines:", tail.len(), lines.len());
    } else {
        println!("Showing all {} lines:", lines.len());
    }
    println!("Full log file at: {}", log_file.display());
    println!();

    for line in tail {
        println!("{line}");
    }

    Ok(())
}

fn tail<'a, T>(items: &'a [T], count: usize) -> &'a [T] {
    &items[items.len().saturating_sub(count)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail() {
        let lines = ["a", "b", "c"];
        assert_eq!(tail(&lines, 2), &["b", "c"]);
        assert_eq!(tail(&lines, 10), &["a", "b", "c"]);
        assert!(tail(&lines, 0).is_empty());
    }
}
