//! Print the ruler layout for a display width.

use super::{open_scope, LoadOptions};
use std::path::Path;

/// Loads `file` and prints the chosen scale with every major and minor tick.
///
/// # Errors
/// - If the file cannot be decoded
/// - If the recording has no duration
pub fn handle_ruler(file: &Path, width: u32, options: &LoadOptions) -> anyhow::Result<()> {
    let scope = open_scope(file, options)?;
    let ticks = scope.tick_set(width)?;

    println!(
        "Scale {} ({}s major / {}s minor) at {:.3} px/s",
        ticks.scale,
        ticks.scale.major_interval(),
        ticks.scale.minor_interval(),
        ticks.pixels_per_second
    );
    println!();
    println!("Major ticks ({}):", ticks.major.len());
    for tick in &ticks.major {
        println!("  {:>10.2}px  {}", tick.x, tick.label);
    }
    println!();
    println!("Minor ticks ({}):", ticks.minor.len());
    let positions: Vec<String> = ticks.minor.iter().map(|x| format!("{x:.2}")).collect();
    println!("  {}", positions.join(" "));

    Ok(())
}
