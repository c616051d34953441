//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR via `console`'s own detection):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: names, hints
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

/// Print a success message with checkmark (green).
///
/// Example: `✓ synced DATABASE_URL`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ store unreachable`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning message (yellow).
///
/// Example: `⚠ MISSING not found in source, skipped`
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ run with --dry-run to preview`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  version:  abc123`
pub fn kv(label: &str, value: impl Display) {
    println!(
        "  {}  {}",
        style(label).dim(),
        style(value.to_string()).bold()
    );
}

/// Print a list item with bullet.
///
/// Example: `  • DATABASE_URL`
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a dimmed/secondary message.
///
/// Example: `no secrets stored`
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Format a secret name in cyan for inline use.
pub fn name(n: &str) -> String {
    style(n).cyan().to_string()
}
