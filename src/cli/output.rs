//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: set success
//! - Blue: delete success
//! - Red: errors
//! - Cyan: hints
//!
//! Remote envelopes always print as pretty JSON on stdout; fatal errors go
//! to stderr.

use colored::Colorize;
use serde::Serialize;

use crate::error::Result;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Pretty-print a JSON envelope to stdout.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a green success line for a stored secret.
///
/// Example: `API_KEY set`
pub fn set_ok(name: &str) {
    if colors_enabled() {
        println!("{} set", name.green().bold());
    } else {
        println!("{} set", name);
    }
}

/// Print a blue success line for a deleted secret.
///
/// Example: `API_KEY deleted`
pub fn delete_ok(name: &str) {
    if colors_enabled() {
        println!("{} deleted", name.blue().bold());
    } else {
        println!("{} deleted", name);
    }
}

/// Print a bold red error label on stdout, ahead of an envelope.
///
/// Example: `Error on get public key:`
pub fn error_label(label: &str) {
    if colors_enabled() {
        println!("{}", label.red().bold());
    } else {
        println!("{}", label);
    }
}

/// Print a fatal error message to stderr (red).
///
/// Example: `✗ malformed URL: ...`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ add GH_USERNAME to ~/.gh-secrets`
pub fn hint(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "→".cyan(), msg.cyan());
    } else {
        println!("→ {}", msg);
    }
}

/// Print the batch outcome summary.
///
/// Example: `2 set, 1 failed`
pub fn batch_summary(stored: usize, failed: usize) {
    if !colors_enabled() {
        println!("{} set, {} failed", stored, failed);
    } else if failed == 0 {
        println!("{} set, {} failed", stored.to_string().green().bold(), failed);
    } else {
        println!(
            "{} set, {} failed",
            stored.to_string().green().bold(),
            failed.to_string().red().bold()
        );
    }
}
