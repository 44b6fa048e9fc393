//! Diagnostics with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Color is applied only when stderr supports it.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::{OwoColorize, Stream};

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Render a warning line without color.
#[must_use]
pub fn format_warning(component: &str, message: &str) -> String {
    format!("[html2sxml {component}] ⚠ {message}")
}

/// Warn about a recoverable condition (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("HTML Parser", "input is not valid UTF-8");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let line = format_warning(component, message);
    if first_time(&line) {
        eprintln!(
            "{}",
            line.if_supports_color(Stream::Stderr, |text| text.yellow())
        );
    }
}

/// Record `line`, returning `true` if it had not been seen before.
fn first_time(line: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(line.to_string())
}
