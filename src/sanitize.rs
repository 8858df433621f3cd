//! Page text cleanup before splitting.
//!
//! Extracted PDF text often carries NUL bytes, mixed line endings and long
//! runs of padding spaces. Cleaning it first keeps chunks dense and makes
//! the text safe to store in databases that reject `\0`.

use std::sync::LazyLock;

use regex::Regex;

static HORIZONTAL_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static BLANK_LINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalize extracted text.
///
/// - drops NUL characters
/// - turns `\r\n` and `\r` into `\n`
/// - collapses runs of spaces and tabs into one space
/// - caps runs of newlines at two (one blank line)
/// - trims both ends
///
/// ```rust
/// use pdfslabs::sanitize::sanitize_text;
///
/// assert_eq!(sanitize_text("  a\t\tb\r\n\r\n\r\nc\0 "), "a b\n\nc");
/// ```
#[must_use]
pub fn sanitize_text(text: &str) -> String {
    let text = text.replace('\0', "").replace("\r\n", "\n").replace('\r', "\n");
    let text = HORIZONTAL_RUNS.replace_all(&text, " ");
    let text = BLANK_LINE_RUNS.replace_all(&text, "\n\n");
    text.trim().to_string()
}
