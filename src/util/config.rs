//! Configuration file parsing utilities.
//!
//! Helpers shared by the settings reader and writer for `key = value` files.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Key is normalized (lowercase, `.`/`-`/space become `_`)
/// - Inline `#` / `//` comments are stripped from the value
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = normalize_key(raw_key);
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val).to_string()))
}

/// Normalize a settings key so `Translate-Debounce.MS` matches `translate_debounce_ms`.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// Strip a trailing `# ...` or `// ...` comment and surrounding whitespace.
///
/// A marker only starts a comment at the beginning of the value or after
/// whitespace, so URLs such as `https://host/v1` survive intact.
#[must_use]
pub fn strip_inline_comment(s: &str) -> &str {
    let cut = s
        .char_indices()
        .find(|&(i, _)| {
            let rest = &s[i..];
            (rest.starts_with('#') || rest.starts_with("//"))
                && (i == 0 || s[..i].ends_with(char::is_whitespace))
        })
        .map_or(s.len(), |(i, _)| i);
    s[..cut].trim()
}
