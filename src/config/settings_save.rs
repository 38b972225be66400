use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::skeletons::SETTINGS_SKELETON_CONTENT;
use crate::util::config::{normalize_key, skip_comment_or_empty};

/// What: Persist `key = value` into a settings file, preserving comments and other keys.
///
/// Inputs:
/// - `path`: Settings file to update (created with the skeleton when missing or empty)
/// - `key_norm`: Normalized key (e.g. `language`)
/// - `value`: New value
///
/// Output:
/// - `Ok(())` on success; `Err` with a message when the file cannot be written.
///
/// # Errors
/// - Returns `Err` when the parent directory cannot be created
/// - Returns `Err` without writing when an existing file cannot be read
/// - Returns `Err` when the file cannot be written
///
/// Details:
/// - Rewrites every uncommented line whose normalized key matches `key_norm`.
/// - Appends the key when no line matched.
pub fn save_key_at(path: &Path, key_norm: &str, value: &str) -> Result<(), String> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;
    }

    let existing = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(format!("Failed to read {}: {e}", path.display())),
    };
    let source = if existing.trim().is_empty() {
        SETTINGS_SKELETON_CONTENT
    } else {
        existing.as_str()
    };

    let mut replaced = false;
    let mut lines: Vec<String> = source
        .lines()
        .map(|line| {
            if skip_comment_or_empty(line) {
                return line.to_string();
            }
            match line.split_once('=') {
                Some((raw_key, _)) if normalize_key(raw_key) == key_norm => {
                    replaced = true;
                    format!("{key_norm} = {value}")
                }
                _ => line.to_string(),
            }
        })
        .collect();
    if !replaced {
        lines.push(format!("{key_norm} = {value}"));
    }

    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}
