//! File indirection for settings.
//!
//! A setting may hold either its value or the path of a file containing the
//! value, which lets credentials come from mounted secrets
//! (`-k /run/secrets/aws_key`). If the setting names a readable file, the
//! file's contents replace it; otherwise it is used as given.

use std::fs;

use tracing::debug;

/// Replace `value` with the contents of the file it names, if any.
///
/// Trailing whitespace (the final newline of a one-line file) is trimmed.
pub fn read_indirect(setting: &str, value: String) -> String {
    if value.is_empty() {
        return value;
    }
    match fs::read_to_string(&value) {
        Ok(contents) => {
            debug!(setting, path = %value, "loaded setting from file");
            contents.trim_end().to_string()
        }
        Err(_) => value,
    }
}
