//! Filename sanitization and collision handling.

use std::path::{Path, PathBuf};

use regex::Regex;

/// Make a filename safe across platforms (Android in particular).
///
/// Keeps word characters, hyphens, and periods; everything else (including
/// spaces) becomes an underscore. Runs of underscores collapse to one,
/// leading/trailing underscores are stripped, and the result is lowercased.
///
/// Total function: any input is accepted, and an all-special-character input
/// legally sanitizes to the empty string.
pub fn make_filename_safe(name: &str) -> String {
    let special = Regex::new(r"[^\w\-.]").unwrap();
    let doubled = Regex::new(r"__+").unwrap();

    let safe = special.replace_all(name, "_");
    let safe = doubled.replace_all(&safe, "_");
    safe.trim_matches('_').to_lowercase()
}

/// Check whether a filename is already in its safe form.
pub fn is_safe_filename(name: &str) -> bool {
    make_filename_safe(name) == name
}

/// Find a free path by appending `_1`, `_2`, … before the extension.
///
/// Returns `path` unchanged if nothing exists there. Never returns a path to
/// an existing file (within the probe limit).
pub fn make_unique_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let parent = path.parent().unwrap_or(Path::new("."));

    let mut counter = 1;
    loop {
        let candidate = if ext.is_empty() {
            format!("{}_{}", stem, counter)
        } else {
            format!("{}_{}.{}", stem, counter, ext)
        };

        let candidate_path = parent.join(&candidate);
        if !candidate_path.exists() {
            return candidate_path;
        }

        counter += 1;
        if counter > 1000 {
            // Safety limit
            return candidate_path;
        }
    }
}
