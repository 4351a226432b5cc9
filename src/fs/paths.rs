//! Path and directory listing helpers.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Check whether a name refers to a hidden (dot-prefixed) entry.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// Check whether a filename looks like a PDF (case-insensitive extension).
pub fn is_pdf_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

/// List the names of immediate subdirectories, skipping hidden entries.
///
/// Entries whose names are not valid UTF-8 are skipped. Names come back
/// sorted ascending for reproducible output.
pub fn subdir_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if is_hidden_name(&name) {
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}

/// List the names of PDF files directly inside a directory, sorted ascending.
pub fn pdf_file_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if is_hidden_name(&name) || !is_pdf_name(&name) {
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}

/// Join path segments with forward slashes regardless of platform.
///
/// Asset references in the emitted JSON always use `/` separators.
pub fn asset_path(segments: &[&str]) -> String {
    segments.join("/")
}
