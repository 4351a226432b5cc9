//! Category records and folder-name normalization.

use serde::{Deserialize, Serialize};

use crate::fs::make_filename_safe;

/// A subject/paper grouping discovered under a (year, exam type) pair.
///
/// `name` and `folder` keep the original folder name; `id` is the canonical
/// identifier from [`normalize_category_id`]. Two categories are the same
/// only if all three fields match — de-duplication is by whole record, not
/// by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub folder: String,
}

impl Category {
    /// Build a category record from its folder name.
    pub fn from_folder(folder: &str) -> Self {
        Self {
            id: normalize_category_id(folder),
            name: folder.to_string(),
            folder: folder.to_string(),
        }
    }
}

/// Map a category folder name to a canonical category id.
///
/// Known General Studies papers and the essay paper get fixed ids; anything
/// else falls back to the sanitized folder name. Patterns are checked in
/// descending specificity order because "paper i" is a substring of
/// "paper ii" and friends.
pub fn normalize_category_id(folder: &str) -> String {
    let name = folder.to_lowercase();
    let general_studies = name.contains("general studies");

    if general_studies && name.contains("paper iv") {
        "gs4".to_string()
    } else if general_studies && name.contains("paper iii") {
        "gs3".to_string()
    } else if (general_studies && name.contains("paper ii"))
        || name.contains("gs paper ii")
        || name.contains("csat")
    {
        "gs2".to_string()
    } else if (general_studies && name.contains("paper i")) || name.contains("gs paper i") {
        "gs1".to_string()
    } else if name.contains("essay") {
        "essay".to_string()
    } else {
        make_filename_safe(folder)
    }
}
