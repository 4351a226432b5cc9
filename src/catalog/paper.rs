//! Paper records for the papers.json artifact.

use serde::{Deserialize, Serialize};

use crate::catalog::exam_type::exam_type_display_name;
use crate::fs::{asset_path, make_filename_safe};

/// One discovered PDF, as serialized into papers.json.
///
/// `id` is derived from (year, exam type, category id) only, so two PDFs in
/// the same category share an id. The app keys navigation on the category
/// level and resolves files by `path`, so this is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    pub id: String,
    pub year: String,
    #[serde(rename = "type")]
    pub paper_type: String,
    pub category_id: String,
    pub title: String,
    pub original_file_name: String,
    pub file_name: String,
    pub path: String,
    pub require_path: String,
}

impl Paper {
    /// Build a paper record from its position in the tree.
    ///
    /// `type_dir` and `category_dir` are the on-disk folder names (used in
    /// paths and titles); `exam_type` and `category_id` are the normalized
    /// tokens (used in ids).
    pub fn new(
        year: &str,
        type_dir: &str,
        exam_type: &str,
        category_dir: &str,
        category_id: &str,
        file_name: &str,
    ) -> Self {
        let safe_name = make_filename_safe(file_name);
        let path = asset_path(&["papers", year, type_dir, category_dir, &safe_name]);

        Self {
            id: format!("{}-{}-{}", year, exam_type, category_id),
            year: year.to_string(),
            paper_type: exam_type.to_string(),
            category_id: category_id.to_string(),
            title: format!(
                "UPSC {} {} - {}",
                exam_type_display_name(exam_type),
                year,
                category_dir
            ),
            original_file_name: file_name.to_string(),
            file_name: safe_name,
            require_path: format!("@/assets/{}", path),
            path,
        }
    }
}
