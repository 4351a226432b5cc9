//! Exam type normalization and display names.

/// Normalize an exam-type folder name to its canonical token.
///
/// `prelim*` folders become `prelims`, `main*` folders become `mains`, and
/// anything else passes through lowercased.
pub fn normalize_exam_type(folder: &str) -> String {
    let lower = folder.to_lowercase();
    if lower.starts_with("prelim") {
        "prelims".to_string()
    } else if lower.starts_with("main") {
        "mains".to_string()
    } else {
        lower
    }
}

/// Human-readable display name for an exam type token.
///
/// Unknown tokens map to themselves.
pub fn exam_type_display_name(exam_type: &str) -> &str {
    match exam_type {
        "prelims" => "Preliminary Examination",
        "mains" => "Main Examination",
        other => other,
    }
}
