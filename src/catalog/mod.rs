//! Paper catalog module.
//!
//! Provides:
//! - Exam type and category normalization
//! - Paper records
//! - The index builder behind the `index` subcommand

pub mod category;
pub mod exam_type;
pub mod index;
pub mod paper;

pub use category::{normalize_category_id, Category};
pub use exam_type::{exam_type_display_name, normalize_exam_type};
pub use index::{IndexSummary, PaperIndex};
pub use paper::Paper;
