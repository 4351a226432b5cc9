//! Filesystem module.
//!
//! Provides:
//! - Filename sanitization and collision handling
//! - Directory listing and path helpers

pub mod naming;
pub mod paths;

pub use naming::{is_safe_filename, make_filename_safe, make_unique_path};
pub use paths::{asset_path, ensure_dir, is_hidden_name, is_pdf_name, pdf_file_names, subdir_names};
