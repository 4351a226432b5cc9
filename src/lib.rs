//! UPSC Paper Tools - offline utilities for an exam-paper PDF asset tree.
//!
//! Two subcommands operate on a `assets/papers/<year>/<examType>/<category>`
//! hierarchy of PDF files:
//!
//! - `rename` makes every PDF filename filesystem-safe in place, resolving
//!   collisions with numeric suffixes.
//! - `index` walks the hierarchy and writes four JSON index files
//!   (`years.json`, `paper_types.json`, `categories.json`, `papers.json`)
//!   for the app to consume.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use upsc_paper_tools::catalog::PaperIndex;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let index = PaperIndex::scan(Path::new("assets/papers"))?;
//!     index.write_to(Path::new("assets/config"))?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod rename;

// Re-exports for convenience
pub use catalog::{normalize_category_id, Category, Paper, PaperIndex};
pub use config::Config;
pub use error::{Error, Result};
pub use fs::make_filename_safe;
pub use rename::{rename_pdfs, RenameRecord};
