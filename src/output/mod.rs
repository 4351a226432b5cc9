//! Output module for console output and statistics.

pub mod console;
pub mod stats;

pub use console::{print_error, print_info, print_rename, print_warning};
pub use stats::{print_index_stats, print_rename_stats};
