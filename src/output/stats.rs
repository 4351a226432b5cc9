//! Statistics reporting.

use console::style;

use crate::catalog::IndexSummary;

/// Print the final count for a rename run, including the zero case.
pub fn print_rename_stats(renamed: usize) {
    println!();
    println!("Total renamed PDF files: {}", style(renamed).green());
    if renamed == 0 {
        println!("No files needed renaming - all filenames are already safe.");
    }
}

/// Print what an index run discovered.
pub fn print_index_stats(summary: &IndexSummary) {
    println!();
    println!("{}", style("Generated JSON files:").bold());
    println!("- Found {} years", summary.years);
    println!("- Found {} paper types", summary.paper_types);
    println!("- Found {} categories", summary.categories);
    println!("- Found {} papers", summary.papers);
}
