//! Console reporting.

use colored::Colorize;
use std::path::Path;

/// Print the closing report.
///
/// The save-confirmation line only appears when a report file was written;
/// the count line is printed unconditionally.
pub fn print_results(output_file: Option<&Path>, unused_count: usize) {
    if let Some(file) = output_file {
        println!("{}", saved_line(file));
    }
    println!("{}", count_line(unused_count));
}

fn saved_line(file: &Path) -> String {
    format!(
        "Results saved to '{}'.",
        file.display().to_string().green()
    )
}

fn count_line(unused_count: usize) -> String {
    format!("Total unused IP count: {unused_count}")
}
