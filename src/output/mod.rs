//! Output for the unused-address report.
//!
//! This module handles writing and announcing results:
//! - [`xlsx`] - Report workbook writer
//! - [`terminal`] - Console reporting

mod terminal;
mod xlsx;

pub use terminal::print_results;
pub use xlsx::{output_file_name, save_unused_ips, write_unused_workbook, UNUSED_IP_LABEL};
