//! Spreadsheet data source.
//!
//! This module handles reading the inventory workbook:
//! - [`reader`] - Column extraction from workbook files

mod reader;

pub use reader::load_ip_column;
