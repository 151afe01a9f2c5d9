//! Report workbook writer.

use colored::Colorize;
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::{Path, PathBuf};

/// Header label of the single report column.
pub const UNUSED_IP_LABEL: &str = "unused_ip";

/// Fixed stem of the report file name.
const OUTPUT_FILE_LABEL: &str = "unused_ip_list";

/// Report file name for a subnet number, e.g. `unused_ip_list_228band.xlsx`.
pub fn output_file_name(subnet_number: &str) -> String {
    format!("{OUTPUT_FILE_LABEL}_{subnet_number}band.xlsx")
}

/// Write the unused list into `out_dir`, one address per row.
///
/// A failed save prints one diagnostic line and yields `None`; the caller
/// still reports the count.
pub fn save_unused_ips(unused: &[String], subnet_number: &str, out_dir: &Path) -> Option<PathBuf> {
    let output_file = out_dir.join(output_file_name(subnet_number));

    match write_unused_workbook(unused, &output_file) {
        Ok(()) => {
            log::info!("# Wrote {} rows to {}", unused.len(), output_file.display());
            Some(output_file)
        }
        Err(e) => {
            log::warn!(
                "{failed} to save {file}",
                failed = "failed".on_red(),
                file = output_file.display()
            );
            println!("Error while saving file: {e}");
            None
        }
    }
}

/// Single-column workbook: header row, then the addresses in order.
pub fn write_unused_workbook(unused: &[String], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, UNUSED_IP_LABEL)?;
    for (i, ip) in unused.iter().enumerate() {
        worksheet.write_string(i as u32 + 1, 0, ip)?;
    }

    workbook.save(path)?;
    Ok(())
}
