//! Column extraction from workbook files.

use calamine::{open_workbook_auto, Data, Reader, Sheets};
use colored::Colorize;
use std::error::Error;
use std::path::Path;

/// Read the named column from the first worksheet of a spreadsheet.
///
/// The header row is the first row of the used range; the column name must
/// match a header cell exactly (case-sensitive). String cells become
/// `Some`, everything else (empty, numeric, bool, error, date cells)
/// becomes `None` and never takes part in matching.
///
/// # Arguments
/// * `path` - Path of the workbook (any format calamine auto-detects)
/// * `column_name` - Exact header of the wanted column
///
/// # Returns
/// * `Ok(Some(cells))` - One entry per data row below the header
/// * `Ok(None)` - File or column missing; a diagnostic line was printed
///   and the caller halts the pipeline
/// * `Err` - The workbook exists but could not be read
pub fn load_ip_column(
    path: &str,
    column_name: &str,
) -> Result<Option<Vec<Option<String>>>, Box<dyn Error>> {
    log::info!("#Start load_ip_column({path}, {column_name})");

    if !Path::new(path).exists() {
        log::warn!("Input workbook missing: {path}");
        println!("File not found: {}", path.red());
        return Ok(None);
    }

    let mut workbook: Sheets<_> =
        open_workbook_auto(path).map_err(|e| format!("Error opening workbook {path}: {e}"))?;

    let sheet_names = workbook.sheet_names();
    let sheet_name = sheet_names
        .first()
        .ok_or_else(|| format!("Workbook has no sheets: {path}"))?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| format!("Error reading sheet {sheet_name}: {e}"))?;

    let mut rows = range.rows();
    let Some(column_index) = rows.next().and_then(|header| find_column(header, column_name))
    else {
        log::warn!("Column {column_name} not in header row of sheet {sheet_name}");
        println!("Column not found: {}", column_name.red());
        return Ok(None);
    };

    let cells: Vec<Option<String>> = rows.map(|row| cell_text(row.get(column_index))).collect();

    log::info!("# Got {} rows from column {column_name}", cells.len());
    Ok(Some(cells))
}

/// Position of the header cell matching the column name exactly.
fn find_column(header: &[Data], column_name: &str) -> Option<usize> {
    header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s == column_name))
}

/// String cells only; other cell types never match an address.
fn cell_text(cell: Option<&Data>) -> Option<String> {
    match cell {
        Some(Data::String(s)) => Some(s.clone()),
        _ => None,
    }
}
