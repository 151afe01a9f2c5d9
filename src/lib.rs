// cargo watch -x 'fmt' -x 'run'

pub mod excel;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use std::error::Error;
use std::path::{Path, PathBuf};

use itertools::Itertools;

use input::RunConfig;
use models::Prefix;

/// Outcome of one pipeline run, consumed by the reporter.
pub struct RunSummary {
    /// Saved report file, when the write succeeded.
    pub output_file: Option<PathBuf>,
    /// Number of unused addresses found.
    pub unused_count: usize,
}

/// Run the full pipeline for one set of operator inputs.
///
/// The report workbook is written into `out_dir`, named after the subnet
/// number of the prefix.
///
/// # Returns
/// * `Ok(Some(RunSummary))` - The pipeline ran; the summary carries the
///   written file (if saving succeeded) and the unused count
/// * `Ok(None)` - The loader reported a missing file or column; the
///   diagnostic has already been printed and nothing was written
/// * `Err` - The workbook existed but could not be read
pub fn run(config: &RunConfig, out_dir: &Path) -> Result<Option<RunSummary>, Box<dyn Error>> {
    log::info!("#Start run()");

    let prefix = Prefix::normalize(&config.ip_prefix);

    let Some(cells) = excel::load_ip_column(&config.excel_file, &config.column_name)? else {
        return Ok(None);
    };

    let used = processing::used_ips(&cells, &prefix);
    let candidates = processing::candidate_ips(&prefix);
    let unused = processing::find_unused_ips(&used, candidates);

    log::info!(
        "# Prefix {prefix}: {used} used, {unused} unused",
        used = used.len(),
        unused = unused.len()
    );
    log::debug!("# Unused sample: [{}]", unused.iter().take(5).join(", "));

    let output_file = output::save_unused_ips(&unused, prefix.subnet_number(), out_dir);

    Ok(Some(RunSummary {
        output_file,
        unused_count: unused.len(),
    }))
}
