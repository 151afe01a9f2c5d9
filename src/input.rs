//! Operator input collection.
//!
//! The three run parameters are prompted for on the console, in the order
//! the operator expects them. Each prompt can be pre-answered through an
//! environment variable (a `.env` file is honored, see `main.rs`), which
//! keeps repeated runs against the same inventory scriptable.

use std::error::Error;
use std::io::{self, Write};

/// Environment overrides for the three prompts.
const EXCEL_FILE_VAR: &str = "EXCEL_FILE";
const IP_COLUMN_VAR: &str = "IP_COLUMN";
const IP_PREFIX_VAR: &str = "IP_PREFIX";

/// The three operator answers for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path of the inventory spreadsheet.
    pub excel_file: String,
    /// Header of the column holding the IP addresses.
    pub column_name: String,
    /// Raw three-octet prefix, normalized later.
    pub ip_prefix: String,
}

/// Collect the run parameters from environment or console, in prompt order.
pub fn gather_run_config() -> Result<RunConfig, Box<dyn Error>> {
    Ok(RunConfig {
        excel_file: prompt_or_env(EXCEL_FILE_VAR, "Excel file path (e.g. inventory.xlsx): ")?,
        column_name: prompt_or_env(IP_COLUMN_VAR, "Column name (e.g. IP): ")?,
        ip_prefix: prompt_or_env(IP_PREFIX_VAR, "IP prefix (e.g. 211.218.228.): ")?,
    })
}

/// One answer: a non-empty environment variable wins, otherwise prompt.
///
/// Console answers are taken verbatim minus the line terminator.
fn prompt_or_env(var: &str, prompt: &str) -> Result<String, Box<dyn Error>> {
    if let Ok(value) = std::env::var(var) {
        if !value.is_empty() {
            log::info!("Using {var} from environment");
            return Ok(value);
        }
    }

    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
