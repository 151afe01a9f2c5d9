use std::error::Error;
use std::path::Path;
use subnet_unused_ips::{input, output, run};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let config = input::gather_run_config()?;

    if let Some(summary) = run(&config, Path::new("."))? {
        output::print_results(summary.output_file.as_deref(), summary.unused_count);
    }

    Ok(())
}
