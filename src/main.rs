//! Account Summary CLI
//!
//! Reads one or more transaction CSV files and delivers a summary for each.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- account_1234.csv > summary.eml
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` or `debug` to control logging verbosity
//! - `TO_EMAIL`, `FROM_EMAIL`, `SUBJECT`: message addressing
//! - `TXN_STORE`: CSV file that processed transactions are appended to
//! - `OUTBOX_DIR`: write one `.eml` per input file here instead of stdout

use account_summary::{Config, Result, SummaryError, SummaryPipeline};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let inputs: Vec<String> = env::args().skip(1).collect();
    if inputs.is_empty() {
        return Err(SummaryError::MissingArgument);
    }

    let config = Config::from_env()?;
    let mut pipeline = SummaryPipeline::from_config(&config)?;

    for input_path in &inputs {
        pipeline.process_file(input_path)?;
    }

    Ok(())
}
