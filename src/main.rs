//! Payment Methods CLI
//!
//! Without arguments, prints a line describing the payment capability.
//! With a CSV of `method,amount` rows, prints one confirmation per row.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- requests.csv > confirmations.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info`, `debug` or `warn` to control logging verbosity

use log::info;
use payment_methods::{startup_banner, PaymentBatch, PaymentError, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = env::args_os().skip(1);
    let input_path = args.next().map(PathBuf::from);
    if let Some(extra) = args.next() {
        return Err(PaymentError::UnexpectedArgument(extra));
    }

    let input_path = match input_path {
        Some(path) => path,
        None => {
            println!("{}", startup_banner());
            return Ok(());
        }
    };

    // stdout carries CSV in batch mode
    info!("{}", startup_banner());
    info!("Reading payment requests from {}", input_path.display());

    let file = File::open(&input_path)?;
    let reader = BufReader::new(file);

    let stdout = io::stdout();
    let handle = stdout.lock();

    let mut batch = PaymentBatch::new();
    batch.process_csv(reader, handle)?;

    Ok(())
}
