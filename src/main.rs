//! Order Report CLI
//!
//! Reads `customers.txt`, `items.txt` and `orders.txt` from the working
//! directory and writes `order_report.txt` next to them.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use order_report::{ReportEngine, ReportPaths, Result};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let paths = ReportPaths::default();
    let engine = ReportEngine::load(&paths)?;
    engine.write_report(&paths.report)?;
    Ok(())
}
