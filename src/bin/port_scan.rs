//! `port-scan` binary.
//!
//! Exits non-zero when rustscan is unavailable, cannot be started or times
//! out. A scan that ran but exited non-zero still has its output saved and
//! only produces a warning.

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use recon_kit::initialization::{init_logger_with, load_dotenv};
use recon_kit::{PortScan, PortScanOpt, ScanOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();

    let opt = PortScanOpt::parse();
    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let scanner = PortScan::with_defaults();
    match scanner.run(&opt.target, Path::new(".")).await {
        Ok(report) => {
            println!("{report}");
            match report.outcome {
                ScanOutcome::Completed { .. } if !report.succeeded() => {
                    log::warn!("rustscan reported an error; see the output file for details");
                    Ok(())
                }
                ScanOutcome::Completed { .. } => Ok(()),
                ScanOutcome::TimedOut { .. } => process::exit(1),
            }
        }
        Err(e) => {
            eprintln!("port-scan error: {:#}", anyhow::Error::from(e));
            process::exit(1);
        }
    }
}
