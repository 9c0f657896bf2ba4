//! `domain-recon` binary.
//!
//! Thin wrapper around the `recon_kit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use recon_kit::initialization::{init_logger_with, load_dotenv};
use recon_kit::{DomainRecon, DomainReconOpt};

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();

    let opt = DomainReconOpt::parse();
    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let recon = DomainRecon::with_defaults().context("Failed to initialize lookup clients")?;

    match recon.run(&opt.domain, Path::new(".")).await {
        Ok(report) => {
            println!("{report}");
            println!("Database: {}", report.db_path.display());
            println!("Log file: {}", report.log_path.display());
            for failure in &report.failures {
                eprintln!(
                    "  {} write failed for {}: {}",
                    failure.step.as_str(),
                    failure.subject,
                    failure.message
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("domain-recon error: {:#}", anyhow::Error::from(e));
            process::exit(1);
        }
    }
}
