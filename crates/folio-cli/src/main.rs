//! Folio CLI Application
//!
//! Command-line interface for the folio SQL report runner.

mod args;
mod cli;

use anyhow::Result;
use args::Args;
use clap::Parser;
use env_logger::Env;
use log::error;

fn main() -> Result<()> {
    // INFO-level progress is part of the tool's normal output; RUST_LOG
    // still overrides the default filter.
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(err) = cli::run(args) {
        // Expected data and query failures end a best-effort batch run
        // cleanly; anything else is a programming error and keeps the
        // nonzero exit.
        return match err.downcast_ref::<folio_core::ReportError>() {
            Some(report_err) => {
                error!("Error during database operations: {report_err}");
                Ok(())
            }
            None => Err(err),
        };
    }

    Ok(())
}
