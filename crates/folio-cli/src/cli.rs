//! Run orchestration: path resolution, connection lifetime, summary
//! output.

use std::fs;

use anyhow::{Context, Result};
use folio_core::{run_report, Database, ReportError};
use log::{error, info};

use crate::args::Args;

const DATABASE_FILE: &str = "books_authors.db";
const CHART_FILE: &str = "year_published_vs_age.png";

/// Resolves paths, owns the connection from open to close, and prints the
/// run summary.
pub fn run(args: Args) -> Result<()> {
    let database_file = args
        .database_file
        .unwrap_or_else(|| args.data_dir.join(DATABASE_FILE));
    let chart_file = args
        .chart_file
        .unwrap_or_else(|| args.data_dir.join(CHART_FILE));

    fs::create_dir_all(&args.data_dir).map_err(|e| ReportError::FileSystem {
        path: args.data_dir.clone(),
        source: e,
    })?;

    info!("Starting query execution...");
    info!("Using database: {}", database_file.display());

    // The existence check runs before the connection opens, so this early
    // return cannot leak an open handle.
    if !args.queries_dir.is_dir() {
        error!(
            "{}",
            ReportError::QueriesDirMissing {
                path: args.queries_dir,
            }
        );
        return Ok(());
    }

    let mut db = Database::open(&database_file)?;
    let outcome = run_report(&mut db, &args.queries_dir, &chart_file);
    let closed = db.close();

    let summary = outcome?;
    closed?;

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&summary).context("Failed to serialize run summary")?;
        println!("{rendered}");
    } else {
        print!("{summary}");
    }

    Ok(())
}
