//! The fixed report sequence over the books/authors database.
//!
//! One run executes the join script, previews the resulting
//! `authors_books` table, loads the sorting, group-by, and aggregation
//! queries, and renders the scatter chart from the aggregation result.
//! Control flow is strictly linear: the first failure stops the sequence
//! and propagates to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::{
    chart,
    db::Database,
    error::{ReportError, Result},
    table::DataTable,
};

/// Script that builds and populates the `authors_books` join table.
pub const JOIN_SCRIPT: &str = "query_join.sql";
/// Query returning books in publication order.
pub const SORTING_QUERY: &str = "query_sorting.sql";
/// Query grouping books per author.
pub const GROUP_BY_QUERY: &str = "query_group_by.sql";
/// Query computing author age at publication per book; feeds the chart.
pub const AGGREGATION_QUERY: &str = "query_aggregation.sql";

const PREVIEW_SQL: &str = "SELECT * FROM authors_books LIMIT 20";

/// Outcome of one report run: what was discovered, how many rows each
/// query produced, and where the chart landed (if it was rendered).
#[derive(Debug, Serialize)]
pub struct ReportSummary {
    /// Number of `.sql` files discovered in the queries directory.
    pub sql_files_found: usize,
    /// Preview of the `authors_books` join table (at most 20 rows).
    pub preview: DataTable,
    /// Row count of the sorting query.
    pub sorting_rows: usize,
    /// Row count of the group-by query.
    pub group_by_rows: usize,
    /// Row count of the aggregation query.
    pub aggregation_rows: usize,
    /// Path of the rendered scatter chart; `None` when the chart was
    /// skipped because the expected columns were missing.
    pub chart_file: Option<PathBuf>,
}

/// Runs the full report sequence against an open database.
///
/// The caller owns the connection for the whole run and closes it
/// afterwards, whether this returns `Ok` or `Err`.
pub fn run_report(
    db: &mut Database,
    queries_dir: &Path,
    chart_file: &Path,
) -> Result<ReportSummary> {
    let sql_files_found = log_available_scripts(queries_dir)?;

    db.execute_script_file(&queries_dir.join(JOIN_SCRIPT))?;

    let preview = db.query_to_table(PREVIEW_SQL)?;
    info!("authors_books table has {} rows shown", preview.row_count());

    let sorting = db.query_file_to_table(&queries_dir.join(SORTING_QUERY))?;
    info!("Sorting query returned {} rows", sorting.row_count());

    let group_by = db.query_file_to_table(&queries_dir.join(GROUP_BY_QUERY))?;
    info!("Group by query returned {} rows", group_by.row_count());

    let aggregation = db.query_file_to_table(&queries_dir.join(AGGREGATION_QUERY))?;
    info!("Aggregation query returned {} rows", aggregation.row_count());

    let rendered =
        chart::create_scatter_plot(db, &queries_dir.join(AGGREGATION_QUERY), chart_file)?;

    info!("Database operations completed successfully.");

    Ok(ReportSummary {
        sql_files_found,
        preview,
        sorting_rows: sorting.row_count(),
        group_by_rows: group_by.row_count(),
        aggregation_rows: aggregation.row_count(),
        chart_file: rendered.then(|| chart_file.to_path_buf()),
    })
}

/// Logs the `.sql` files present in the queries directory.
///
/// Discovery is informational only. Execution always runs the four fixed
/// filenames, whatever else the directory contains.
fn log_available_scripts(queries_dir: &Path) -> Result<usize> {
    let entries = fs::read_dir(queries_dir).map_err(|e| ReportError::FileSystem {
        path: queries_dir.to_path_buf(),
        source: e,
    })?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "sql"))
        .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    names.sort();

    info!(
        "Found {} SQL files in {}",
        names.len(),
        queries_dir.display()
    );
    for name in &names {
        info!(" - {name}");
    }

    Ok(names.len())
}
