use std::path::PathBuf;

use clap::Parser;

/// Command-line interface for the folio report runner
///
/// folio runs a fixed sequence of SQL files against the local
/// books/authors SQLite database: a join script, an inline preview of the
/// resulting `authors_books` table, three query loads (sorting, group-by,
/// aggregation), and a scatter chart rendered from the aggregation
/// result. Progress and row counts are logged to stderr; the run summary
/// is printed to stdout.
#[derive(Parser)]
#[command(version, about, name = "folio")]
pub struct Args {
    /// Directory containing the .sql query files
    #[arg(long, default_value = "sql_queries")]
    pub queries_dir: PathBuf,

    /// Data directory holding the database file and the chart output.
    /// Created if absent.
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Path to the SQLite database file. Defaults to
    /// <data-dir>/books_authors.db
    #[arg(long)]
    pub database_file: Option<PathBuf>,

    /// Where to write the scatter chart PNG. Defaults to
    /// <data-dir>/year_published_vs_age.png
    #[arg(long)]
    pub chart_file: Option<PathBuf>,

    /// Print the run summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}
