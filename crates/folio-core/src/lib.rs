//! Core library for the folio report runner.
//!
//! folio executes a fixed sequence of SQL files against a local
//! books/authors SQLite database, materializes each query's result into a
//! [`DataTable`], logs row counts along the way, and renders a scatter
//! chart (year published vs. author age at publication) from the
//! aggregation query.
//!
//! The library is deliberately synchronous and single-threaded: a run is
//! one linear pass over the query files, holding one exclusive database
//! connection from open to close.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use folio_core::{run_report, Database};
//!
//! # fn example() -> folio_core::Result<()> {
//! let mut db = Database::open("data/books_authors.db")?;
//! let outcome = run_report(
//!     &mut db,
//!     Path::new("sql_queries"),
//!     Path::new("data/year_published_vs_age.png"),
//! );
//! db.close()?;
//!
//! let summary = outcome?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod db;
pub mod display;
pub mod error;
pub mod report;
pub mod table;

// Re-export commonly used types
pub use chart::{create_scatter_plot, AGE_COLUMN, YEAR_COLUMN};
pub use db::Database;
pub use display::TablePreview;
pub use error::{ReportError, Result};
pub use report::{run_report, ReportSummary};
pub use table::{Cell, DataTable};
