//! Database connection management and query execution.
//!
//! This module owns the single SQLite connection used by a report run. It
//! provides script execution (no result capture) and query loading into
//! [`crate::table::DataTable`] values. The schema is an input: folio never
//! creates or migrates tables.

use std::path::Path;

use log::info;
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, ReportError, Result};

pub mod load;
pub mod script;

/// Database connection handle.
///
/// Opened once by the orchestrator, passed by reference to every
/// operation, and closed exactly once when the run ends.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens the SQLite database file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path.as_ref()).db_context("Failed to open database connection")?;
        info!("Connected to database: {}", path.as_ref().display());
        Ok(Self { connection })
    }

    /// Closes the connection, surfacing any pending SQLite failure.
    pub fn close(self) -> Result<()> {
        self.connection
            .close()
            .map_err(|(_, e)| ReportError::database_error("Failed to close database connection", e))?;
        info!("Database connection closed");
        Ok(())
    }
}

/// File name component of a path for log messages, falling back to the
/// full path when there is none.
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
