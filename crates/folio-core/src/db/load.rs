//! Query execution that materializes result rows into tables.

use std::fs;
use std::path::Path;

use log::{error, info};
use rusqlite::types::Value;

use crate::{
    error::{DatabaseResultExt, ReportError, Result},
    table::{Cell, DataTable},
};

impl super::Database {
    /// Reads a single query from a file, executes it, and returns the
    /// result as a [`DataTable`].
    pub fn query_file_to_table(&self, path: &Path) -> Result<DataTable> {
        let name = super::file_name(path);
        let outcome = fs::read_to_string(path)
            .map_err(|e| ReportError::sql_file(path, e))
            .and_then(|sql| self.load_table(&sql));

        match outcome {
            Ok(table) => {
                info!(
                    "Loaded table from SQL file: {name} ({} rows)",
                    table.row_count()
                );
                Ok(table)
            }
            Err(e) => {
                error!("Failed to load table from {name}: {e}");
                Err(e)
            }
        }
    }

    /// Executes an inline query string and returns the result as a
    /// [`DataTable`].
    pub fn query_to_table(&self, sql: &str) -> Result<DataTable> {
        match self.load_table(sql) {
            Ok(table) => {
                info!("Query returned {} rows", table.row_count());
                Ok(table)
            }
            Err(e) => {
                error!("Failed to execute SQL query: {e}");
                Err(e)
            }
        }
    }

    /// Materializes every row of a query, with column names taken from the
    /// statement's result set.
    fn load_table(&self, sql: &str) -> Result<DataTable> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let column_count = columns.len();

        let mut rows = Vec::new();
        let mut result = stmt.query([]).db_context("Failed to execute query")?;
        while let Some(row) = result.next().db_context("Failed to read result row")? {
            let mut cells = Vec::with_capacity(column_count);
            for idx in 0..column_count {
                let value: Value = row.get(idx).db_context("Failed to read column value")?;
                cells.push(Cell::from(value));
            }
            rows.push(cells);
        }

        Ok(DataTable::new(columns, rows))
    }
}
