//! In-memory tabular results produced by queries.
//!
//! A [`DataTable`] is a snapshot of one query's result set: named columns
//! and ordered rows, owned by the caller and independent of the connection
//! that produced it.

use std::fmt;

use serde::Serialize;

/// A single value in a query result, mirroring SQLite's storage classes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl From<rusqlite::types::Value> for Cell {
    fn from(value: rusqlite::types::Value) -> Self {
        use rusqlite::types::Value;
        match value {
            Value::Null => Cell::Null,
            Value::Integer(i) => Cell::Integer(i),
            Value::Real(r) => Cell::Real(r),
            Value::Text(t) => Cell::Text(t),
            Value::Blob(b) => Cell::Blob(b),
        }
    }
}

impl Cell {
    /// Numeric view of the cell. Integers widen to f64; text and blobs
    /// have no numeric interpretation.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Integer(i) => Some(*i as f64),
            Cell::Real(r) => Some(*r),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => write!(f, "NULL"),
            Cell::Integer(i) => write!(f, "{i}"),
            Cell::Real(r) => write!(f, "{r}"),
            Cell::Text(t) => write!(f, "{t}"),
            Cell::Blob(b) => write!(f, "blob({} bytes)", b.len()),
        }
    }
}

/// An in-memory table with named columns and ordered rows.
///
/// Produced fresh per query; nothing is shared with the connection or with
/// other tables. Each row has exactly as many cells as there are columns.
#[derive(Debug, Clone, Serialize)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    /// Creates a table from column names and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    /// Column names in result-set order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in result-set order.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether a column with this exact name is present.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Position of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Extracts (x, y) point pairs from two named columns.
    ///
    /// Rows where either cell is not numeric (NULL, text, blob) are
    /// skipped. Returns `None` when either column is absent.
    pub fn numeric_pairs(&self, x_column: &str, y_column: &str) -> Option<Vec<(f64, f64)>> {
        let x_idx = self.column_index(x_column)?;
        let y_idx = self.column_index(y_column)?;

        let pairs = self
            .rows
            .iter()
            .filter_map(|row| {
                let x = row.get(x_idx)?.as_f64()?;
                let y = row.get(y_idx)?.as_f64()?;
                Some((x, y))
            })
            .collect();
        Some(pairs)
    }
}
