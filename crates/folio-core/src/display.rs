//! Display wrappers for run results.
//!
//! Formatting lives here rather than on the data types themselves so the
//! same data can be rendered differently per context (summary block vs.
//! table preview) while the models stay presentation-free.

use std::fmt;

use crate::{report::ReportSummary, table::DataTable};

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Report Run")?;
        writeln!(f)?;
        writeln!(f, "- SQL files discovered: {}", self.sql_files_found)?;
        writeln!(f, "- Sorting query rows: {}", self.sorting_rows)?;
        writeln!(f, "- Group by query rows: {}", self.group_by_rows)?;
        writeln!(f, "- Aggregation query rows: {}", self.aggregation_rows)?;
        match &self.chart_file {
            Some(path) => writeln!(f, "- Scatter chart: {}", path.display())?,
            None => writeln!(f, "- Scatter chart: skipped (expected columns missing)")?,
        }
        writeln!(f)?;
        writeln!(
            f,
            "## authors_books preview ({} rows)",
            self.preview.row_count()
        )?;
        writeln!(f)?;
        write!(f, "{}", TablePreview::new(&self.preview, 20))
    }
}

/// Wrapper type for displaying the first rows of a table as aligned
/// columns.
pub struct TablePreview<'a> {
    table: &'a DataTable,
    limit: usize,
}

impl<'a> TablePreview<'a> {
    /// Create a preview showing at most `limit` rows.
    pub fn new(table: &'a DataTable, limit: usize) -> Self {
        Self { table, limit }
    }
}

impl fmt::Display for TablePreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table;
        if table.column_count() == 0 {
            return writeln!(f, "(no columns)");
        }

        let rendered: Vec<Vec<String>> = table
            .rows()
            .iter()
            .take(self.limit)
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();

        let mut widths: Vec<usize> = table.columns().iter().map(|c| c.len()).collect();
        for row in &rendered {
            for (idx, cell) in row.iter().enumerate() {
                widths[idx] = widths[idx].max(cell.len());
            }
        }

        for (idx, column) in table.columns().iter().enumerate() {
            if idx > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{column:<width$}", width = widths[idx])?;
        }
        writeln!(f)?;

        for row in &rendered {
            for (idx, cell) in row.iter().enumerate() {
                if idx > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{cell:<width$}", width = widths[idx])?;
            }
            writeln!(f)?;
        }

        if table.row_count() > self.limit {
            writeln!(f, "... ({} more rows)", table.row_count() - self.limit)?;
        }
        Ok(())
    }
}
