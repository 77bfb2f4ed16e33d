//! Multi-statement SQL script execution.

use std::fs;
use std::path::Path;

use log::{error, info};

use crate::error::{DatabaseResultExt, ReportError, Result};

impl super::Database {
    /// Executes every statement in a SQL script file, without capturing
    /// results.
    ///
    /// The whole script runs inside one transaction: it commits only when
    /// every statement succeeds, and a failing statement rolls back
    /// everything the script already did.
    pub fn execute_script_file(&mut self, path: &Path) -> Result<()> {
        let name = super::file_name(path);
        match self.run_script(path) {
            Ok(()) => {
                info!("Executed SQL file: {name}");
                Ok(())
            }
            Err(e) => {
                error!("Failed to execute {name}: {e}");
                Err(e)
            }
        }
    }

    fn run_script(&mut self, path: &Path) -> Result<()> {
        let script = fs::read_to_string(path).map_err(|e| ReportError::sql_file(path, e))?;

        // Transaction rolls back on drop unless committed.
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        tx.execute_batch(&script)
            .db_context("Failed to execute SQL script")?;
        tx.commit().db_context("Failed to commit transaction")
    }
}
