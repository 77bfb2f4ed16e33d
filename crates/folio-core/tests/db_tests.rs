mod common;

use common::{create_seeded_db, write_sql};
use folio_core::{Database, ReportError};
use tempfile::TempDir;

#[test]
fn test_open_and_close() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::open(temp_dir.path().join("test.db")).expect("Failed to open database");
    db.close().expect("Failed to close database");
}

#[test]
fn test_execute_script_file_missing() {
    let (temp_dir, mut db) = create_seeded_db();

    let missing = temp_dir.path().join("does_not_exist.sql");
    let err = db
        .execute_script_file(&missing)
        .expect_err("Missing script file should fail");

    assert!(matches!(err, ReportError::SqlFile { .. }));
}

#[test]
fn test_script_rolls_back_on_failure() {
    let (temp_dir, mut db) = create_seeded_db();

    // Insert succeeds, the next statement is garbage. The whole script
    // must leave no trace.
    let script = write_sql(
        temp_dir.path(),
        "broken.sql",
        "INSERT INTO books VALUES (5, 1, 'The Spire', 1964);\nNOT VALID SQL;",
    );
    let err = db
        .execute_script_file(&script)
        .expect_err("Broken script should fail");
    assert!(matches!(err, ReportError::Database { .. }));

    let table = db
        .query_to_table("SELECT * FROM books")
        .expect("Failed to count books");
    assert_eq!(table.row_count(), 4);
}

#[test]
fn test_query_to_table_respects_limit() {
    let (_temp_dir, db) = create_seeded_db();

    let table = db
        .query_to_table("SELECT * FROM books LIMIT 2")
        .expect("Failed to run query");
    assert_eq!(table.row_count(), 2);

    // LIMIT larger than the table returns everything there is
    let table = db
        .query_to_table("SELECT * FROM books LIMIT 20")
        .expect("Failed to run query");
    assert_eq!(table.row_count(), 4);
}

#[test]
fn test_query_columns_come_from_result_set() {
    let (_temp_dir, db) = create_seeded_db();

    let table = db
        .query_to_table("SELECT title AS book_title, year_published FROM books")
        .expect("Failed to run query");

    assert_eq!(table.columns(), ["book_title", "year_published"]);
}

#[test]
fn test_query_file_to_table_is_idempotent() {
    let (temp_dir, db) = create_seeded_db();

    let query = write_sql(
        temp_dir.path(),
        "by_year.sql",
        "SELECT title, year_published FROM books ORDER BY year_published",
    );

    let first = db
        .query_file_to_table(&query)
        .expect("Failed to load table");
    let second = db
        .query_file_to_table(&query)
        .expect("Failed to load table");

    assert_eq!(first.row_count(), second.row_count());
    assert_eq!(first.columns(), second.columns());
}

#[test]
fn test_query_file_to_table_missing_file() {
    let (temp_dir, db) = create_seeded_db();

    let err = db
        .query_file_to_table(&temp_dir.path().join("nope.sql"))
        .expect_err("Missing query file should fail");

    assert!(matches!(err, ReportError::SqlFile { .. }));
}

#[test]
fn test_query_to_table_propagates_sql_errors() {
    let (_temp_dir, db) = create_seeded_db();

    let err = db
        .query_to_table("SELECT * FROM no_such_table")
        .expect_err("Unknown table should fail");

    assert!(matches!(err, ReportError::Database { .. }));
}
