use std::fs;
use std::path::{Path, PathBuf};

use folio_core::Database;
use tempfile::TempDir;

/// Schema and rows every test database starts from. The report queries
/// join these two tables into `authors_books`.
pub const SEED_SQL: &str = "
CREATE TABLE authors (id INTEGER PRIMARY KEY, name TEXT NOT NULL, birth_year INTEGER NOT NULL);
CREATE TABLE books (id INTEGER PRIMARY KEY, author_id INTEGER NOT NULL REFERENCES authors(id), title TEXT NOT NULL, year_published INTEGER NOT NULL);
INSERT INTO authors VALUES (1, 'William Golding', 1911);
INSERT INTO authors VALUES (2, 'Toni Morrison', 1931);
INSERT INTO authors VALUES (3, 'Ian McEwan', 1948);
INSERT INTO books VALUES (1, 1, 'Lord of the Flies', 1954);
INSERT INTO books VALUES (2, 2, 'Song of Solomon', 1977);
INSERT INTO books VALUES (3, 2, 'Beloved', 1987);
INSERT INTO books VALUES (4, 3, 'Atonement', 2001);
";

/// Writes a SQL file into `dir` and returns its path.
pub fn write_sql(dir: &Path, name: &str, sql: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, sql).expect("Failed to write SQL file");
    path
}

/// Helper function to create a seeded test database inside a temp dir.
pub fn create_seeded_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let mut db = Database::open(&db_path).expect("Failed to open test database");

    let seed = write_sql(temp_dir.path(), "seed.sql", SEED_SQL);
    db.execute_script_file(&seed).expect("Failed to seed database");

    (temp_dir, db)
}
