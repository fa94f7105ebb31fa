//! SQLite database - connection management and schema
//!
//! This file contains:
//! - Database struct definition
//! - Lazy connection management (new, connect)
//! - Schema creation
//!
//! All row operations are in the tables/ subdirectory.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("DATABASE_URL is not defined")]
    MissingDatabaseUrl,

    #[error("database connection has not been established")]
    NotConnected,

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Database wrapper holding the configured location and, once `connect`
/// has succeeded, the open connection.
///
/// The connection is opened lazily and kept for the lifetime of the
/// process. A failed attempt caches nothing, so the next call starts over.
pub struct Database {
    database_url: Option<String>,
    pub(crate) conn: Mutex<Option<Connection>>,
}

impl Database {
    /// Create the database handle without touching the filesystem.
    pub fn new(database_url: Option<String>) -> Self {
        Self {
            database_url,
            conn: Mutex::new(None),
        }
    }

    /// Open the connection and initialize the schema, unless a connection
    /// is already cached. Returns immediately on subsequent calls.
    pub fn connect(&self) -> Result<(), StoreError> {
        let mut guard = self.conn.lock().unwrap();
        if guard.is_some() {
            return Ok(());
        }

        let database_url = self
            .database_url
            .as_deref()
            .ok_or(StoreError::MissingDatabaseUrl)?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = Path::new(database_url).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).ok();
            }
        }

        let conn = Connection::open(database_url)?;
        Self::init(&conn)?;
        *guard = Some(conn);
        log::info!("Database connected at {}", database_url);
        Ok(())
    }

    /// Initialize all database tables
    fn init(conn: &Connection) -> Result<(), rusqlite::Error> {
        // Contact form submissions; created_at is assigned by the store
        conn.execute(
            "CREATE TABLE IF NOT EXISTS contact_messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                message TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn db_at(path: &std::path::Path) -> Database {
        Database::new(Some(path.to_string_lossy().into_owned()))
    }

    #[test]
    fn test_connect_requires_database_url() {
        let db = Database::new(None);
        let err = db.connect().unwrap_err();
        assert!(matches!(err, StoreError::MissingDatabaseUrl));
    }

    #[test]
    fn test_connect_creates_file_and_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("contacts.db");
        let db = db_at(&path);

        db.connect().unwrap();
        assert!(path.exists());

        // Schema is usable right away
        let guard = db.conn.lock().unwrap();
        let count: i64 = guard
            .as_ref()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM contact_messages", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_connect_reuses_cached_connection() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.db");
        let db = db_at(&path);

        db.connect().unwrap();
        assert!(path.exists());

        // Removing the file proves the second call never reopens: a fresh
        // open would recreate it.
        std::fs::remove_file(&path).unwrap();
        db.connect().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_connect_retries_after_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();

        // Parent path is a regular file, so the open fails
        let path = blocker.join("contacts.db");
        let db = db_at(&path);
        assert!(matches!(db.connect().unwrap_err(), StoreError::Sqlite(_)));

        // Once the obstruction is gone the same handle connects fine
        std::fs::remove_file(&blocker).unwrap();
        db.connect().unwrap();
        assert!(path.exists());
    }
}
