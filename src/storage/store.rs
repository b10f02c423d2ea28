use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::Result;

/// The six entity tables. `IF NOT EXISTS` keeps bootstrap idempotent, so
/// the schema runs on every open.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS organizations (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    code        TEXT NOT NULL UNIQUE,
    name        TEXT NOT NULL,
    rank        INTEGER NOT NULL UNIQUE,
    created     TEXT NOT NULL,
    updated     TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS meetings (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    number          INTEGER NOT NULL,
    date            TEXT NOT NULL,
    kind            TEXT NOT NULL,
    venue           TEXT,
    format          TEXT NOT NULL,
    agenda          TEXT,
    minutes         TEXT,
    expected_count  INTEGER NOT NULL DEFAULT 0,
    present_count   INTEGER NOT NULL DEFAULT 0,
    attendance_rate REAL NOT NULL DEFAULT 0,
    quorum_reached  INTEGER NOT NULL DEFAULT 0,
    created         TEXT NOT NULL,
    updated         TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS attendance (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    meeting_id      INTEGER NOT NULL REFERENCES meetings(id) ON DELETE CASCADE,
    organization_id INTEGER NOT NULL REFERENCES organizations(id),
    present         INTEGER NOT NULL DEFAULT 0,
    representative  TEXT NOT NULL,
    justification   TEXT,
    created         TEXT NOT NULL,
    updated         TEXT NOT NULL,
    UNIQUE (meeting_id, organization_id)
);

CREATE INDEX IF NOT EXISTS idx_attendance_meeting ON attendance(meeting_id);

CREATE TABLE IF NOT EXISTS actions (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    title            TEXT NOT NULL,
    description      TEXT,
    organization_id  INTEGER NOT NULL REFERENCES organizations(id),
    start_date       TEXT NOT NULL,
    target_date      TEXT NOT NULL,
    completed_date   TEXT,
    status           TEXT NOT NULL,
    progress         INTEGER NOT NULL DEFAULT 0,
    priority         TEXT NOT NULL,
    decree_reference TEXT,
    notes            TEXT,
    created          TEXT NOT NULL,
    updated          TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS trainings (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    title           TEXT NOT NULL,
    description     TEXT,
    date            TEXT NOT NULL,
    venue           TEXT,
    format          TEXT NOT NULL,
    instructor      TEXT,
    duration_hours  INTEGER,
    expected        INTEGER NOT NULL DEFAULT 0,
    confirmed       INTEGER NOT NULL DEFAULT 0,
    actual          INTEGER NOT NULL DEFAULT 0,
    attendance_rate REAL NOT NULL DEFAULT 0,
    status          TEXT NOT NULL,
    notes           TEXT,
    created         TEXT NOT NULL,
    updated         TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS training_participants (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    training_id     INTEGER NOT NULL REFERENCES trainings(id) ON DELETE CASCADE,
    organization_id INTEGER NOT NULL REFERENCES organizations(id),
    participants    INTEGER NOT NULL DEFAULT 0,
    created         TEXT NOT NULL,
    updated         TEXT NOT NULL,
    UNIQUE (training_id, organization_id)
);

CREATE TABLE IF NOT EXISTS compliance_items (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    category        TEXT NOT NULL,
    item            TEXT NOT NULL,
    description     TEXT,
    progress        INTEGER NOT NULL DEFAULT 0,
    status          TEXT NOT NULL,
    organization_id INTEGER REFERENCES organizations(id),
    start_date      TEXT,
    target_date     TEXT,
    completed_date  TEXT,
    notes           TEXT,
    created         TEXT NOT NULL,
    updated         TEXT NOT NULL
);
";

/// Owns the SQLite connection. One store per CLI invocation or API
/// request; nothing here is shared across threads.
pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    /// Open (or create) the database at `path` and apply the schema.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        // WAL gives concurrent readers a consistent view while one writer
        // holds the lock.
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Self::bootstrap(&conn)?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(&conn)?;
        Ok(Self { conn, path: None })
    }

    fn bootstrap(conn: &Connection) -> Result<()> {
        conn.execute_batch(SCHEMA)?;
        // Meeting deletes cascade into attendance through the FK.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Execute a closure within a SQLite transaction.
    /// Commits on Ok, rolls back on Err.
    pub fn with_transaction<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>,
    {
        self.conn.execute_batch("BEGIN IMMEDIATE")?;
        match f(self) {
            Ok(val) => {
                self.conn.execute_batch("COMMIT")?;
                Ok(val)
            }
            Err(e) => {
                let _ = self.conn.execute_batch("ROLLBACK");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_is_idempotent() {
        let store = Store::open_in_memory().unwrap();
        Store::bootstrap(store.conn()).unwrap();
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/committee.db");
        let store = Store::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), Some(path.as_path()));
    }

    #[test]
    fn test_transaction_rolls_back_on_error() {
        let store = Store::open_in_memory().unwrap();
        let now = chrono::Utc::now().to_rfc3339();
        let result: Result<()> = store.with_transaction(|s| {
            s.conn().execute(
                "INSERT INTO organizations (code, name, rank, created, updated)
                 VALUES ('SED', 'Education', 1, ?1, ?1)",
                [&now],
            )?;
            Err(crate::error::PlenumError::Validation("boom".to_string()))
        });
        assert!(result.is_err());

        let count: i64 = store
            .conn()
            .query_row("SELECT COUNT(*) FROM organizations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
