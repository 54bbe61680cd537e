use std::path::Path;

use colorstat_stats::frequency::FrequencyTable;
use rusqlite::{Connection, ErrorCode, params};

use crate::{FrequencySink, StorageError};

const CREATE_TABLE: &str = "
CREATE TABLE IF NOT EXISTS color_freq (
    color TEXT PRIMARY KEY,
    freq INTEGER NOT NULL
);";

const UPSERT: &str = "
INSERT INTO color_freq (color, freq)
VALUES (?1, ?2)
ON CONFLICT (color) DO UPDATE SET freq = excluded.freq;";

const SELECT_ALL: &str = "SELECT color, freq FROM color_freq ORDER BY color";

/// Stores frequencies in the `color_freq` table of a SQLite database.
///
/// # Examples
///
/// ```
/// use colorstat_stats::{category::Category, frequency::FrequencyTable};
/// use colorstat_store::{FrequencySink as _, sqlite::SqliteSink};
///
/// let table = ["RED", "BLUE", "BLUE"]
///     .into_iter()
///     .map(Category::normalize)
///     .collect::<FrequencyTable>();
/// let mut sink = SqliteSink::open_in_memory().unwrap();
/// sink.upsert(&table).unwrap();
/// assert_eq!(sink.load().unwrap(), [("BLUE".to_owned(), 2), ("RED".to_owned(), 1)]);
/// ```
#[derive(Debug)]
pub struct SqliteSink {
    conn: Connection,
    location: String,
}

impl SqliteSink {
    /// Opens (or creates) the database at `path` and ensures the table exists.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let location = path.display().to_string();
        let conn =
            Connection::open(path).map_err(|e| StorageError::unavailable(&location, e))?;
        Self::initialize(conn, location)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let location = ":memory:".to_owned();
        let conn =
            Connection::open_in_memory().map_err(|e| StorageError::unavailable(&location, e))?;
        Self::initialize(conn, location)
    }

    fn initialize(conn: Connection, location: String) -> Result<Self, StorageError> {
        conn.execute_batch(CREATE_TABLE)
            .map_err(|e| StorageError::unavailable(&location, e))?;
        tracing::debug!(%location, "sqlite store ready");
        Ok(Self { conn, location })
    }

    /// Reads every stored `(category, count)` pair, ordered by category.
    pub fn load(&self) -> Result<Vec<(String, u64)>, StorageError> {
        let read = || -> rusqlite::Result<Vec<(String, u64)>> {
            let mut stmt = self.conn.prepare(SELECT_ALL)?;
            let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
            rows.collect()
        };
        read().map_err(|e| read_error(&self.location, e))
    }
}

// Lock contention and open/permission failures mean the database cannot be
// reached right now; the stored data itself may be fine.
fn is_unreachable(e: &rusqlite::Error) -> bool {
    matches!(
        e.sqlite_error_code(),
        Some(
            ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::CannotOpen
                | ErrorCode::PermissionDenied
        )
    )
}

fn read_error(location: &str, e: rusqlite::Error) -> StorageError {
    if is_unreachable(&e) {
        StorageError::unavailable(location, e)
    } else {
        StorageError::corrupt(location, e)
    }
}

fn write_error(location: &str, e: rusqlite::Error) -> StorageError {
    if is_unreachable(&e) {
        StorageError::unavailable(location, e)
    } else {
        StorageError::write(location, e)
    }
}

impl FrequencySink for SqliteSink {
    fn upsert(&mut self, table: &FrequencyTable) -> Result<(), StorageError> {
        let location = &self.location;
        let tx = self
            .conn
            .transaction()
            .map_err(|e| write_error(location, e))?;
        {
            let mut stmt = tx
                .prepare_cached(UPSERT)
                .map_err(|e| write_error(location, e))?;
            for (category, count) in table.iter() {
                tracing::trace!(%category, count, "upsert");
                stmt.execute(params![category.as_str(), count])
                    .map_err(|e| write_error(location, e))?;
            }
        }
        tx.commit().map_err(|e| write_error(location, e))?;
        tracing::info!(%location, entries = table.len(), "saved frequencies to sqlite");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use colorstat_stats::category::Category;
    use rusqlite::ffi;

    use super::*;

    fn table(labels: &[&str]) -> FrequencyTable {
        labels.iter().copied().map(Category::normalize).collect()
    }

    #[test]
    fn test_empty_store() {
        let sink = SqliteSink::open_in_memory().unwrap();
        assert!(sink.load().unwrap().is_empty());
    }

    #[test]
    fn test_upsert_overwrites_and_keeps_others() {
        let mut sink = SqliteSink::open_in_memory().unwrap();
        sink.upsert(&table(&["RED", "BLUE", "BLUE"])).unwrap();
        sink.upsert(&table(&["RED", "RED", "RED", "GREEN"])).unwrap();

        let stored = sink.load().unwrap();
        assert_eq!(
            stored,
            [
                ("BLUE".to_owned(), 2),
                ("GREEN".to_owned(), 1),
                ("RED".to_owned(), 3),
            ]
        );
    }

    #[test]
    fn test_reopen_file_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.sqlite");

        let mut sink = SqliteSink::open(&path).unwrap();
        sink.upsert(&table(&["PINK"])).unwrap();
        drop(sink);

        let sink = SqliteSink::open(&path).unwrap();
        assert_eq!(sink.load().unwrap(), [("PINK".to_owned(), 1)]);
    }

    #[test]
    fn test_unreachable_path_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("colors.sqlite");
        let err = SqliteSink::open(&path).unwrap_err();
        assert!(err.is_unavailable());
    }

    fn sqlite_failure(code: i32) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error::new(code), None)
    }

    #[test]
    fn test_lock_failures_are_unavailable() {
        for code in [ffi::SQLITE_BUSY, ffi::SQLITE_LOCKED, ffi::SQLITE_CANTOPEN] {
            assert!(read_error("db", sqlite_failure(code)).is_unavailable());
            assert!(write_error("db", sqlite_failure(code)).is_unavailable());
        }
        assert!(read_error("db", sqlite_failure(ffi::SQLITE_CORRUPT)).is_corrupt());
        assert!(write_error("db", sqlite_failure(ffi::SQLITE_FULL)).is_write());
    }

    #[test]
    fn test_load_while_locked_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.sqlite");

        let mut sink = SqliteSink::open(&path).unwrap();
        sink.upsert(&table(&["RED"])).unwrap();
        sink.conn.busy_timeout(Duration::ZERO).unwrap();

        let holder = Connection::open(&path).unwrap();
        holder.execute_batch("BEGIN EXCLUSIVE").unwrap();

        let err = sink.load().unwrap_err();
        assert!(err.is_unavailable());
        let err = sink.upsert(&table(&["BLUE"])).unwrap_err();
        assert!(err.is_unavailable());

        holder.execute_batch("ROLLBACK").unwrap();
        assert_eq!(sink.load().unwrap(), [("RED".to_owned(), 1)]);
    }
}
