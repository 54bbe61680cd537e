//! Persistence sinks for frequency tables.
//!
//! A sink stores `(category, count)` pairs keyed by category text. Saving the
//! same category again overwrites its count; categories absent from a save
//! keep their stored counts. Creating the backing store is idempotent, so a
//! sink can be opened unconditionally before every save.
//!
//! Sinks never retry. A failure is returned to the caller, and statistics
//! computed before the save are unaffected.
//!
//! # Sinks
//!
//! - [`sqlite::SqliteSink`]: a `color_freq` table in a SQLite database
//! - [`json::JsonFileSink`]: a JSON document on disk

use colorstat_stats::frequency::FrequencyTable;

pub use self::error::{BackendError, StorageError};

pub mod error;
pub mod json;
pub mod sqlite;

/// A destination for frequency tables.
pub trait FrequencySink {
    /// Stores every entry of `table`, overwriting existing counts per category.
    fn upsert(&mut self, table: &FrequencyTable) -> Result<(), StorageError>;
}
