use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use colorstat_stats::frequency::FrequencyTable;
use serde::{Deserialize, Serialize};

use tempfile::NamedTempFile;

use crate::{BackendError, FrequencySink, StorageError};

#[derive(Debug, Clone, Deserialize, Serialize)]
struct StoredFrequencies {
    updated_at: DateTime<Utc>,
    frequencies: BTreeMap<String, u64>,
}

/// Stores frequencies in a JSON document.
///
/// The document looks like
/// `{ "updated_at": "<RFC 3339>", "frequencies": { "BLUE": 31, ... } }`.
/// Each upsert reads the current document, overwrites the counts it carries
/// and replaces the file. The new document is written to a temporary file in
/// the same directory and renamed over the old one, so a failed write leaves
/// the previous document in place.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
    location: String,
}

impl JsonFileSink {
    /// Prepares a sink writing to `path`, creating its parent directory.
    pub fn open<P>(path: P) -> Result<Self, StorageError>
    where
        P: Into<PathBuf>,
    {
        let path = path.into();
        let location = path.display().to_string();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::unavailable(&location, e))?;
        }
        Ok(Self { path, location })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored counts. A missing file reads as empty.
    pub fn load(&self) -> Result<BTreeMap<String, u64>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StorageError::unavailable(&self.location, e)),
        };
        let stored: StoredFrequencies = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| StorageError::corrupt(&self.location, e))?;
        Ok(stored.frequencies)
    }

    fn store(&self, frequencies: BTreeMap<String, u64>) -> Result<(), StorageError> {
        let document = StoredFrequencies {
            updated_at: Utc::now(),
            frequencies,
        };
        self.replace_with(|writer| {
            serde_json::to_writer_pretty(&mut *writer, &document)?;
            writeln!(writer)?;
            Ok(())
        })
    }

    fn replace_with<F>(&self, write: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BufWriter<File>) -> Result<(), BackendError>,
    {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = NamedTempFile::new_in(dir)
            .map_err(|e| StorageError::unavailable(&self.location, e))?;
        let (file, temp_path) = temp.into_parts();
        let mut writer = BufWriter::new(file);
        write(&mut writer).map_err(|e| StorageError::write(&self.location, e))?;
        let file = writer
            .into_inner()
            .map_err(|e| StorageError::write(&self.location, e.into_error()))?;
        file.sync_all()
            .map_err(|e| StorageError::write(&self.location, e))?;
        temp_path
            .persist(&self.path)
            .map_err(|e| StorageError::write(&self.location, e.error))?;
        Ok(())
    }
}

impl FrequencySink for JsonFileSink {
    fn upsert(&mut self, table: &FrequencyTable) -> Result<(), StorageError> {
        let mut frequencies = self.load()?;
        for (category, count) in table.iter() {
            frequencies.insert(category.to_string(), count);
        }
        self.store(frequencies)?;
        tracing::info!(location = %self.location, entries = table.len(), "saved frequencies to json");
        Ok(())
    }
}
