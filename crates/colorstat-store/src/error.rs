use std::io;

/// Failure reported by a storage backend.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum BackendError {
    #[display("sqlite: {_0}")]
    Sqlite(rusqlite::Error),
    #[display("io: {_0}")]
    Io(io::Error),
    #[display("json: {_0}")]
    Json(serde_json::Error),
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum StorageError {
    /// The store could not be opened or created.
    #[display("storage unavailable at {location}")]
    Unavailable {
        location: String,
        source: BackendError,
    },
    /// The store was opened but writing the frequencies failed.
    #[display("failed to write frequencies to {location}")]
    Write {
        location: String,
        source: BackendError,
    },
    /// Previously stored data could not be decoded.
    #[display("stored frequencies at {location} are unreadable")]
    Corrupt {
        location: String,
        source: BackendError,
    },
}

impl StorageError {
    pub(crate) fn unavailable(location: &str, source: impl Into<BackendError>) -> Self {
        Self::Unavailable {
            location: location.to_owned(),
            source: source.into(),
        }
    }

    pub(crate) fn write(location: &str, source: impl Into<BackendError>) -> Self {
        Self::Write {
            location: location.to_owned(),
            source: source.into(),
        }
    }

    pub(crate) fn corrupt(location: &str, source: impl Into<BackendError>) -> Self {
        Self::Corrupt {
            location: location.to_owned(),
            source: source.into(),
        }
    }
}
