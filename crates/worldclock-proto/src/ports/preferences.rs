use std::{fmt::Debug, io, path::PathBuf};

/// Error type returned by [`PreferenceStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    /// The backing storage could not be read.
    #[error("failed to read preferences at {path:?}: {source}")]
    Read {
        /// Location of the backing file.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
    /// The backing storage held content that is not a key-value table.
    #[error("failed to parse preferences at {path:?}: {message}")]
    Parse {
        /// Location of the backing file.
        path: PathBuf,
        /// Decoder diagnostic.
        message: String,
    },
    /// Persisting a value failed.
    #[error("failed to write preferences at {path:?}: {source}")]
    Write {
        /// Location of the backing file.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
    /// Encoding the key-value table failed.
    #[error("failed to encode preferences: {message}")]
    Encode {
        /// Encoder diagnostic.
        message: String,
    },
    /// The store's internal lock was poisoned.
    #[error("preference store lock poisoned")]
    Poisoned,
}

/// String key-value storage persisted across sessions.
pub trait PreferenceStore: Send + Sync + Debug {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Stores `value` under `key`, replacing a previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Platform-reported color scheme preference.
pub trait ColorSchemeProbe: Send + Sync + Debug {
    /// `true` when the platform prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;
}
