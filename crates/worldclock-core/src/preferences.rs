use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex
};

use log::{debug, warn};
use worldclock_proto::ports::preferences::{PreferenceError, PreferenceStore};

type Entries = BTreeMap<String, String>;

/// Key-value preferences persisted as a flat TOML table.
///
/// The file is read once when the store is opened and rewritten on every
/// [`PreferenceStore::set`]. A file that does not decode as a string table is
/// ignored, so a corrupted file never prevents startup.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path:    PathBuf,
    entries: Mutex<Entries>
}

impl FilePreferenceStore {
    /// Opens the store backed by `path`. A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::Read`] when the file exists but cannot be
    /// read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(content) => decode(&path, &content).unwrap_or_else(|err| {
                warn!("{err}; starting with empty preferences");
                Entries::new()
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No preference file at {path:?} yet");
                Entries::new()
            }
            Err(source) => {
                return Err(PreferenceError::Read {
                    path,
                    source
                });
            }
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries)
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &Entries) -> Result<(), PreferenceError> {
        let encoded = toml::to_string(entries).map_err(|err| PreferenceError::Encode {
            message: err.to_string()
        })?;

        let write_error = |source| PreferenceError::Write {
            path: self.path.clone(),
            source
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        let staging = self.path.with_extension("toml.tmp");
        fs::write(&staging, encoded).map_err(write_error)?;
        fs::rename(&staging, &self.path).map_err(write_error)?;
        debug!("Persisted preferences to {:?}", self.path);

        Ok(())
    }
}

fn decode(path: &Path, content: &str) -> Result<Entries, PreferenceError> {
    toml::from_str(content).map_err(|err| PreferenceError::Parse {
        path:    path.to_path_buf(),
        message: err.to_string()
    })
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let entries = self.entries.lock().map_err(|_| PreferenceError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut entries = self.entries.lock().map_err(|_| PreferenceError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries)
    }
}

/// Preferences kept only for the lifetime of the process.
///
/// Used when the preference file cannot be opened, so the theme toggle keeps
/// working for the current session.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<Entries>
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect()
            )
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let entries = self.entries.lock().map_err(|_| PreferenceError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut entries = self.entries.lock().map_err(|_| PreferenceError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
