use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use tokio::{runtime::Handle, sync::mpsc, task::JoinHandle};
use worldclock_proto::{
    config::Config,
    ports::preferences::{ColorSchemeProbe, PreferenceStore}
};

use crate::{
    clock::{TICK_INTERVAL, spawn_ticker},
    config::preferences_path,
    preferences::{FilePreferenceStore, MemoryPreferenceStore}
};

/// Process-scoped state shared by the clock and theme concerns.
///
/// Owns the loaded configuration, the preference store, the platform color
/// scheme probe and, when running headless, the single refresh ticker. Create
/// it once with [`Session::init`] or [`Session::open`] and release it with
/// [`Session::teardown`].
#[derive(Debug)]
pub struct Session {
    config:       Arc<Config>,
    preferences:  Arc<dyn PreferenceStore>,
    color_scheme: Arc<dyn ColorSchemeProbe>,
    ticker:       Option<JoinHandle<()>>
}

impl Session {
    pub fn init(
        config: Config,
        preferences: Arc<dyn PreferenceStore>,
        color_scheme: Arc<dyn ColorSchemeProbe>
    ) -> Self {
        Self {
            config: Arc::new(config),
            preferences,
            color_scheme,
            ticker: None
        }
    }

    /// Builds a session backed by the preference file configured in `config`.
    ///
    /// When the file cannot be located or read the session keeps preferences
    /// in memory for this run only.
    pub fn open(config: Config, color_scheme: Arc<dyn ColorSchemeProbe>) -> Self {
        let preferences: Arc<dyn PreferenceStore> = match preferences_path(&config) {
            Ok(path) => match FilePreferenceStore::open(&path) {
                Ok(store) => {
                    info!("Preferences stored at {:?}", store.path());
                    Arc::new(store)
                }
                Err(err) => {
                    warn!("{err}; preferences will not be persisted");
                    Arc::new(MemoryPreferenceStore::new())
                }
            },
            Err(err) => {
                warn!("{err}; preferences will not be persisted");
                Arc::new(MemoryPreferenceStore::new())
            }
        };

        Self::init(config, preferences, color_scheme)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn preferences(&self) -> &dyn PreferenceStore {
        self.preferences.as_ref()
    }

    pub fn color_scheme(&self) -> &dyn ColorSchemeProbe {
        self.color_scheme.as_ref()
    }

    /// Starts the refresh ticker on `handle`, replacing a running one.
    pub fn spawn_ticker(&mut self, handle: &Handle) -> mpsc::Receiver<DateTime<Utc>> {
        if let Some(task) = self.ticker.take() {
            debug!("Replacing running ticker");
            task.abort();
        }

        let (task, receiver) = spawn_ticker(handle, TICK_INTERVAL);
        self.ticker = Some(task);

        receiver
    }

    /// Stops the ticker and releases the session.
    pub fn teardown(mut self) {
        if let Some(task) = self.ticker.take() {
            task.abort();
        }

        info!("Session closed");
    }
}
