use std::sync::Arc;

use worldclock_proto::{
    config::Config,
    ports::preferences::{PreferenceError, PreferenceStore}
};

use crate::{platform::FixedColorScheme, session::Session};

/// Store whose every operation fails, for exercising degraded paths.
#[derive(Debug, Default)]
pub struct FailingPreferenceStore;

impl PreferenceStore for FailingPreferenceStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
        Err(PreferenceError::Poisoned)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Err(PreferenceError::Poisoned)
    }
}

/// Session over the default config with the given store and platform answer.
pub fn session_with(store: impl PreferenceStore + 'static, prefers_dark: bool) -> Session {
    Session::init(
        Config::default(),
        Arc::new(store),
        Arc::new(FixedColorScheme(prefers_dark))
    )
}
