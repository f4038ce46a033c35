use log::{debug, info, warn};
use worldclock_proto::{
    ports::preferences::PreferenceError,
    theme::{THEME_KEY, ThemeMode}
};

use crate::session::Session;

/// Active theme plus the checked state of the toggle control mirroring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    mode:           ThemeMode,
    toggle_checked: bool
}

impl ThemeState {
    /// Resolves the startup theme and applies it.
    ///
    /// The persisted value wins; without one (or with an empty one) the
    /// platform color scheme decides. The resolved value is written back to
    /// the store like any other change.
    pub fn initialize(session: &Session) -> Self {
        let stored = match session.preferences().get(THEME_KEY) {
            Ok(value) => value.filter(|value| !value.is_empty()),
            Err(err) => {
                warn!("Failed to read theme preference: {err}");
                None
            }
        };

        let is_dark = match stored {
            Some(value) => {
                debug!("Using persisted theme {value:?}");
                ThemeMode::from_stored(&value).is_dark()
            }
            None => {
                let prefers_dark = session.color_scheme().prefers_dark();
                debug!("No persisted theme, platform prefers dark: {prefers_dark}");
                prefers_dark
            }
        };

        let mut state = Self {
            mode:           ThemeMode::default(),
            toggle_checked: false
        };

        if let Err(err) = state.set_theme(session, is_dark) {
            warn!("Failed to persist theme preference: {err}");
        }

        state
    }

    /// Applies the theme, syncs the toggle and persists the choice.
    ///
    /// The in-memory state is updated even when persisting fails.
    pub fn set_theme(&mut self, session: &Session, is_dark: bool) -> Result<(), PreferenceError> {
        self.mode = ThemeMode::from_dark(is_dark);
        self.toggle_checked = is_dark;
        info!("Theme set to {}", self.mode);

        session.preferences().set(THEME_KEY, self.mode.as_str())
    }

    /// Handles a user change of the toggle control.
    pub fn on_toggle_changed(
        &mut self,
        session: &Session,
        checked: bool
    ) -> Result<(), PreferenceError> {
        self.set_theme(session, checked)
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn toggle_checked(&self) -> bool {
        self.toggle_checked
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::tempdir;
    use worldclock_proto::config::Config;

    use super::*;
    use crate::{
        preferences::{FilePreferenceStore, MemoryPreferenceStore},
        test_utils::{FailingPreferenceStore, session_with}
    };

    #[test]
    fn falls_back_to_platform_preference() {
        let session = session_with(MemoryPreferenceStore::new(), true);
        let state = ThemeState::initialize(&session);

        assert_eq!(state.mode(), ThemeMode::Dark);
        assert!(state.toggle_checked());
        assert_eq!(
            session.preferences().get(THEME_KEY).expect("get").as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn persisted_value_wins_over_platform() {
        let session = session_with(MemoryPreferenceStore::with_entries([(THEME_KEY, "light")]), true);
        let state = ThemeState::initialize(&session);

        assert_eq!(state.mode(), ThemeMode::Light);
        assert!(!state.toggle_checked());
    }

    #[test]
    fn empty_persisted_value_is_ignored() {
        let session = session_with(MemoryPreferenceStore::with_entries([(THEME_KEY, "")]), true);

        assert!(ThemeState::initialize(&session).is_dark());
    }

    #[test]
    fn unknown_persisted_value_resolves_to_light() {
        let session = session_with(MemoryPreferenceStore::with_entries([(THEME_KEY, "sepia")]), true);

        assert_eq!(ThemeState::initialize(&session).mode(), ThemeMode::Light);
    }

    #[test]
    fn toggle_updates_mode_and_store() {
        let session = session_with(MemoryPreferenceStore::new(), false);
        let mut state = ThemeState::initialize(&session);

        state.on_toggle_changed(&session, true).expect("toggle on");
        assert!(state.is_dark());
        assert!(state.toggle_checked());
        assert_eq!(
            session.preferences().get(THEME_KEY).expect("get").as_deref(),
            Some("dark")
        );

        state.on_toggle_changed(&session, false).expect("toggle off");
        assert_eq!(state.mode(), ThemeMode::Light);
        assert_eq!(
            session.preferences().get(THEME_KEY).expect("get").as_deref(),
            Some("light")
        );
    }

    #[test]
    fn write_failure_still_applies_theme() {
        let session = session_with(FailingPreferenceStore, false);
        let mut state = ThemeState::initialize(&session);

        let err = state.set_theme(&session, true).expect_err("write fails");
        assert!(matches!(err, PreferenceError::Poisoned));
        assert!(state.is_dark());
        assert!(state.toggle_checked());
    }

    #[test]
    fn dark_choice_survives_reload() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("prefs.toml");

        let first = Session::init(
            Config::default(),
            Arc::new(FilePreferenceStore::open(&path).expect("store")),
            Arc::new(crate::platform::FixedColorScheme(false))
        );
        let mut state = ThemeState::initialize(&first);
        assert_eq!(state.mode(), ThemeMode::Light);
        state.set_theme(&first, true).expect("set dark");
        first.teardown();

        let reloaded = Session::init(
            Config::default(),
            Arc::new(FilePreferenceStore::open(&path).expect("reopen")),
            Arc::new(crate::platform::FixedColorScheme(false))
        );
        assert_eq!(ThemeState::initialize(&reloaded).mode(), ThemeMode::Dark);
    }
}
