use log::debug;
use worldclock_proto::ports::preferences::ColorSchemeProbe;

/// Asks the desktop environment for its preferred color scheme.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemColorScheme;

impl ColorSchemeProbe for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        let mode = dark_light::detect();
        debug!("Platform color scheme: {mode:?}");

        matches!(mode, dark_light::Mode::Dark)
    }
}

/// Color scheme answer fixed at construction, used for `--prefer-dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColorScheme(pub bool);

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}
