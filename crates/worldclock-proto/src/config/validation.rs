use super::Config;

/// Errors returned when validating a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// The clock grid must hold at least one card per row.
    ZeroColumns,

    /// The preference file path was set but empty.
    EmptyPreferencesPath
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroColumns => write!(f, "layout.columns must be at least 1"),
            Self::EmptyPreferencesPath => {
                write!(f, "preferences_path must not be empty when set")
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError`] if the layout has no columns or an
    /// explicit preference path is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldclock_proto::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.layout.columns == 0 {
            return Err(ConfigValidationError::ZeroColumns);
        }

        if let Some(path) = &self.preferences_path
            && path.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyPreferencesPath);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;

    #[test]
    fn validate_accepts_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_columns() {
        let config = Config {
            layout: LayoutConfig {
                columns: 0
            },
            ..Default::default()
        };

        let error = config.validate().expect_err("expected zero columns error");
        assert_eq!(error, ConfigValidationError::ZeroColumns);
    }

    #[test]
    fn validate_rejects_blank_preferences_path() {
        let config = Config {
            preferences_path: Some("   ".to_owned()),
            ..Default::default()
        };

        let error = config.validate().expect_err("expected empty path error");
        assert_eq!(error, ConfigValidationError::EmptyPreferencesPath);
    }
}
