/// CLI settings
use pulpit_catalog::CatalogConfig;
use pulpit_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default settings file, looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "pulpit.toml";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid playback settings: {0}")]
    Playback(#[from] pulpit_playback::ConfigError),

    #[error("Invalid catalog settings: {0}")]
    Catalog(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub playback: PlaybackConfig,
}

impl Settings {
    /// Load settings from file and environment
    ///
    /// `path` must exist when given; otherwise `pulpit.toml` is used if
    /// present. Environment variables prefixed with `PULPIT_` override the
    /// file, with `__` between section and key
    /// (`PULPIT_CATALOG__BASE_URL`).
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = config::Config::builder();

        builder = match path {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder.add_source(
                config::File::from(Path::new(DEFAULT_SETTINGS_FILE)).required(false),
            ),
        };

        builder = builder.add_source(
            config::Environment::with_prefix("PULPIT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings: Self = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.playback.validate()?;

        if self.catalog.base_url.trim().is_empty() {
            return Err(SettingsError::Catalog(
                "catalog.base_url is required (set PULPIT_CATALOG__BASE_URL)".to_string(),
            ));
        }

        if self.catalog.timeout_secs == 0 {
            return Err(SettingsError::Catalog(
                "catalog.timeout_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.playback.skip_step_secs, 10.0);
        assert_eq!(settings.catalog.attribution, "Apostle Joseph Ibrahim");
    }

    #[test]
    fn loads_partial_file_over_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[catalog]
base_url = "http://localhost:2000"

[playback]
skip_step_secs = 15.0
"#
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();

        assert_eq!(settings.catalog.base_url, "http://localhost:2000");
        assert_eq!(settings.catalog.timeout_secs, 30);
        assert_eq!(settings.playback.skip_step_secs, 15.0);
        assert_eq!(settings.playback.volume_step, 0.1);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/pulpit.toml")));
        assert!(matches!(result, Err(SettingsError::Load(_))));
    }

    #[test]
    fn rejects_invalid_values() {
        let mut settings = Settings::default();
        settings.playback.skip_step_secs = 0.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Playback(_))
        ));

        let mut settings = Settings::default();
        settings.catalog.timeout_secs = 0;
        assert!(matches!(settings.validate(), Err(SettingsError::Catalog(_))));
    }
}
