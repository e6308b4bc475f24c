//! Runtime settings, layered from built-in defaults, an optional `school.toml`, and `SCHOOL_*`
//! environment variables. Command-line flags are applied on top by the binary.

use crate::export::DEFAULT_EXPORT_PATH;
use crate::models::ValidationMode;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The settings file looked up in the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "school";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Where "View Students" writes the roster.
    pub export_path: PathBuf,
    pub validation: ValidationMode,
    pub log_level: String,
    /// When set, logs go to rolling files in this directory instead of stderr.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

impl Settings {
    /// Loads settings from `path` if given, otherwise from an optional `school.toml` in the
    /// working directory. A `.env` file, if present, is read into the environment first.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        Self::build(file)
    }

    fn build<F>(file: F) -> Result<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("export_path", DEFAULT_EXPORT_PATH)?
            .set_default("validation", "lenient")?
            .set_default("log_level", "warn")?
            .add_source(file)
            .add_source(Environment::with_prefix("SCHOOL"))
            .build()
            .context("failed to load settings")?;

        settings
            .try_deserialize()
            .context("failed to parse settings")
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            validation: ValidationMode::Lenient,
            log_level: "warn".to_string(),
            log_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn settings_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("school.toml");
        fs::write(
            &path,
            "export_path = \"out/roster.csv\"\nvalidation = \"strict\"\n",
        )
        .unwrap();

        let settings = Settings::build(File::from(path.as_path())).unwrap();

        assert_eq!(settings.export_path, PathBuf::from("out/roster.csv"));
        assert_eq!(settings.validation, ValidationMode::Strict);
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.log_dir, None);
    }

    #[test]
    fn missing_optional_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let settings = Settings::build(File::from(path.as_path()).required(false)).unwrap();

        assert_eq!(settings.export_path, PathBuf::from(DEFAULT_EXPORT_PATH));
        assert_eq!(settings.validation, ValidationMode::Lenient);
    }

    #[test]
    fn unknown_validation_mode_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("school.toml");
        fs::write(&path, "validation = \"paranoid\"\n").unwrap();

        assert!(Settings::build(File::from(path.as_path())).is_err());
    }
}
