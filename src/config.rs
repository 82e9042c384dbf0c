use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use validator::Validate;

use crate::error::{Result, WeatherError};
use crate::utils::constants::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_CSV_FILE, DEFAULT_DB_FILE,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_WAIT_SECS, ENV_PREFIX, VIEW_MODE,
};

/// Settings shared by the collector and the store.
///
/// Built from defaults, an optional TOML file and `JMA_*` environment
/// variables, in that order of precedence.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Settings {
    #[validate(length(min = 1))]
    pub base_url: String,

    #[validate(length(min = 1))]
    pub view_mode: String,

    pub csv_path: PathBuf,

    pub database_path: PathBuf,

    #[validate(range(min = 0.0, max = 3600.0))]
    pub wait_time_secs: f64,

    #[validate(range(min = 0.001, max = 600.0))]
    pub connect_timeout_secs: f64,

    /// Deadline for the whole request, body read included
    #[validate(range(min = 0.001, max = 600.0))]
    pub request_timeout_secs: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            view_mode: VIEW_MODE.to_string(),
            csv_path: PathBuf::from(DEFAULT_CSV_FILE),
            database_path: PathBuf::from(DEFAULT_DB_FILE),
            wait_time_secs: DEFAULT_WAIT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Load settings, reading `path` if given and present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }
        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        settings.check()?;
        Ok(settings)
    }

    /// Field checks plus conversion of every duration, which rejects NaN.
    pub fn check(&self) -> Result<()> {
        self.validate()?;
        self.wait_time()?;
        self.connect_timeout()?;
        self.request_timeout()?;
        Ok(())
    }

    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = path.into();
        self
    }

    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    pub fn with_wait_time(mut self, secs: f64) -> Self {
        self.wait_time_secs = secs;
        self
    }

    pub fn wait_time(&self) -> Result<Duration> {
        seconds("wait_time_secs", self.wait_time_secs)
    }

    pub fn connect_timeout(&self) -> Result<Duration> {
        seconds("connect_timeout_secs", self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Result<Duration> {
        seconds("request_timeout_secs", self.request_timeout_secs)
    }
}

fn seconds(name: &str, value: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(value)
        .map_err(|e| WeatherError::Validation(format!("{} = {}: {}", name, value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_defaults() -> Result<()> {
        let settings = Settings::default();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.view_mode, "p1");
        assert_eq!(settings.wait_time()?, Duration::from_millis(500));
        assert_eq!(settings.connect_timeout()?, Duration::from_secs(1));
        assert_eq!(settings.request_timeout()?, Duration::from_secs(1));
        assert!(settings.check().is_ok());
        Ok(())
    }

    #[test]
    fn test_load_from_toml_file() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "wait_time_secs = 2.0")?;
        writeln!(file, "database_path = \"custom.sqlite\"")?;

        let settings = Settings::load(Some(file.path()))?;

        assert_eq!(settings.wait_time()?, Duration::from_secs(2));
        assert_eq!(settings.database_path, PathBuf::from("custom.sqlite"));
        assert_eq!(settings.csv_path, PathBuf::from(DEFAULT_CSV_FILE));
        Ok(())
    }

    #[test]
    fn test_negative_wait_time_rejected() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "wait_time_secs = -1.0")?;

        assert!(Settings::load(Some(file.path())).is_err());
        Ok(())
    }

    #[test]
    fn test_non_finite_durations_rejected() -> Result<()> {
        for line in [
            "wait_time_secs = inf",
            "wait_time_secs = nan",
            "connect_timeout_secs = inf",
            "request_timeout_secs = nan",
        ] {
            let mut file = Builder::new().suffix(".toml").tempfile()?;
            writeln!(file, "{}", line)?;

            let err = Settings::load(Some(file.path())).unwrap_err();
            assert_eq!(err.kind(), "ValidationError", "{}", line);
        }
        Ok(())
    }

    #[test]
    fn test_wait_time_conversion_does_not_panic() {
        let settings = Settings::default().with_wait_time(f64::INFINITY);
        assert!(settings.wait_time().is_err());
        assert!(settings.check().is_err());
    }
}
