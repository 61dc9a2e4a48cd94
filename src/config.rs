use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Number of cells along each side of the play grid
    grid_size: u16,

    /// Time between movements of the snake, in milliseconds
    tick_period_ms: u64,
}

impl Config {
    /// Read configuration from the default path, falling back to the default
    /// configuration if the platform reports no configuration directory.
    pub(crate) fn load_default() -> Result<Config, ConfigError> {
        match Config::default_path() {
            Some(path) => Config::load(&path, true),
            None => Ok(Config::default()),
        }
    }

    /// Return the default configuration file path
    fn default_path() -> Option<PathBuf> {
        dirs::config_local_dir().map(|p| p.join("gridsnake").join("config.toml"))
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if a setting has an unusable value.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        let config: Config = toml::from_str(&content)?;
        if !(1..=consts::MAX_TICK_PERIOD_MS).contains(&config.tick_period_ms) {
            return Err(ConfigError::TickPeriodOutOfRange);
        }
        Ok(config)
    }

    pub(crate) fn grid_size(&self) -> u16 {
        self.grid_size
    }

    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            grid_size: consts::GRID_SIZE,
            tick_period_ms: consts::TICK_PERIOD_MS,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("tick-period-ms must be between 1 and {}", consts::MAX_TICK_PERIOD_MS)]
    TickPeriodOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(config.grid_size(), 20);
        assert_eq!(config.tick_period(), Duration::from_millis(200));
    }

    #[test]
    fn test_load_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "grid-size = 12\ntick-period-ms = 125\n").unwrap();
        let config = Config::load(&path, false).unwrap();
        assert_eq!(config.grid_size(), 12);
        assert_eq!(config.tick_period(), Duration::from_millis(125));
    }

    #[test]
    fn test_load_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "grid-size = 30\n").unwrap();
        let config = Config::load(&path, false).unwrap();
        assert_eq!(config.grid_size(), 30);
        assert_eq!(config.tick_period(), Duration::from_millis(200));
    }

    #[test]
    fn test_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "").unwrap();
        let config = Config::load(&path, false).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_missing_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load(&path, true).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_missing_denied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let e = Config::load(&path, false).unwrap_err();
        assert!(matches!(e, ConfigError::Read(_)), "got: {e:?}");
    }

    #[test]
    fn test_load_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "grid-size = \"big\"\n").unwrap();
        let e = Config::load(&path, false).unwrap_err();
        assert!(matches!(e, ConfigError::Parse(_)), "got: {e:?}");
    }

    #[rstest]
    #[case(0)]
    #[case(60_001)]
    #[case(9_000_000_000_000)]
    fn test_load_tick_period_out_of_range(#[case] ms: u64) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, format!("tick-period-ms = {ms}\n")).unwrap();
        let e = Config::load(&path, false).unwrap_err();
        assert!(matches!(e, ConfigError::TickPeriodOutOfRange), "got: {e:?}");
    }

    #[test]
    fn test_load_slowest_tick_period() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "tick-period-ms = 60000\n").unwrap();
        let config = Config::load(&path, false).unwrap();
        assert_eq!(config.tick_period(), Duration::from_secs(60));
    }
}
