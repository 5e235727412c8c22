//! Configuration loaded from `prodscope.toml`.
//!
//! [`ScoutConfig`] holds every tunable. Missing keys fall back to the
//! defaults of the original dashboard. The `PRODSCOPE_REPORT_DIR`
//! environment variable takes precedence over the file for the report
//! directory.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::pipeline::{MAX_TIME_SCALE, scale_duration};

/// Environment variable overriding [`ScoutConfig::report_dir`].
pub const REPORT_DIR_ENV: &str = "PRODSCOPE_REPORT_DIR";

/// Top-level configuration loaded from `prodscope.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoutConfig {
    /// Multiplier applied to every simulated step duration, at most
    /// [`MAX_TIME_SCALE`].
    #[serde(default = "default_time_scale")]
    pub time_scale: f64,

    /// Directory exported reports are written to.
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,

    /// Number of cards in the first community feed page.
    #[serde(default = "default_feed_initial")]
    pub feed_initial: usize,

    /// Number of cards each further feed page adds.
    #[serde(default = "default_feed_page_size")]
    pub feed_page_size: usize,

    /// Feed size after which no more pages are offered.
    #[serde(default = "default_feed_limit")]
    pub feed_limit: usize,

    /// Simulated latency of one feed page load, in milliseconds.
    #[serde(default = "default_feed_load_ms")]
    pub feed_load_ms: u64,
}

fn default_time_scale() -> f64 {
    1.0
}

fn default_report_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_feed_initial() -> usize {
    12
}

fn default_feed_page_size() -> usize {
    6
}

fn default_feed_limit() -> usize {
    50
}

fn default_feed_load_ms() -> u64 {
    1000
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            time_scale: default_time_scale(),
            report_dir: default_report_dir(),
            feed_initial: default_feed_initial(),
            feed_page_size: default_feed_page_size(),
            feed_limit: default_feed_limit(),
            feed_load_ms: default_feed_load_ms(),
        }
    }
}

impl ScoutConfig {
    /// Loads `prodscope.toml` from the current directory, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("prodscope.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        Self::load_with_env(path, std::env::var(REPORT_DIR_ENV).ok())
    }

    /// Loads `path`, then applies `report_dir_env` (the value of
    /// [`REPORT_DIR_ENV`], if set). An empty value is ignored.
    fn load_with_env(path: &Path, report_dir_env: Option<String>) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<ScoutConfig>(&contents)?
        } else {
            Self::default()
        };

        if let Some(dir) = report_dir_env
            && !dir.is_empty()
        {
            config.report_dir = PathBuf::from(dir);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=MAX_TIME_SCALE).contains(&self.time_scale) {
            bail!(
                "time_scale must be between 0 and {MAX_TIME_SCALE}, got {}",
                self.time_scale
            );
        }
        if self.feed_page_size == 0 {
            bail!("feed_page_size must be greater than zero");
        }
        Ok(())
    }

    /// Simulated latency of one feed page load after applying `time_scale`.
    pub fn feed_load_delay(&self) -> Result<Duration> {
        scale_duration(Duration::from_millis(self.feed_load_ms), self.time_scale)
            .with_context(|| {
                format!(
                    "feed_load_ms = {} scaled by {} is out of range",
                    self.feed_load_ms, self.time_scale
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = ScoutConfig::default();
        assert_eq!(config.time_scale, 1.0);
        assert_eq!(config.report_dir, PathBuf::from("."));
        assert_eq!(config.feed_initial, 12);
        assert_eq!(config.feed_page_size, 6);
        assert_eq!(config.feed_limit, 50);
        assert_eq!(config.feed_load_ms, 1000);
    }

    #[test]
    fn deserialize_partial_toml() {
        let toml_str = r#"
            time_scale = 0.25
            feed_page_size = 10
        "#;
        let config: ScoutConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.time_scale, 0.25);
        assert_eq!(config.feed_page_size, 10);
        assert_eq!(config.feed_initial, 12);
        assert_eq!(config.feed_load_ms, 1000);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScoutConfig::load_from(&dir.path().join("prodscope.toml")).unwrap();
        assert_eq!(config.feed_limit, 50);
    }

    #[test]
    fn load_rejects_negative_time_scale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prodscope.toml");
        std::fs::write(&path, "time_scale = -1.0\n").unwrap();
        assert!(ScoutConfig::load_from(&path).is_err());
    }

    #[test]
    fn load_rejects_huge_time_scale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prodscope.toml");
        std::fs::write(&path, "time_scale = 1e20\n").unwrap();
        let err = ScoutConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("time_scale"));

        std::fs::write(&path, "time_scale = 1000.0\n").unwrap();
        let config = ScoutConfig::load_from(&path).unwrap();
        assert_eq!(config.time_scale, MAX_TIME_SCALE);
    }

    #[test]
    fn validate_rejects_out_of_range_cli_override() {
        let mut config = ScoutConfig::default();
        config.time_scale = 1e20;
        assert!(config.validate().is_err());
        config.time_scale = f64::NAN;
        assert!(config.validate().is_err());
        config.time_scale = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn feed_load_delay_is_scaled() {
        let mut config = ScoutConfig::default();
        assert_eq!(config.feed_load_delay().unwrap(), Duration::from_millis(1000));
        config.time_scale = 0.5;
        assert_eq!(config.feed_load_delay().unwrap(), Duration::from_millis(500));
        config.time_scale = 0.0;
        assert_eq!(config.feed_load_delay().unwrap(), Duration::ZERO);
    }

    #[test]
    fn env_overrides_report_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prodscope.toml");
        std::fs::write(&path, "report_dir = \"from-file\"\n").unwrap();

        let config = ScoutConfig::load_with_env(&path, Some("/tmp/reports".into())).unwrap();
        assert_eq!(config.report_dir, PathBuf::from("/tmp/reports"));

        let config = ScoutConfig::load_with_env(&path, Some(String::new())).unwrap();
        assert_eq!(config.report_dir, PathBuf::from("from-file"));

        let config = ScoutConfig::load_with_env(&path, None).unwrap();
        assert_eq!(config.report_dir, PathBuf::from("from-file"));
    }

    #[test]
    fn load_reads_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prodscope.toml");
        std::fs::write(&path, "feed_initial = 4\nfeed_limit = 8\n").unwrap();
        let config = ScoutConfig::load_from(&path).unwrap();
        assert_eq!(config.feed_initial, 4);
        assert_eq!(config.feed_limit, 8);
    }
}
