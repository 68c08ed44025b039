use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Count used when a caller does not ask for one
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
    /// Count used by the registration flow
    #[serde(default = "default_results_top_n")]
    pub results_top_n: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_top_n: default_top_n(),
            results_top_n: default_results_top_n(),
        }
    }
}

fn default_top_n() -> usize { crate::core::DEFAULT_TOP_N }
fn default_results_top_n() -> usize { 10 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetSettings {
    /// External mentor dataset; the bundled one is used when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MENTOR)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MENTOR__MATCHING__RESULTS_TOP_N -> matching.results_top_n
            .add_source(env_source())
            .build()?;

        Self::finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        Self::finish(settings)
    }

    /// Reject settings the matcher cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.matching.default_top_n == 0 {
            return Err(ConfigError::Message(
                "matching.default_top_n must be at least 1".to_string(),
            ));
        }
        if self.matching.results_top_n == 0 {
            return Err(ConfigError::Message(
                "matching.results_top_n must be at least 1".to_string(),
            ));
        }
        match self.logging.format.as_str() {
            "json" | "pretty" => Ok(()),
            other => Err(ConfigError::Message(format!(
                "logging.format must be \"json\" or \"pretty\", got {:?}",
                other
            ))),
        }
    }

    fn finish(settings: Config) -> Result<Self, ConfigError> {
        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("MENTOR")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
