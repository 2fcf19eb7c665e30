use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project config file picked up when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "eval.yaml";

/// Environment variable overriding `service.base_url`
pub const BASE_URL_ENV: &str = "API_BASE";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    MissingFile(PathBuf),

    #[error("Service base URL cannot be empty")]
    EmptyBaseUrl,

    #[error("Invalid service base URL '{0}': {1}")]
    InvalidBaseUrl(String, String),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid concurrency: {0}. Must be at least 1")]
    InvalidConcurrency(usize),

    #[error("At least one default strategy is required")]
    NoStrategies,

    #[error("Strategy labels cannot be empty")]
    EmptyStrategy,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `path`, or `eval.yaml` in the working directory (optional)
    /// 3. Environment variables (`EVAL_*` prefix, `__` separates nested keys)
    /// 4. `API_BASE` for the service base URL
    ///
    /// `eval.yaml` is optional, but an explicitly given `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.to_path_buf()).into());
            }
        }

        let config: Config = Self::figment(path)
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// The merged provider chain, before extraction.
    pub fn figment(path: Option<&Path>) -> Figment {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(file))
            .merge(Env::prefixed("EVAL_").split("__"))
            .merge(
                Env::raw()
                    .only(&[BASE_URL_ENV])
                    .map(|_| "service.base_url".into()),
            )
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let base_url = config.service.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        match reqwest::Url::parse(base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::InvalidBaseUrl(
                    base_url.to_string(),
                    format!("unsupported scheme '{}'", url.scheme()),
                ))
            }
            Err(e) => {
                return Err(ConfigError::InvalidBaseUrl(
                    base_url.to_string(),
                    e.to_string(),
                ))
            }
        }

        if config.service.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.service.timeout_secs));
        }

        if config.runner.concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency(config.runner.concurrency));
        }

        if config.runner.default_strategies.is_empty() {
            return Err(ConfigError::NoStrategies);
        }
        if config
            .runner
            .default_strategies
            .iter()
            .any(|s| s.trim().is_empty())
        {
            return Err(ConfigError::EmptyStrategy);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ENV_KEYS: [&str; 3] = [BASE_URL_ENV, "EVAL_RUNNER__CONCURRENCY", "EVAL_LOGGING__LEVEL"];

    fn minimal_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  format: pretty").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.base_url, "http://localhost:3000");
        assert_eq!(config.service.chat_path, "/api/chat/stream");
        assert_eq!(config.runner.concurrency, 1);
        assert_eq!(
            config.runner.default_strategies,
            vec!["baseline", "dense-only", "hybrid-0.6"]
        );
        assert_eq!(
            config.paths.dataset,
            PathBuf::from("data/evaluation/golden-qa.json")
        );
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_load_minimal_file_without_env_uses_defaults() {
        temp_env::with_vars_unset(ENV_KEYS, || {
            let file = minimal_file();
            let config = ConfigLoader::load(Some(file.path())).unwrap();
            assert_eq!(config.service.base_url, "http://localhost:3000");
            assert_eq!(config.runner.concurrency, 1);
        });
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
service:
  base_url: http://eval-host:8080
  timeout_secs: 30
runner:
  concurrency: 4
  default_strategies: [baseline, hybrid-0.8]
logging:
  level: debug
  format: json
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.service.base_url, "http://eval-host:8080");
        assert_eq!(config.service.chat_path, "/api/chat/stream");
        assert_eq!(config.service.timeout_secs, 30);
        assert_eq!(config.runner.concurrency, 4);
        assert_eq!(config.runner.default_strategies, vec!["baseline", "hybrid-0.8"]);
        assert_eq!(config.logging.format, "json");

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_api_base_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "service:\n  base_url: http://from-file:1234").unwrap();
        file.flush().unwrap();

        temp_env::with_vars(
            [
                (BASE_URL_ENV, Some("http://from-env:9999")),
                ("EVAL_RUNNER__CONCURRENCY", None),
                ("EVAL_LOGGING__LEVEL", None),
            ],
            || {
                let config = ConfigLoader::load(Some(file.path())).unwrap();
                assert_eq!(config.service.base_url, "http://from-env:9999");
            },
        );
    }

    #[test]
    fn test_prefixed_env_overrides_nested_keys() {
        temp_env::with_vars(
            [
                (BASE_URL_ENV, None),
                ("EVAL_RUNNER__CONCURRENCY", Some("3")),
                ("EVAL_LOGGING__LEVEL", Some("warn")),
            ],
            || {
                let file = minimal_file();
                let config = ConfigLoader::load(Some(file.path())).unwrap();
                assert_eq!(config.runner.concurrency, 3);
                assert_eq!(config.logging.level, "warn");
            },
        );
    }

    #[test]
    fn test_explicit_missing_file_rejected() {
        let err = ConfigLoader::load(Some(Path::new("/nonexistent/eval.yaml"))).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingFile(_))
        ));
    }

    #[test]
    fn test_validate_invalid_base_url() {
        let mut config = Config::default();
        config.service.base_url = "localhost:3000/api".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidBaseUrl(..))
        ));

        config.service.base_url = "  ".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyBaseUrl)
        ));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.service.timeout_secs = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidTimeout(0))
        ));
    }

    #[test]
    fn test_validate_zero_concurrency() {
        let mut config = Config::default();
        config.runner.concurrency = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidConcurrency(0))
        ));
    }

    #[test]
    fn test_validate_strategies() {
        let mut config = Config::default();
        config.runner.default_strategies.clear();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::NoStrategies)
        ));

        config.runner.default_strategies = vec!["baseline".to_string(), String::new()];
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyStrategy)
        ));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "invalid".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogLevel(level) => assert_eq!(level, "invalid"),
            _ => panic!("Expected InvalidLogLevel error"),
        }
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogFormat(format) => assert_eq!(format, "xml"),
            _ => panic!("Expected InvalidLogFormat error"),
        }
    }

    #[test]
    fn test_hierarchical_merging() {
        let mut base_file = NamedTempFile::new().unwrap();
        writeln!(
            base_file,
            "runner:\n  concurrency: 2\nlogging:\n  level: info\n  format: json"
        )
        .unwrap();
        base_file.flush().unwrap();

        let mut override_file = NamedTempFile::new().unwrap();
        writeln!(override_file, "runner:\n  concurrency: 8\nlogging:\n  level: debug").unwrap();
        override_file.flush().unwrap();

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(base_file.path()))
            .merge(Yaml::file(override_file.path()))
            .extract()
            .unwrap();

        assert_eq!(config.runner.concurrency, 8, "Override should win");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.logging.format, "json",
            "Base value should persist when not overridden"
        );
    }
}
