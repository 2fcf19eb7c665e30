use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Run configuration, built once at start-up and passed to every component
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Chat service under test
    #[serde(default)]
    pub service: ServiceConfig,

    /// Dataset and results locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Strategy runner settings
    #[serde(default)]
    pub runner: RunnerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chat service endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServiceConfig {
    /// Base URL of the running chat service (`API_BASE` overrides)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the chat endpoint, appended to `base_url`
    #[serde(default = "default_chat_path")]
    pub chat_path: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_chat_path() -> String {
    "/api/chat/stream".to_string()
}

const fn default_timeout_secs() -> u64 {
    120
}

impl ServiceConfig {
    /// Full URL of the chat endpoint.
    pub fn chat_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.chat_path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            chat_path: default_chat_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// File locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PathsConfig {
    /// Golden dataset artifact
    #[serde(default = "default_dataset_path")]
    pub dataset: PathBuf,

    /// Directory that receives one JSONL file per run type
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/evaluation/golden-qa.json")
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("data/evaluation/results")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            dataset: default_dataset_path(),
            results_dir: default_results_dir(),
        }
    }
}

/// Strategy runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunnerConfig {
    /// Maximum requests in flight; 1 keeps the run strictly sequential
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Strategies compared when none are given on the command line
    #[serde(default = "default_strategies")]
    pub default_strategies: Vec<String>,
}

const fn default_concurrency() -> usize {
    1
}

fn default_strategies() -> Vec<String> {
    vec![
        "baseline".to_string(),
        "dense-only".to_string(),
        "hybrid-0.6".to_string(),
    ]
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            default_strategies: default_strategies(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for a JSON log file (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}
