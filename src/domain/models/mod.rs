pub mod config;
pub mod qa_item;
pub mod run_record;

pub use config::{Config, LoggingConfig, PathsConfig, RunnerConfig, ServiceConfig};
pub use qa_item::{Category, Difficulty, QaItem};
pub use run_record::{CallFailure, CallOutcome, HarnessStatus, RecordStatus, RunRecord};
