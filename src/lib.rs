//! Earnings Eval - offline evaluation harness
//!
//! Replays a golden question set about company financial metrics and
//! earnings-call content against a tool-calling RAG chat service, once per
//! retrieval strategy, and records every raw response as newline-delimited
//! JSON for later scoring.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): QA items, run records, errors and ports
//! - **Service Layer** (`services`): dataset builder, selection, strategy runner
//! - **Infrastructure Layer** (`infrastructure`): HTTP client, JSONL sink,
//!   dataset artifact, configuration, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use earnings_eval::domain::ports::NullObserver;
//! use earnings_eval::infrastructure::{http::HttpChatService, sink::JsonlSink};
//! use earnings_eval::services::{dataset_builder, plan, StrategyRunner};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = earnings_eval::ConfigLoader::load(None)?;
//!     let items = dataset_builder::build();
//!     let cases = plan(&items, &[Some("baseline".to_string())]);
//!     let runner = StrategyRunner::new(Arc::new(HttpChatService::new(&config.service)?), 1);
//!     let mut sink = JsonlSink::create("results.jsonl").await?;
//!     runner.run(cases, &mut sink, &NullObserver).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    CallFailure, CallOutcome, Category, Config, Difficulty, QaItem, RecordStatus, RunRecord,
};
pub use domain::ports::{ChatRequest, ChatService, RecordSink, RunObserver};
pub use domain::{HarnessError, HarnessResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{RunSummary, Selection, StrategyRunner};
