//! Infrastructure layer module
//!
//! Adapters for everything outside the process:
//! - Dataset artifact storage
//! - HTTP client for the chat service under test
//! - JSONL result sink
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod dataset;
pub mod http;
pub mod logging;
pub mod sink;
