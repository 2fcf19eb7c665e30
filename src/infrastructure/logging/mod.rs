//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON output on stderr
//! - Optional JSON log file via tracing-appender

pub mod logger;

pub use logger::LoggerImpl;
