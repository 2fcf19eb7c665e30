//! Ports (traits) the services depend on.

pub mod chat_service;
pub mod record_sink;

pub use chat_service::{ChatRequest, ChatService, ChatTurn};
pub use record_sink::{MemorySink, NullObserver, RecordSink, RunObserver};
