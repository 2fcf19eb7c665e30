use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::models::CallOutcome;

/// Request body for the chat endpoint of the service under test.
///
/// # Example
/// ```
/// use earnings_eval::domain::ports::ChatRequest;
///
/// let request = ChatRequest::new("What was NVDA's revenue in Q3 FY2024?", Some("baseline"));
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["chatHistory"], serde_json::json!([]));
/// assert_eq!(body["strategy"], "baseline");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The question text
    pub message: String,

    /// Prior turns; always empty for evaluation questions
    #[serde(rename = "chatHistory")]
    pub chat_history: Vec<ChatTurn>,

    /// Opaque retrieval strategy label, omitted for single-strategy runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, strategy: Option<&str>) -> Self {
        Self {
            message: message.into(),
            chat_history: Vec::new(),
            strategy: strategy.map(str::to_string),
        }
    }
}

/// A prior conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

/// The chat service under test.
///
/// Implementations never fail: transport errors, timeouts and non-2xx
/// responses are all reported through [`CallOutcome::Failure`].
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Send one question and capture the full response body as text.
    async fn ask(&self, request: &ChatRequest) -> CallOutcome;
}
