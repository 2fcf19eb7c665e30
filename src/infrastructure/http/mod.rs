//! HTTP client for the chat service under test.
//!
//! One [`HttpChatService`] owns one `reqwest::Client`, so every request of a
//! run shares the same connection pool; the pool is released when the
//! service is dropped at the end of the run.

use async_trait::async_trait;
use reqwest::Client;
use tracing::trace;

use crate::domain::errors::{HarnessError, HarnessResult};
use crate::domain::models::{CallFailure, CallOutcome, ServiceConfig};
use crate::domain::ports::{ChatRequest, ChatService};

/// `reqwest` implementation of [`ChatService`].
///
/// The response body is captured as plain text whether or not the service
/// streams it; stream framing is left to downstream scoring.
#[derive(Debug, Clone)]
pub struct HttpChatService {
    http: Client,
    url: String,
}

impl HttpChatService {
    pub fn new(config: &ServiceConfig) -> HarnessResult<Self> {
        let url = config.chat_url();
        let parsed = reqwest::Url::parse(&url)
            .map_err(|e| HarnessError::HttpClient(format!("invalid chat URL '{url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(HarnessError::HttpClient(format!(
                "invalid chat URL '{url}': unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        let http = Client::builder()
            .timeout(config.timeout())
            .tcp_nodelay(true)
            .build()
            .map_err(|e| HarnessError::HttpClient(e.to_string()))?;

        Ok(Self { http, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatService for HttpChatService {
    async fn ask(&self, request: &ChatRequest) -> CallOutcome {
        let response = match self.http.post(&self.url).json(request).send().await {
            Ok(response) => response,
            Err(e) => return CallOutcome::failure(classify(&e)),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return CallOutcome::failure(classify(&e)),
        };
        trace!(status = status.as_u16(), bytes = body.len(), "response received");

        if status.is_success() {
            CallOutcome::success(status.as_u16(), body)
        } else {
            CallOutcome::failure(CallFailure::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

fn classify(err: &reqwest::Error) -> CallFailure {
    if err.is_timeout() {
        CallFailure::Timeout {
            message: format!("request timed out: {err}"),
        }
    } else {
        CallFailure::Transport {
            message: format!("request failed: {err}"),
        }
    }
}
