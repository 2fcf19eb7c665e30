//! Run record model.
//!
//! A run produces exactly one [`RunRecord`] per attempted (item, strategy)
//! pair. The outcome of the call is a tagged [`CallOutcome`]; on the wire it is
//! flattened into the stable `status` / `raw_response` / `error` triple that
//! downstream scoring reads.

use serde::{Deserialize, Serialize};

use super::qa_item::{Category, QaItem};

/// Why a single call against the service under test did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallFailure {
    /// The service answered with a non-2xx status
    Status { status: u16, body: String },
    /// The per-request timeout elapsed
    Timeout { message: String },
    /// Connection refused, DNS failure, broken body, ...
    Transport { message: String },
}

impl CallFailure {
    pub fn status(&self) -> RecordStatus {
        match self {
            Self::Status { status, .. } => RecordStatus::Http(*status),
            Self::Timeout { .. } => RecordStatus::Harness(HarnessStatus::Timeout),
            Self::Transport { .. } => RecordStatus::Harness(HarnessStatus::TransportError),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Status { status, body } => format!("HTTP {status}: {body}"),
            Self::Timeout { message } | Self::Transport { message } => message.clone(),
        }
    }
}

/// Outcome of one call, consumed uniformly by the record serializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "OutcomeFields", try_from = "OutcomeFields")]
pub enum CallOutcome {
    Success { status: u16, body: String },
    Failure { error: CallFailure },
}

impl CallOutcome {
    pub fn success(status: u16, body: impl Into<String>) -> Self {
        Self::Success {
            status,
            body: body.into(),
        }
    }

    pub fn failure(error: CallFailure) -> Self {
        Self::Failure { error }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn status(&self) -> RecordStatus {
        match self {
            Self::Success { status, .. } => RecordStatus::Http(*status),
            Self::Failure { error } => error.status(),
        }
    }
}

/// Value of the `status` field: an HTTP code when a response was observed,
/// a harness sentinel otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordStatus {
    Http(u16),
    Harness(HarnessStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarnessStatus {
    Timeout,
    TransportError,
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(code) => write!(f, "{code}"),
            Self::Harness(HarnessStatus::Timeout) => f.write_str("timeout"),
            Self::Harness(HarnessStatus::TransportError) => f.write_str("transport_error"),
        }
    }
}

/// Wire shape of a [`CallOutcome`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OutcomeFields {
    status: RecordStatus,
    raw_response: Option<String>,
    error: Option<String>,
}

impl From<CallOutcome> for OutcomeFields {
    fn from(outcome: CallOutcome) -> Self {
        match outcome {
            CallOutcome::Success { status, body } => Self {
                status: RecordStatus::Http(status),
                raw_response: Some(body),
                error: None,
            },
            CallOutcome::Failure { error } => Self {
                status: error.status(),
                raw_response: None,
                error: Some(error.message()),
            },
        }
    }
}

impl TryFrom<OutcomeFields> for CallOutcome {
    type Error = String;

    fn try_from(fields: OutcomeFields) -> Result<Self, Self::Error> {
        match (fields.status, fields.error) {
            (RecordStatus::Http(status), None) => Ok(Self::Success {
                status,
                body: fields.raw_response.unwrap_or_default(),
            }),
            (RecordStatus::Http(status), Some(message)) => {
                let prefix = format!("HTTP {status}: ");
                let body = message
                    .strip_prefix(&prefix)
                    .map_or_else(|| message.clone(), str::to_string);
                Ok(Self::failure(CallFailure::Status { status, body }))
            }
            (RecordStatus::Harness(HarnessStatus::Timeout), Some(message)) => {
                Ok(Self::failure(CallFailure::Timeout { message }))
            }
            (RecordStatus::Harness(HarnessStatus::TransportError), Some(message)) => {
                Ok(Self::failure(CallFailure::Transport { message }))
            }
            (RecordStatus::Harness(sentinel), None) => Err(format!(
                "record with status {} must carry an error",
                RecordStatus::Harness(sentinel)
            )),
        }
    }
}

/// One persisted outcome row for a single (item, strategy) attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: String,
    pub question: String,

    /// Absent for single-strategy runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,

    pub category: Category,

    #[serde(default)]
    pub expected_tool: Vec<String>,

    #[serde(flatten)]
    pub outcome: CallOutcome,
}

impl RunRecord {
    pub fn new(item: &QaItem, strategy: Option<&str>, outcome: CallOutcome) -> Self {
        Self {
            id: item.id.clone(),
            question: item.question.clone(),
            strategy: strategy.map(str::to_string),
            category: item.category,
            expected_tool: item.expected_tool.clone(),
            outcome,
        }
    }

    pub fn status(&self) -> RecordStatus {
        self.outcome.status()
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}
