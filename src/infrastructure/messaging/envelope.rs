//! Wire envelopes for the request/reply convention.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::ServiceError;

/// Suffix appended to a pattern to form its reply channel.
pub const REPLY_SUFFIX: &str = ".reply";

/// Outgoing request.
#[derive(Debug, Serialize)]
pub struct RequestEnvelope<'a> {
    pub pattern: &'a str,
    pub data: &'a Value,
    pub id: &'a str,
}

/// Incoming reply.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyEnvelope {
    pub id: String,

    #[serde(default)]
    pub response: Option<Value>,

    #[serde(default)]
    pub err: Option<Value>,

    #[serde(default)]
    pub is_disposed: bool,
}

impl ReplyEnvelope {
    /// Final outcome carried by this reply, or `None` for an intermediate
    /// frame that neither answers nor closes the exchange.
    pub fn outcome(self) -> Option<Result<Value, ServiceError>> {
        if let Some(err) = self.err {
            return Some(Err(ServiceError::RemoteFailure {
                message: error_message(&err),
            }));
        }
        match self.response {
            Some(value) => Some(Ok(value)),
            None if self.is_disposed => Some(Ok(Value::Null)),
            None => None,
        }
    }
}

pub fn reply_channel(pattern: &str) -> String {
    format!("{}{}", pattern, REPLY_SUFFIX)
}

fn error_message(err: &Value) -> String {
    match err {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string()),
        other => other.to_string(),
    }
}
