//! Messaging Module
//!
//! Request/reply transport shared by the data service clients.
//!
//! The data services listen on one Redis channel per operation name
//! (the *pattern*). A request is published on `<pattern>` and the answer
//! comes back on `<pattern>.reply`, correlated by a request id:
//!
//! ```text
//! gateway --PUBLISH get_courses {"pattern","data","id"}--> course service
//! gateway <--PUBLISH get_courses.reply {"id","response","err","isDisposed"}--
//! ```

mod envelope;
mod pending;
mod redis_transport;

pub use envelope::{ReplyEnvelope, RequestEnvelope};
pub use pending::PendingReplies;
pub use redis_transport::RedisTransport;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ServiceError;

/// A channel able to carry one named request and return its single reply.
#[async_trait]
pub trait ServiceTransport: Send + Sync {
    /// Send `payload` to the service answering `pattern` and await the reply.
    ///
    /// Exactly one attempt is made.
    async fn send(&self, pattern: &str, payload: Value) -> Result<Value, ServiceError>;

    /// Check that the broker is reachable.
    async fn ping(&self) -> Result<(), ServiceError>;
}
