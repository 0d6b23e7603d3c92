//! Redis request/reply transport.
//!
//! One connection manager publishes requests. A dedicated pub/sub connection
//! is pattern-subscribed to every reply channel and a dispatcher task routes
//! each reply to the caller waiting on its id. If the subscription ends, the
//! transport reports itself unreachable until the process is restarted.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use redis::aio::{ConnectionManager, PubSub};
use redis::Client;
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use super::envelope::{reply_channel, ReplyEnvelope, RequestEnvelope};
use super::pending::PendingReplies;
use super::ServiceTransport;
use crate::config::RedisSettings;
use crate::domain::ServiceError;

/// Request/reply transport over Redis pub/sub.
pub struct RedisTransport {
    publisher: ConnectionManager,
    pending: Arc<PendingReplies>,
    timeout: Duration,
    dispatcher: JoinHandle<()>,
}

impl RedisTransport {
    /// Connect to Redis and start the reply dispatcher.
    #[instrument(skip(settings), fields(url = %settings.url))]
    pub async fn connect(settings: &RedisSettings, timeout: Duration) -> Result<Self, redis::RedisError> {
        info!("Connecting to Redis...");
        let client = Client::open(settings.url.as_str())?;
        let publisher = ConnectionManager::new(client.clone()).await?;

        let mut subscriber = client.get_async_pubsub().await?;
        subscriber.psubscribe(reply_channel("*")).await?;

        let pending = PendingReplies::new();
        let dispatcher = tokio::spawn(dispatch_replies(subscriber, pending.clone()));
        info!("Redis transport ready");

        Ok(Self {
            publisher,
            pending,
            timeout,
            dispatcher,
        })
    }
}

impl Drop for RedisTransport {
    fn drop(&mut self) {
        self.dispatcher.abort();
    }
}

async fn dispatch_replies(mut subscriber: PubSub, pending: Arc<PendingReplies>) {
    let mut messages = subscriber.on_message();

    while let Some(msg) = messages.next().await {
        let payload: String = match msg.get_payload() {
            Ok(payload) => payload,
            Err(e) => {
                warn!(channel = msg.get_channel_name(), error = %e, "Unreadable reply payload");
                continue;
            }
        };

        match serde_json::from_str::<ReplyEnvelope>(&payload) {
            Ok(reply) => pending.route(reply),
            Err(e) => {
                warn!(channel = msg.get_channel_name(), error = %e, "Malformed reply envelope");
            }
        }
    }

    warn!(waiting = pending.len(), "Reply subscription closed; failing pending requests");
    pending.close();
}

#[async_trait]
impl ServiceTransport for RedisTransport {
    #[instrument(skip(self, payload))]
    async fn send(&self, pattern: &str, payload: Value) -> Result<Value, ServiceError> {
        self.pending
            .exchange(pattern, self.timeout, |id| async move {
                let message = serde_json::to_string(&RequestEnvelope {
                    pattern,
                    data: &payload,
                    id: &id,
                })
                .map_err(|e| ServiceError::Unreachable(format!("cannot encode request: {}", e)))?;

                let mut conn = self.publisher.clone();
                redis::cmd("PUBLISH")
                    .arg(pattern)
                    .arg(message)
                    .query_async::<i64>(&mut conn)
                    .await
                    .map_err(|e| ServiceError::Unreachable(e.to_string()))
            })
            .await
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        if self.pending.is_closed() {
            return Err(ServiceError::Unreachable("reply subscription closed".into()));
        }

        let mut conn = self.publisher.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| ServiceError::Unreachable(e.to_string()))
    }
}
