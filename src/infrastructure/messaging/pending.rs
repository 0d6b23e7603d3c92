//! Correlation of in-flight requests with their replies.
//!
//! Each request registers a oneshot slot under its id. The reply dispatcher
//! hands every reply envelope to [`PendingReplies::route`], which completes
//! the matching slot. Once the dispatcher is gone the table is closed and
//! further exchanges fail fast instead of waiting for a reply that can no
//! longer arrive.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::debug;
use uuid::Uuid;

use super::envelope::ReplyEnvelope;
use crate::domain::ServiceError;

type ReplySender = oneshot::Sender<Result<Value, ServiceError>>;

/// Table of callers waiting for a reply, keyed by request id.
#[derive(Debug, Default)]
pub struct PendingReplies {
    slots: DashMap<String, ReplySender>,
    closed: AtomicBool,
}

impl PendingReplies {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of callers currently waiting.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether reply delivery has stopped for good.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Deliver `reply` to its waiter.
    ///
    /// Intermediate frames, and replies whose caller already gave up, are dropped.
    pub fn route(&self, reply: ReplyEnvelope) {
        let id = reply.id.clone();
        let Some(outcome) = reply.outcome() else {
            return;
        };

        match self.slots.remove(&id) {
            Some((_, tx)) => {
                let _ = tx.send(outcome);
            }
            None => debug!(%id, "Reply for unknown or abandoned request"),
        }
    }

    /// Stop accepting exchanges and wake every current waiter.
    pub fn close(&self) {
        // Flag first: an exchange that registers after the clear still sees it.
        self.closed.store(true, Ordering::Release);
        self.slots.clear();
    }

    fn register(self: &Arc<Self>) -> (PendingGuard, oneshot::Receiver<Result<Value, ServiceError>>) {
        let id = Uuid::new_v4().to_string();
        let (tx, rx) = oneshot::channel();
        self.slots.insert(id.clone(), tx);
        let guard = PendingGuard {
            pending: self.clone(),
            id,
        };
        (guard, rx)
    }

    /// Run one request/reply exchange.
    ///
    /// `publish` receives the fresh request id and returns how many
    /// subscribers got the request. The slot is released when this future
    /// finishes or is dropped.
    pub async fn exchange<P, Fut>(
        self: &Arc<Self>,
        pattern: &str,
        timeout: Duration,
        publish: P,
    ) -> Result<Value, ServiceError>
    where
        P: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<i64, ServiceError>>,
    {
        if self.is_closed() {
            return Err(dispatcher_stopped());
        }

        let (guard, rx) = self.register();
        if self.is_closed() {
            return Err(dispatcher_stopped());
        }

        let receivers = publish(guard.id.clone()).await?;
        if receivers == 0 {
            return Err(ServiceError::Unreachable(format!(
                "no service is listening on '{}'",
                pattern
            )));
        }

        match tokio::time::timeout(timeout, rx).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(_)) => Err(dispatcher_stopped()),
            Err(_) => Err(ServiceError::Timeout {
                pattern: pattern.to_string(),
            }),
        }
    }
}

fn dispatcher_stopped() -> ServiceError {
    ServiceError::Unreachable("reply dispatcher stopped".into())
}

/// Removes the pending slot when the caller stops waiting, whether it got a
/// reply, timed out, or was cancelled.
struct PendingGuard {
    pending: Arc<PendingReplies>,
    id: String,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.pending.slots.remove(&self.id);
    }
}
