//! Fan-out / Join Barrier
//!
//! Runs independent remote calls concurrently and waits for all of them.

use std::future::Future;

use futures::stream::{self, StreamExt, TryStreamExt};

/// Launch one future per item, keep at most `limit` in flight, and wait for all.
///
/// Results come back in input order. The first error aborts the barrier:
/// futures still pending are dropped, which abandons their in-flight calls.
pub async fn join_barrier<I, F, Fut, T, E>(items: I, limit: usize, f: F) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    stream::iter(items)
        .map(f)
        .buffered(limit.max(1))
        .try_collect()
        .await
}
