//! Concurrent fan-out over independent fetches.
//!
//! Every request is issued up front and the batch resolves only once all of
//! them have settled. A failed request never fails the batch: it is counted
//! and logged, and the caller works with whatever succeeded.

use std::{fmt::Display, future::Future};

use futures_util::future::join_all;
use tracing::debug;

use crate::error::{MlbError, Result};

/// Outcome of a scatter/gather batch, in the order the keys were given.
#[derive(Debug)]
pub struct Gathered<K, T> {
    pub settled: Vec<(K, T)>,
    pub failed: Vec<(K, MlbError)>,
}

impl<K, T> Gathered<K, T> {
    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// True when at least one request failed.
    pub fn is_partial(&self) -> bool {
        !self.failed.is_empty()
    }

    pub fn into_values(self) -> impl Iterator<Item = T> {
        self.settled.into_iter().map(|(_, value)| value)
    }
}

/// Run `fetch` for every key concurrently and wait for all of them.
pub async fn scatter_gather<K, T, F, Fut>(keys: Vec<K>, fetch: F) -> Gathered<K, T>
where
    K: Clone + Display,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let requests = keys.into_iter().map(|key| {
        let request = fetch(key.clone());
        async move { (key, request.await) }
    });

    let mut gathered = Gathered {
        settled: Vec::new(),
        failed: Vec::new(),
    };
    for (key, outcome) in join_all(requests).await {
        match outcome {
            Ok(value) => gathered.settled.push((key, value)),
            Err(e) => {
                debug!(%key, error = %e, "request failed; continuing without it");
                gathered.failed.push((key, e));
            }
        }
    }
    gathered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_preserves_key_order() {
        let gathered = scatter_gather(vec![3u32, 1, 2], |k| async move { Ok(k * 10) }).await;

        assert!(!gathered.is_partial());
        let values: Vec<u32> = gathered.into_values().collect();
        assert_eq!(values, vec![30, 10, 20]);
    }

    #[tokio::test]
    async fn test_failures_do_not_fail_the_batch() {
        let gathered = scatter_gather(vec![1u32, 2, 3], |k| async move {
            if k == 2 {
                Err(MlbError::not_found("team", k))
            } else {
                Ok(k)
            }
        })
        .await;

        assert_eq!(gathered.failure_count(), 1);
        assert_eq!(gathered.failed[0].0, 2);
        assert!(gathered.failed[0].1.is_not_found());
        let keys: Vec<u32> = gathered.settled.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let gathered: Gathered<u32, u32> =
            scatter_gather(Vec::new(), |k| async move { Ok(k) }).await;
        assert!(gathered.settled.is_empty());
        assert!(!gathered.is_partial());
    }
}
