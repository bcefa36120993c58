//! Bounded-concurrency enrichment of one page's items.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::warn;

use super::detail_fetcher::{DetailFetchOutcome, DetailFetcher};
use crate::domain::{EnrichedItem, ListingItem};

/// Runs up to `worker_budget` detail fetches concurrently and reassembles the
/// results in original input order.
pub struct EnrichmentPool {
    fetcher: Arc<DetailFetcher>,
    worker_budget: usize,
}

impl EnrichmentPool {
    pub fn new(fetcher: Arc<DetailFetcher>, worker_budget: usize) -> Self {
        Self { fetcher, worker_budget }
    }

    /// Enrich one page batch.
    ///
    /// Exactly one [`EnrichedItem`] per input item, `output[i].item ==
    /// input[i]` for all i. Items without a detail URL get `tags == ""`
    /// without consuming a worker slot. Completion order never leaks into
    /// output order: each worker reports its original index and results land
    /// in a pre-reserved slot.
    pub async fn enrich(&self, items: Vec<ListingItem>) -> Vec<EnrichedItem> {
        let semaphore = Arc::new(Semaphore::new(self.worker_budget));
        let mut tasks = Vec::new();

        for (index, item) in items.iter().enumerate() {
            if item.detail_url.is_empty() {
                continue;
            }
            let url = item.detail_url.clone();
            let fetcher = Arc::clone(&self.fetcher);
            let semaphore = Arc::clone(&semaphore);

            tasks.push(tokio::spawn(async move {
                // Admission control: hold a permit for the whole fetch.
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return (index, DetailFetchOutcome::Failed("worker admission failed".into()));
                };
                (index, fetcher.fetch_tags(&url).await)
            }));
        }

        // One slot per input item, "" by default; only the slot's own worker
        // writes it, so no locking is needed.
        let mut tags: Vec<String> = vec![String::new(); items.len()];
        for joined in join_all(tasks).await {
            match joined {
                Ok((index, outcome)) => tags[index] = outcome.into_tags(),
                // A panicked worker is isolated: its slot keeps "" and the
                // siblings' results stand.
                Err(e) => warn!("Enrichment worker panicked, item keeps empty tags: {e}"),
            }
        }

        items
            .into_iter()
            .zip(tags)
            .map(|(item, tags)| EnrichedItem { item, tags })
            .collect()
    }
}
