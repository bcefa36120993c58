//! Per-partition page loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use super::detail_fetcher::DetailFetcher;
use super::enrichment_pool::EnrichmentPool;
use super::listing_reader::{ListingPageReader, PageRead};
use crate::domain::{ListingItem, PartitionResult};
use crate::infrastructure::config::CrawlerConfig;
use crate::infrastructure::parsing::ParsingResult;
use crate::infrastructure::PageFetcher;

/// Walker state. One partition moves NotStarted → (ReadingPage ⇄ Enriching)
/// → Done | Aborted; aborting keeps whatever was already accumulated.
enum WalkerState {
    NotStarted,
    ReadingPage,
    Enriching(Vec<ListingItem>),
    Done,
    Aborted,
}

/// Drives one partition (one year) across its page sequence, feeding each
/// page's rows through the enrichment pool and pacing between pages.
pub struct PartitionWalker {
    reader: ListingPageReader,
    pool: EnrichmentPool,
    max_pages: u32,
    page_delay: Duration,
}

impl PartitionWalker {
    pub fn new(transport: Arc<dyn PageFetcher>, config: &CrawlerConfig) -> ParsingResult<Self> {
        let reader = ListingPageReader::new(Arc::clone(&transport))?;
        let fetcher = Arc::new(DetailFetcher::new(transport)?);
        Ok(Self {
            reader,
            pool: EnrichmentPool::new(fetcher, config.max_concurrent_details),
            max_pages: config.max_pages,
            page_delay: Duration::from_millis(config.page_delay_ms),
        })
    }

    /// Walk one year to completion. Pages run strictly sequentially; only the
    /// detail fetches within a page are concurrent.
    pub async fn walk(&self, year: u32) -> PartitionResult {
        let mut result = PartitionResult::new(year);
        let mut page: u32 = 1;
        let mut state = WalkerState::NotStarted;

        loop {
            state = match state {
                WalkerState::NotStarted => {
                    info!("Crawling year {}...", year);
                    WalkerState::ReadingPage
                }

                WalkerState::ReadingPage => {
                    if page > self.max_pages {
                        warn!("Year {}: reached page cap {}, stopping", year, self.max_pages);
                        WalkerState::Done
                    } else {
                        match self.reader.read_page(year, page).await {
                            PageRead::Items(items) => WalkerState::Enriching(items),
                            PageRead::Empty => WalkerState::Done,
                            PageRead::Failed(reason) => {
                                warn!(
                                    "Year {} aborted at page {}: {} ({} records kept)",
                                    year,
                                    page,
                                    reason,
                                    result.records.len()
                                );
                                WalkerState::Aborted
                            }
                        }
                    }
                }

                WalkerState::Enriching(items) => {
                    let batch = self.pool.enrich(items).await;
                    result.records.extend(batch);
                    info!("Year {} page {}, running total: {}", year, page, result.records.len());
                    sleep(self.page_delay).await;
                    page += 1;
                    WalkerState::ReadingPage
                }

                WalkerState::Done => return result,

                WalkerState::Aborted => {
                    result.aborted = true;
                    return result;
                }
            };
        }
    }
}
