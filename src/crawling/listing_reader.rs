//! One listing page: fetch, parse, classify.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ListingItem;
use crate::infrastructure::config::urls;
use crate::infrastructure::parsing::{ListingPageParser, ParsingResult};
use crate::infrastructure::PageFetcher;

/// Outcome of one listing read.
#[derive(Debug)]
pub enum PageRead {
    /// At least one row; more pages are possible.
    Items(Vec<ListingItem>),
    /// Fetched fine but no rows: the partition's normal termination signal.
    Empty,
    /// Transport failure or non-success status: fatal for this partition.
    Failed(String),
}

/// Fetches and parses one listing page per call. No caching, no retries.
pub struct ListingPageReader {
    transport: Arc<dyn PageFetcher>,
    parser: ListingPageParser,
}

impl ListingPageReader {
    pub fn new(transport: Arc<dyn PageFetcher>) -> ParsingResult<Self> {
        Ok(Self {
            transport,
            parser: ListingPageParser::new()?,
        })
    }

    /// Read page `page` (1-based) of year `year`.
    pub async fn read_page(&self, year: u32, page: u32) -> PageRead {
        let url = urls::listing_page(year, page);

        let body = match self.transport.fetch_listing(&url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Listing read failed for {}: {:#}", url, e);
                return PageRead::Failed(e.to_string());
            }
        };

        let rows = self.parser.parse_rows(&body);
        if rows.is_empty() {
            debug!("Year {} page {} is empty", year, page);
            PageRead::Empty
        } else {
            PageRead::Items(rows)
        }
    }
}
