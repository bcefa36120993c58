//! Whole-run orchestration across partitions.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use super::partition_walker::PartitionWalker;
use crate::domain::RecordSet;
use crate::infrastructure::config::CrawlerConfig;
use crate::infrastructure::PageFetcher;

/// Runs every partition in order and concatenates the results.
///
/// Partitions are strictly sequential; the only concurrency in the pipeline
/// is the per-page detail fan-out inside the walker. The accumulator is owned
/// here and handed to the caller by value.
pub struct IngestionDriver {
    walker: PartitionWalker,
    years: std::ops::RangeInclusive<u32>,
}

impl IngestionDriver {
    pub fn new(config: &CrawlerConfig, transport: Arc<dyn PageFetcher>) -> Result<Self> {
        Ok(Self {
            walker: PartitionWalker::new(transport, config)?,
            years: config.years(),
        })
    }

    /// Run the full crawl. An aborted partition keeps its partial records and
    /// never stops the partitions after it; the run always completes.
    pub async fn run(&self) -> RecordSet {
        let mut all = RecordSet::new();

        for year in self.years.clone() {
            let partition = self.walker.walk(year).await;
            if partition.aborted {
                warn!(
                    "Year {} aborted with {} records; moving on",
                    year,
                    partition.records.len()
                );
            }
            info!(
                "Year {} finished, cumulative records: {}",
                year,
                all.len() + partition.records.len()
            );
            all.absorb(partition);
        }

        all
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::crawling::test_support::{listing_page_html, MockTransport, EMPTY_LISTING_PAGE};

    #[tokio::test]
    async fn aborted_partition_does_not_stop_the_next() {
        let mut transport = MockTransport::default();
        // 2015: one good page, then a read failure on page 2.
        transport.add_listing(2015, 1, &listing_page_html(&[("a2015", "")]));
        // 2016: one good page, then a clean empty page.
        transport.add_listing(2016, 1, &listing_page_html(&[("a2016", "")]));
        transport.add_listing(2016, 2, EMPTY_LISTING_PAGE);
        let transport = Arc::new(transport);

        let config = CrawlerConfig {
            start_year: 2015,
            end_year: 2016,
            page_delay_ms: 0,
            ..CrawlerConfig::default()
        };
        let driver = IngestionDriver::new(&config, transport.clone()).unwrap();

        let records = driver.run().await;

        let names: Vec<&str> = records.records().iter().map(|r| r.item.name.as_str()).collect();
        assert_eq!(names, vec!["a2015", "a2016"]);
        // 2015 pages 1,2 (2 fails) + 2016 pages 1,2.
        assert_eq!(transport.listing_calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn partition_order_is_preserved() {
        let mut transport = MockTransport::default();
        for year in 2018..=2020u32 {
            transport.add_listing(year, 1, &listing_page_html(&[(&format!("y{year}"), "")]));
            transport.add_listing(year, 2, EMPTY_LISTING_PAGE);
        }
        let config = CrawlerConfig {
            start_year: 2018,
            end_year: 2020,
            page_delay_ms: 0,
            ..CrawlerConfig::default()
        };
        let driver = IngestionDriver::new(&config, Arc::new(transport)).unwrap();

        let records = driver.run().await;
        let names: Vec<&str> = records.records().iter().map(|r| r.item.name.as_str()).collect();
        assert_eq!(names, vec!["y2018", "y2019", "y2020"]);
    }
}
