//! The concurrent ingestion pipeline.
//!
//! Control flows strictly downward: driver → partition walker →
//! {listing reader, enrichment pool → detail fetcher}. Completed record
//! batches flow back up; no component holds cross-partition state.

pub mod detail_fetcher;
pub mod driver;
pub mod enrichment_pool;
pub mod listing_reader;
pub mod partition_walker;

#[cfg(test)]
pub(crate) mod test_support;

pub use detail_fetcher::{DetailFetchOutcome, DetailFetcher};
pub use driver::IngestionDriver;
pub use enrichment_pool::EnrichmentPool;
pub use listing_reader::{ListingPageReader, PageRead};
pub use partition_walker::PartitionWalker;
