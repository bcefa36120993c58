//! bangumi-crawler: concurrent ingestion of the bangumi.tv anime catalog.
//!
//! The pipeline walks one listing partition (year) at a time, enriches each
//! listing page's rows with subject-page tags under a bounded worker budget,
//! and reassembles everything in original order for the CSV output stage.

pub mod crawling;
pub mod domain;
pub mod infrastructure;

pub use crawling::IngestionDriver;
pub use domain::{Category, EnrichedItem, ListingItem, PartitionResult, RecordSet};
pub use infrastructure::{CrawlerConfig, HttpClient, PageFetcher};
