//! Domain model for the catalog ingestion pipeline.
//!
//! Plain data types only; all behavior lives in the `crawling` and
//! `infrastructure` layers.

pub mod item;
pub mod record;

pub use item::{Category, EnrichedItem, ListingItem};
pub use record::{PartitionResult, RecordSet};
