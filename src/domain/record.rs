//! Per-partition and whole-run result containers.

use serde::{Deserialize, Serialize};

use super::EnrichedItem;

/// Everything gathered for one partition (one year), in page-then-intra-page
/// order. `aborted` marks a partition cut short by a listing read failure;
/// the records accumulated before the failure are still present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionResult {
    pub year: u32,
    pub records: Vec<EnrichedItem>,
    pub aborted: bool,
}

impl PartitionResult {
    pub fn new(year: u32) -> Self {
        Self { year, records: Vec::new(), aborted: false }
    }
}

/// The concatenated output of a full run, in partition order.
///
/// Owned by the driver and handed to the output stage by value; there is no
/// shared mutable accumulator anywhere in the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    records: Vec<EnrichedItem>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one partition's records, preserving their order.
    pub fn absorb(&mut self, partition: PartitionResult) {
        self.records.extend(partition.records);
    }

    pub fn records(&self) -> &[EnrichedItem] {
        &self.records
    }

    pub fn into_records(self) -> Vec<EnrichedItem> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
