//! Subject-page tag fetching: the unit of concurrent work.

use std::sync::Arc;

use anyhow::Result;
use tracing::warn;

use crate::infrastructure::parsing::{DetailPageParser, ParsingResult};
use crate::infrastructure::sanitize::strip_invisible;
use crate::infrastructure::PageFetcher;

/// What happened on one detail fetch.
///
/// The pipeline's external contract is degrade-gracefully: callers only ever
/// see the tag string, and a failure reads as `""`. The tagged form exists so
/// logs can tell "fetch failed" apart from "subject genuinely has no tags".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailFetchOutcome {
    Fetched(String),
    Failed(String),
}

impl DetailFetchOutcome {
    /// Collapse to the empty-string-on-failure view.
    pub fn into_tags(self) -> String {
        match self {
            Self::Fetched(tags) => tags,
            Self::Failed(_) => String::new(),
        }
    }
}

/// Stateless, retryless fetcher for one subject page.
pub struct DetailFetcher {
    transport: Arc<dyn PageFetcher>,
    parser: DetailPageParser,
}

impl DetailFetcher {
    pub fn new(transport: Arc<dyn PageFetcher>) -> ParsingResult<Self> {
        Ok(Self {
            transport,
            parser: DetailPageParser::new()?,
        })
    }

    /// Fetch one subject page and extract its comma-joined tag string.
    ///
    /// Invisible characters are stripped from the joined string, not per tag,
    /// so separators introduced by the join are sanitized too. Never raises
    /// past this boundary; `url` must be non-empty (the pool skips items
    /// without a detail reference).
    pub async fn fetch_tags(&self, url: &str) -> DetailFetchOutcome {
        debug_assert!(!url.is_empty(), "empty detail URL must be filtered by the pool");

        match self.try_fetch(url).await {
            Ok(tags) => DetailFetchOutcome::Fetched(tags),
            Err(e) => {
                warn!("Tag fetch failed for {}: {:#}", url, e);
                DetailFetchOutcome::Failed(e.to_string())
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<String> {
        let body = self.transport.fetch_detail(url).await?;
        let tags = self.parser.extract_tags(&body);
        Ok(strip_invisible(&tags.join(",")))
    }
}
