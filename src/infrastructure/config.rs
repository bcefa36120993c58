//! Crawler configuration.
//!
//! Defaults mirror the reference crawl: years 2015..=2024, up to 100 pages per
//! year, 20 concurrent detail fetches, half a second between listing pages.
//! A `bangumi-crawler.toml` in the working directory and `BANGUMI_*`
//! environment variables override the defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Named defaults, kept in one place so tests and docs agree with the code.
pub mod defaults {
    /// First partition year, inclusive.
    pub const START_YEAR: u32 = 2015;

    /// Last partition year, inclusive.
    pub const END_YEAR: u32 = 2024;

    /// Safety cap on listing pages walked per year.
    pub const MAX_PAGES: u32 = 100;

    /// Worker budget W: concurrent detail fetches per page batch.
    pub const MAX_CONCURRENT_DETAILS: usize = 20;

    /// Pacing delay between listing pages.
    pub const PAGE_DELAY_MS: u64 = 500;

    /// Timeout for one detail-page fetch.
    pub const DETAIL_TIMEOUT_SECS: u64 = 10;

    pub const USER_AGENT: &str =
        "zemi/bangumi-research/0.1 (https://github.com/zemi/bangumi-research)";

    pub const OUTPUT_PATH: &str = "bangumi_anime_2015_2024.csv";
}

/// Listing and subject URL construction.
pub mod urls {
    use url::Url;

    pub const BASE_URL: &str = "https://bangumi.tv";

    /// Listing page for one year/page, sorted by title so row order is stable
    /// across the walk.
    pub fn listing_page(year: u32, page: u32) -> String {
        format!("{BASE_URL}/anime/browser/airtime/{year}?sort=title&page={page}")
    }

    /// Resolve a row's subject href against the site root. Hrefs on the
    /// listing are site-relative (`/subject/12345`); anything unresolvable
    /// degrades to "no detail reference".
    pub fn resolve_subject(href: &str) -> String {
        if href.starts_with("http") {
            return href.to_string();
        }
        Url::parse(BASE_URL)
            .and_then(|base| base.join(href))
            .map(|u| u.to_string())
            .unwrap_or_default()
    }
}

/// Full crawler configuration. Every field has a default; a partial config
/// file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// First year to crawl, inclusive.
    pub start_year: u32,
    /// Last year to crawl, inclusive.
    pub end_year: u32,
    /// Safety cap on pages per year.
    pub max_pages: u32,
    /// Worker budget W for detail-page enrichment.
    pub max_concurrent_details: usize,
    /// Delay between listing pages, in milliseconds.
    pub page_delay_ms: u64,
    /// Per-request timeout for detail fetches, in seconds.
    pub detail_timeout_secs: u64,
    /// Optional timeout for listing fetches, in seconds. The reference
    /// behavior is no timeout; a hung listing request hangs the partition.
    pub listing_timeout_secs: Option<u64>,
    pub user_agent: String,
    /// Where the CSV lands at the end of the run.
    pub output_path: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            start_year: defaults::START_YEAR,
            end_year: defaults::END_YEAR,
            max_pages: defaults::MAX_PAGES,
            max_concurrent_details: defaults::MAX_CONCURRENT_DETAILS,
            page_delay_ms: defaults::PAGE_DELAY_MS,
            detail_timeout_secs: defaults::DETAIL_TIMEOUT_SECS,
            listing_timeout_secs: None,
            user_agent: defaults::USER_AGENT.to_string(),
            output_path: defaults::OUTPUT_PATH.to_string(),
        }
    }
}

impl CrawlerConfig {
    /// Load configuration from `bangumi-crawler.toml` (optional) and
    /// `BANGUMI_*` environment variables, on top of the defaults.
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("bangumi-crawler").required(false))
            .add_source(config::Environment::with_prefix("BANGUMI"))
            .build()
            .context("Failed to read crawler configuration sources")?;

        let cfg: Self = settings
            .try_deserialize()
            .context("Invalid crawler configuration")?;

        cfg.validate()?;
        Ok(cfg)
    }

    /// Range checks on top of deserialization. serde(default) fills missing
    /// fields, so only explicit nonsense lands here.
    fn validate(&self) -> Result<()> {
        if self.start_year > self.end_year {
            anyhow::bail!(
                "start_year {} is after end_year {}",
                self.start_year,
                self.end_year
            );
        }
        if self.max_concurrent_details == 0 {
            anyhow::bail!("max_concurrent_details must be at least 1");
        }
        if self.max_pages == 0 {
            anyhow::bail!("max_pages must be at least 1");
        }
        Ok(())
    }

    /// Inclusive partition sequence for this run.
    pub fn years(&self) -> std::ops::RangeInclusive<u32> {
        self.start_year..=self.end_year
    }
}
