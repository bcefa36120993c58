//! Mock transport and page builders shared by the crawling unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::infrastructure::config::urls;
use crate::infrastructure::PageFetcher;

/// A fetched-fine listing page with zero rows: the termination signal.
pub const EMPTY_LISTING_PAGE: &str =
    "<html><body><ul id=\"browserItemList\"></ul></body></html>";

/// Minimal listing page. Each row is `(name, href)`; an empty href produces a
/// row whose anchor has no link, i.e. an item without a detail reference.
pub fn listing_page_html(rows: &[(&str, &str)]) -> String {
    let lis: String = rows
        .iter()
        .map(|(name, href)| {
            let anchor = if href.is_empty() {
                format!("<a class=\"l\">{name}</a>")
            } else {
                format!("<a href=\"{href}\" class=\"l\">{name}</a>")
            };
            format!("<li class=\"item tv\"><div class=\"inner\"><h3>{anchor}</h3></div></li>")
        })
        .collect();
    format!("<html><body><ul id=\"browserItemList\">{lis}</ul></body></html>")
}

/// Minimal subject page carrying the given tags.
pub fn subject_page_html(tags: &[&str]) -> String {
    let anchors: String = tags
        .iter()
        .map(|t| format!("<a href=\"#\" class=\"l\"><span>{t}</span></a>"))
        .collect();
    format!(
        "<html><body><div class=\"subject_tag_section\"><div class=\"inner\">{anchors}</div></div></body></html>"
    )
}

/// Deterministic [`PageFetcher`]: canned bodies keyed by URL, plus counters
/// instrumenting call volume and in-flight concurrency. Unknown URLs fail,
/// which doubles as the "read failed" stimulus.
#[derive(Default)]
pub struct MockTransport {
    listing_pages: HashMap<String, String>,
    detail_pages: HashMap<String, String>,
    failing_details: HashSet<String>,
    panicking_details: HashSet<String>,
    pub detail_delay_ms: u64,
    pub listing_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    active: AtomicUsize,
    pub max_active: AtomicUsize,
}

impl MockTransport {
    pub fn add_listing(&mut self, year: u32, page: u32, body: &str) {
        self.listing_pages.insert(urls::listing_page(year, page), body.to_string());
    }

    pub fn add_detail(&mut self, url: &str, body: &str) {
        self.detail_pages.insert(url.to_string(), body.to_string());
    }

    pub fn fail_detail(&mut self, url: &str) {
        self.failing_details.insert(url.to_string());
    }

    /// Make a detail fetch panic instead of returning, to exercise worker
    /// isolation rather than the ordinary error path.
    pub fn panic_detail(&mut self, url: &str) {
        self.panicking_details.insert(url.to_string());
    }
}

#[async_trait]
impl PageFetcher for MockTransport {
    async fn fetch_listing(&self, url: &str) -> Result<String> {
        self.listing_calls.fetch_add(1, Ordering::SeqCst);
        self.listing_pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("listing unavailable: {url}"))
    }

    async fn fetch_detail(&self, url: &str) -> Result<String> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if self.panicking_details.contains(url) {
            panic!("detail fetch wedged: {url}");
        }
        let in_flight = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(in_flight, Ordering::SeqCst);

        if self.detail_delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.detail_delay_ms)).await;
        }

        let result = if self.failing_details.contains(url) {
            Err(anyhow!("detail fetch refused: {url}"))
        } else {
            self.detail_pages
                .get(url)
                .cloned()
                .ok_or_else(|| anyhow!("detail unavailable: {url}"))
        };

        self.active.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
