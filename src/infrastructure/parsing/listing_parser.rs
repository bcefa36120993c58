//! Listing-page row extraction.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::error::{ParsingError, ParsingResult};
use crate::domain::{Category, ListingItem};
use crate::infrastructure::config::urls;

/// Parser for the yearly "airtime" listing pages.
pub struct ListingPageParser {
    row_selector: Selector,
    name_selector: Selector,
    name_cn_selector: Selector,
    info_selector: Selector,
    score_selector: Selector,
    score_count_selector: Selector,
    rank_selector: Selector,
}

fn compile(selector: &str) -> ParsingResult<Selector> {
    Selector::parse(selector).map_err(|e| ParsingError::invalid_selector(selector, e))
}

impl ListingPageParser {
    pub fn new() -> ParsingResult<Self> {
        Ok(Self {
            row_selector: compile("ul#browserItemList > li.item")?,
            name_selector: compile("div.inner h3 a.l")?,
            name_cn_selector: compile("div.inner h3 small.grey")?,
            info_selector: compile("div.inner p.info.tip")?,
            score_selector: compile("div.inner p.rateInfo small.fade")?,
            score_count_selector: compile("div.inner p.rateInfo span.tip_j")?,
            rank_selector: compile("div.inner span.rank")?,
        })
    }

    /// Extract every listing row from a page. An empty result on a
    /// successfully fetched page is the partition's termination signal, not
    /// an error.
    pub fn parse_rows(&self, html: &str) -> Vec<ListingItem> {
        let document = Html::parse_document(html);
        let rows: Vec<ListingItem> = document
            .select(&self.row_selector)
            .map(|row| self.extract_row(&row))
            .collect();

        debug!("Extracted {} listing rows", rows.len());
        rows
    }

    /// Build one item from a row element. Never fails: each missing
    /// sub-field degrades to an empty string or `None`.
    fn extract_row(&self, row: &ElementRef) -> ListingItem {
        let detail_url = row
            .select(&self.name_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(urls::resolve_subject)
            .unwrap_or_default();

        ListingItem {
            name: self.text_of(row, &self.name_selector),
            name_cn: self.text_of(row, &self.name_cn_selector),
            info: self.text_of(row, &self.info_selector),
            score: self.text_of(row, &self.score_selector),
            score_count: self.text_of(row, &self.score_count_selector),
            rank: self.text_of(row, &self.rank_selector),
            category: Self::category_of(row),
            detail_url,
        }
    }

    fn text_of(&self, row: &ElementRef, selector: &Selector) -> String {
        row.select(selector)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    }

    /// The row's class list carries at most one category class.
    fn category_of(row: &ElementRef) -> Option<Category> {
        row.value().classes().find_map(Category::from_class)
    }
}
