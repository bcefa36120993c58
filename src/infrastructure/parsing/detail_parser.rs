//! Subject-page tag extraction.

use scraper::{Html, Selector};

use super::error::{ParsingError, ParsingResult};

/// Parser for the tag section of a subject (detail) page.
pub struct DetailPageParser {
    tag_selector: Selector,
}

impl DetailPageParser {
    pub fn new() -> ParsingResult<Self> {
        let selector = "div.subject_tag_section div.inner a.l span";
        Ok(Self {
            tag_selector: Selector::parse(selector)
                .map_err(|e| ParsingError::invalid_selector(selector, e))?,
        })
    }

    /// All tag strings in document order, trimmed. Whitespace-only spans are
    /// dropped entirely rather than kept as empty entries, so the joined
    /// string never carries `a,,b` holes. A page with no tag section simply
    /// yields an empty list.
    pub fn extract_tags(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(&self.tag_selector)
            .map(|span| span.text().collect::<String>().trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject_page(tags: &[&str]) -> String {
        let anchors: String = tags
            .iter()
            .map(|t| format!("<a href=\"/anime/tag/{t}\" class=\"l\"><span>{t}</span></a>"))
            .collect();
        format!(
            "<html><body><div class=\"subject_tag_section\"><div class=\"inner\">{anchors}</div></div></body></html>"
        )
    }

    #[test]
    fn tags_in_document_order() {
        let parser = DetailPageParser::new().unwrap();
        let tags = parser.extract_tags(&subject_page(&["科幻", "机战", "TV"]));
        assert_eq!(tags, vec!["科幻", "机战", "TV"]);
    }

    #[test]
    fn page_without_tag_section() {
        let parser = DetailPageParser::new().unwrap();
        assert!(parser.extract_tags("<html><body><h1>subject</h1></body></html>").is_empty());
    }

    #[test]
    fn whitespace_tags_are_dropped() {
        let parser = DetailPageParser::new().unwrap();
        let html = subject_page(&["  ", "日常"]);
        assert_eq!(parser.extract_tags(&html), vec!["日常"]);
    }
}
