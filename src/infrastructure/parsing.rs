//! HTML extraction for listing rows and subject pages.
//!
//! Parsers hold precompiled CSS selectors; selector compilation is the only
//! fallible setup step. Field extraction itself never fails — missing
//! sub-fields default to empty strings so one ragged row cannot sink a page.

pub mod detail_parser;
pub mod error;
pub mod listing_parser;

pub use detail_parser::DetailPageParser;
pub use error::{ParsingError, ParsingResult};
pub use listing_parser::ListingPageParser;
