//! Infrastructure layer: transport, parsing, configuration, logging, output.

pub mod config;
pub mod http_client;
pub mod logging;
pub mod output;
pub mod parsing;
pub mod sanitize;

pub use config::CrawlerConfig;
pub use http_client::{HttpClient, PageFetcher};
