use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use bangumi_crawler::infrastructure::{logging, output, sanitize};
use bangumi_crawler::{CrawlerConfig, HttpClient, IngestionDriver};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();

    let config = CrawlerConfig::load()?;
    info!(
        "Crawling years {}..={} into {}",
        config.start_year, config.end_year, config.output_path
    );

    let transport = Arc::new(HttpClient::new(&config)?);
    let driver = IngestionDriver::new(&config, transport)?;
    let records = driver.run().await;

    output::write_csv(Path::new(&config.output_path), records.records())
        .with_context(|| format!("Failed to write {}", config.output_path))?;
    info!("Saved {} records to {}", records.len(), config.output_path);

    // Post-run anomaly scan: tags that still look corrupted after
    // sanitization point at transcoding trouble upstream.
    for record in records.records() {
        if sanitize::looks_garbled(&record.tags) {
            warn!(
                "Suspicious tags for '{}': {:?}",
                record.item.name, record.tags
            );
        }
    }

    Ok(())
}
