//! Pipeline orchestrator
//!
//! Walks the configured source pages one at a time, turns every
//! discovered iframe into a [`StreamRecord`], and finalizes the
//! collection for playlist output. A failing source is logged and
//! skipped; it never aborts the run.

use tracing::{info, warn};

use crate::client::{ClientConfig, PageClient};
use crate::config::AggregatorConfig;
use crate::error::Result;
use crate::parser::parse_iframe_sources;
use crate::record::{build_stream_record, dedupe_streams, finalize_streams};
use crate::types::StreamRecord;

/// High-level aggregation API
///
/// Owns the HTTP client and the run configuration. One instance
/// performs one run at a time; nothing persists between runs.
pub struct StreamAggregator {
    client: PageClient,
    config: AggregatorConfig,
}

impl StreamAggregator {
    /// Create an aggregator for the given configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new(config: AggregatorConfig) -> Result<Self> {
        let client = PageClient::with_config(ClientConfig {
            timeout_secs: config.timeout_secs,
            ..ClientConfig::default()
        })?;
        Ok(Self { client, config })
    }

    /// The configuration this aggregator runs with
    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Collects, deduplicates, and finalizes streams from all sources
    ///
    /// Sources are fetched sequentially. When every source comes up
    /// empty (unreachable, non-2xx, unparseable, or simply without
    /// iframes), the configured fallback streams are substituted. The
    /// result is deduplicated by URL, truncated to `max_streams`, and
    /// finalized with ids and TVG metadata.
    pub async fn collect_streams(&self) -> Vec<StreamRecord> {
        let mut streams = Vec::new();

        for source in &self.config.sources {
            info!(source = %source.name, "checking source");
            match self.scan_source(&source.url, &source.name).await {
                Ok(found) if found.is_empty() => {
                    info!(source = %source.name, "no streams found");
                }
                Ok(found) => {
                    info!(source = %source.name, count = found.len(), "found streams");
                    streams.extend(found);
                }
                Err(error) => {
                    warn!(source = %source.name, %error, "source failed, skipping");
                }
            }
        }

        if streams.is_empty() {
            info!("no streams found from any source, using fallback streams");
            streams = self
                .config
                .fallback_streams
                .iter()
                .cloned()
                .map(|seed| seed.into_record())
                .collect();
        }

        let mut streams = dedupe_streams(streams);
        streams.truncate(self.config.max_streams);
        finalize_streams(&mut streams, &self.config);
        streams
    }

    /// Fetches one source page and builds records for its iframes
    async fn scan_source(&self, url: &str, source_name: &str) -> Result<Vec<StreamRecord>> {
        let html = self.client.fetch(url).await?;
        let iframe_srcs = parse_iframe_sources(&html)?;

        let mut records = Vec::new();
        for src in iframe_srcs {
            if let Some(record) =
                build_stream_record(&src, source_name, records.len() + 1, &self.config)
            {
                records.push(record);
            }
        }
        Ok(records)
    }
}
