//! Live-Stream Aggregator Core Library
//!
//! Scans web pages advertising live video streams, extracts embedded
//! players, classifies them by hosting platform, and renders the result
//! as a JSON report plus M3U playlists for IPTV players.
//!
//! # Overview
//!
//! This crate provides the whole aggregation pipeline:
//! - HTTP client with a fixed identifying header and per-request timeout
//! - Iframe parser pulling player URLs out of fetched pages
//! - Platform classification, channel extraction, and direct-URL
//!   resolution for embeds that IPTV clients cannot play as-is
//! - Deduplication, truncation, and TVG metadata finalization
//! - M3U and JSON serializers for the finished collection
//!
//! # Example
//!
//! ```no_run
//! use streamharvest_core::{
//!     render_direct_playlist, AggregatorConfig, StreamAggregator, StreamReport,
//! };
//!
//! #[tokio::main]
//! async fn main() -> streamharvest_core::Result<()> {
//!     let aggregator = StreamAggregator::new(AggregatorConfig::default())?;
//!
//!     let streams = aggregator.collect_streams().await;
//!     for stream in &streams {
//!         println!("{} ({})", stream.name, stream.platform);
//!     }
//!
//!     let playlist = render_direct_playlist(&streams);
//!     let report = StreamReport::new(streams);
//!     println!("{} streams\n{}", report.total_sources, playlist);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failure model
//!
//! A source that cannot be fetched or parsed is logged and skipped; one
//! source never aborts a run. A run where every source comes up empty
//! substitutes the configured fallback streams instead of failing.

mod aggregator;
mod client;
pub mod config;
mod error;
pub mod parser;
mod platform;
pub mod playlist;
mod record;
mod report;
mod types;
pub mod url;

// Re-export the high-level aggregation API
pub use aggregator::StreamAggregator;

// Re-export client types
pub use client::{ClientConfig, PageClient};

// Re-export configuration types
pub use config::{AggregatorConfig, FallbackStream, StreamSource};

// Re-export error types
pub use error::{Result, ScrapeError};

// Re-export parser functions
pub use parser::parse_iframe_sources;

// Re-export classification and record helpers
pub use platform::{Platform, classify};
pub use record::{build_stream_record, dedupe_streams, finalize_streams};

// Re-export serializers and the run report
pub use playlist::{render_direct_playlist, render_web_playlist};
pub use report::{REPORT_VERSION, ReportStatus, StreamReport};

// Re-export data types
pub use types::StreamRecord;

// Re-export URL helper functions for convenience
pub use url::{extract_channel, normalize_embed_url, resolve_direct_url};
