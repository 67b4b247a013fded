//! Batch entry point for the stream aggregator
//!
//! Runs one aggregation pass with the default configuration and writes
//! three artifacts into the working directory: `streams.json`, the
//! direct playlist `playlist.m3u`, and the web-player playlist
//! `playlist_web.m3u`. Takes no flags; each run is a full refresh.

use streamharvest_core::{
    AggregatorConfig, StreamAggregator, StreamReport, render_direct_playlist, render_web_playlist,
};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod error;

use error::AppError;

const STREAMS_JSON: &str = "streams.json";
const PLAYLIST_DIRECT: &str = "playlist.m3u";
const PLAYLIST_WEB: &str = "playlist_web.m3u";

fn main() {
    if let Err(e) = bootstrap() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[tokio::main]
async fn bootstrap() -> Result<(), AppError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Initialization(e.to_string()))?;

    let config = AggregatorConfig::default();
    let web_player_url = config.web_player_url.clone();

    info!(sources = config.sources.len(), "fetching best streams");
    let aggregator = StreamAggregator::new(config)?;
    let streams = aggregator.collect_streams().await;

    let report = StreamReport::new(streams);
    std::fs::write(STREAMS_JSON, serde_json::to_string_pretty(&report)?)?;
    std::fs::write(PLAYLIST_DIRECT, render_direct_playlist(&report.sources))?;
    std::fs::write(PLAYLIST_WEB, render_web_playlist(&report.sources, &web_player_url))?;

    info!(
        total = report.total_sources,
        files = ?[STREAMS_JSON, PLAYLIST_DIRECT, PLAYLIST_WEB],
        "run complete"
    );
    for stream in &report.sources {
        info!("  {} ({})", stream.name, stream.platform);
    }

    Ok(())
}
