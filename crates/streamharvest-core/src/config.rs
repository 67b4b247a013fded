//! Aggregator configuration
//!
//! Every knob for a run lives here: the source pages to scan, the
//! fallback streams substituted when scanning comes up empty, display
//! metadata, and output limits. The defaults describe the Bigg Boss
//! Tamil season 9 configuration this aggregator ships with; tests and
//! embedders inject their own.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;
use crate::types::StreamRecord;

/// One page scanned for embedded players
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamSource {
    /// Display name recorded as stream provenance
    pub name: String,
    /// Page URL to fetch
    pub url: String,
}

impl StreamSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Seed definition for a fallback stream
///
/// Carries everything a [`StreamRecord`] needs except `id` and the TVG
/// fields, which the finalization pass assigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackStream {
    pub name: String,
    pub url: String,
    pub platform: Platform,
    pub channel: String,
    pub direct_url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub quality: String,
    pub source: String,
}

impl FallbackStream {
    /// Expands the seed into an unfinalized record
    pub fn into_record(self) -> StreamRecord {
        StreamRecord {
            name: self.name,
            url: self.url.clone(),
            platform: self.platform,
            channel: self.channel,
            embed_url: self.url,
            direct_url: self.direct_url,
            kind: self.kind,
            quality: self.quality,
            source: self.source,
            id: 0,
            tvg_id: String::new(),
            tvg_name: String::new(),
            group_title: String::new(),
        }
    }
}

/// Configuration for one aggregation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Pages scanned for embedded players, in priority order
    pub sources: Vec<StreamSource>,
    /// Streams substituted when no source yields anything
    pub fallback_streams: Vec<FallbackStream>,
    /// Display label prefixed to generated stream names
    pub label: String,
    /// `tvg-id` prefix; the record id is appended
    pub tvg_id_prefix: String,
    /// `group-title` applied to every playlist entry
    pub group_title: String,
    /// Hosted HTML player used for OK.ru embeds and the web playlist
    pub web_player_url: String,
    /// Hard cap on emitted records
    pub max_streams: usize,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            sources: vec![
                StreamSource::new(
                    "TamilCrow",
                    "https://www.1tamilcrow.net/watch-bigg-boss-tamil-season-9-live-stream/",
                ),
                StreamSource::new("Arivumani", "https://arivumani.net/bigg-boss-season-9-live/"),
            ],
            fallback_streams: default_fallback_streams(),
            label: "Bigg Boss".to_string(),
            tvg_id_prefix: "BiggBoss".to_string(),
            group_title: "Bigg Boss Tamil S9".to_string(),
            web_player_url: "https://durgaa17.github.io/bblive9/player.html".to_string(),
            max_streams: 8,
            timeout_secs: 15,
        }
    }
}

/// Known-good streams used when every source page comes up empty
fn default_fallback_streams() -> Vec<FallbackStream> {
    vec![
        FallbackStream {
            name: "Bigg Boss - Arivumani 1076".to_string(),
            url: "https://player.twitch.tv/?channel=arivumani1076&parent=www.1tamilcrow.net"
                .to_string(),
            platform: Platform::Twitch,
            channel: "arivumani1076".to_string(),
            direct_url: "https://www.twitch.tv/arivumani1076".to_string(),
            kind: "twitch".to_string(),
            quality: "live".to_string(),
            source: "TamilCrow".to_string(),
        },
        FallbackStream {
            name: "Bigg Boss - Arivumani 1075".to_string(),
            url: "https://player.twitch.tv/?channel=arivumani1075&parent=www.1tamilcrow.net"
                .to_string(),
            platform: Platform::Twitch,
            channel: "arivumani1075".to_string(),
            direct_url: "https://www.twitch.tv/arivumani1075".to_string(),
            kind: "twitch".to_string(),
            quality: "live".to_string(),
            source: "TamilCrow".to_string(),
        },
        FallbackStream {
            name: "Bigg Boss - OK.ru".to_string(),
            url: "https://ok.ru/videoembed/9484647407325?nochat=1".to_string(),
            platform: Platform::OkRu,
            channel: String::new(),
            direct_url: "https://durgaa17.github.io/bblive9/player.html?source=okru".to_string(),
            kind: "okru".to_string(),
            quality: "adaptive".to_string(),
            source: "TamilCrow".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_shape() {
        let config = AggregatorConfig::default();
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.fallback_streams.len(), 3);
        assert_eq!(config.max_streams, 8);
        assert_eq!(config.timeout_secs, 15);
    }

    #[test]
    fn test_fallback_seed_expands_to_unfinalized_record() {
        let seed = default_fallback_streams().remove(2);
        let record = seed.into_record();
        assert_eq!(record.platform, Platform::OkRu);
        assert_eq!(record.url, record.embed_url);
        assert_eq!(record.kind, "okru");
        assert_eq!(record.id, 0);
        assert!(record.tvg_id.is_empty());
        assert!(record.group_title.is_empty());
    }

    #[test]
    fn test_config_round_trip() {
        let config = AggregatorConfig::default();
        let json = serde_json::to_string(&config).expect("Serialization should succeed");
        let deserialized: AggregatorConfig =
            serde_json::from_str(&json).expect("Deserialization should succeed");
        assert_eq!(deserialized.sources.len(), config.sources.len());
        assert_eq!(deserialized.group_title, config.group_title);
    }
}
