//! Core data types for the stream aggregator

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// One discovered live stream, normalized for playlist output
///
/// Built fresh per run from scraped pages or fallback configuration.
/// Immutable once built, except for `id` and the TVG fields, which are
/// assigned by the finalization pass over the deduplicated collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamRecord {
    /// Human-readable display label
    pub name: String,

    /// Raw embeddable URL, protocol-normalized; the deduplication key
    pub url: String,

    /// Hosting platform detected from the URL
    pub platform: Platform,

    /// Channel identifier when extractable, empty otherwise
    pub channel: String,

    /// Identical to `url`; kept separate for players that distinguish them
    pub embed_url: String,

    /// URL usable outside an iframe embedding context
    pub direct_url: String,

    /// Provenance tag ("embedded" for scraped records; fallback seeds
    /// carry their own). Informational only.
    #[serde(rename = "type")]
    pub kind: String,

    /// Free-text quality hint ("adaptive", "live"). Informational only.
    pub quality: String,

    /// Display name of the originating source page
    pub source: String,

    /// Sequential 1-based id, assigned in final output order
    #[serde(default)]
    pub id: u32,

    /// TVG channel id for IPTV clients
    #[serde(default)]
    pub tvg_id: String,

    /// TVG display name for IPTV clients
    #[serde(default)]
    pub tvg_name: String,

    /// Playlist group shared by every entry of a run
    #[serde(default)]
    pub group_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> StreamRecord {
        StreamRecord {
            name: "Bigg Boss - foo123".to_string(),
            url: "https://player.twitch.tv/?channel=foo123&parent=x".to_string(),
            platform: Platform::Twitch,
            channel: "foo123".to_string(),
            embed_url: "https://player.twitch.tv/?channel=foo123&parent=x".to_string(),
            direct_url: "https://www.twitch.tv/foo123".to_string(),
            kind: "embedded".to_string(),
            quality: "adaptive".to_string(),
            source: "TamilCrow".to_string(),
            id: 1,
            tvg_id: "BiggBoss1".to_string(),
            tvg_name: "Bigg Boss Twitch".to_string(),
            group_title: "Bigg Boss Tamil S9".to_string(),
        }
    }

    #[test]
    fn test_stream_record_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).expect("Serialization should succeed");
        let deserialized: StreamRecord =
            serde_json::from_str(&json).expect("Deserialization should succeed");
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"embedded\""));
        assert!(!json.contains("\"kind\""));
    }

    #[test]
    fn test_platform_serializes_as_label() {
        let mut record = sample_record();
        record.platform = Platform::OkRu;
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"platform\":\"OK.ru\""));
    }
}
