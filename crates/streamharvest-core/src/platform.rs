//! Streaming platform classification
//!
//! Maps raw embed URLs onto the fixed set of platforms the aggregator
//! understands. Classification is total: any URL matching no rule is
//! labelled [`Platform::Web`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Streaming platform hosting an embedded player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Twitch,
    #[serde(rename = "OK.ru")]
    OkRu,
    YouTube,
    Dailymotion,
    #[serde(rename = "HLS")]
    Hls,
    Web,
}

/// Ordered substring rules; the first matching rule wins
const PLATFORM_RULES: &[(&str, Platform)] = &[
    ("twitch.tv", Platform::Twitch),
    ("ok.ru", Platform::OkRu),
    ("youtube.com", Platform::YouTube),
    ("youtu.be", Platform::YouTube),
    ("dailymotion.com", Platform::Dailymotion),
    ("m3u8", Platform::Hls),
];

/// Channel logos shown by IPTV clients, for the platforms that have one
const PLATFORM_LOGOS: &[(Platform, &str)] = &[
    (
        Platform::Twitch,
        "https://static-cdn.jtvnw.net/ttv-static/404_boxart.jpg",
    ),
    (
        Platform::OkRu,
        "https://freelogopng.com/images/all_img/1656500907ok-ru-logo.png",
    ),
];

/// Detects the hosting platform of an embed URL
///
/// Case-insensitive substring matching against the fixed rule table.
/// Never fails; unmatched input yields [`Platform::Web`].
///
/// # Example
/// ```
/// use streamharvest_core::{classify, Platform};
/// assert_eq!(classify("https://player.twitch.tv/?channel=foo"), Platform::Twitch);
/// assert_eq!(classify("https://example.com/page"), Platform::Web);
/// ```
pub fn classify(url: &str) -> Platform {
    let lower = url.to_lowercase();
    PLATFORM_RULES
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, platform)| *platform)
        .unwrap_or(Platform::Web)
}

impl Platform {
    /// Display label, identical to the serialized form
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitch => "Twitch",
            Platform::OkRu => "OK.ru",
            Platform::YouTube => "YouTube",
            Platform::Dailymotion => "Dailymotion",
            Platform::Hls => "HLS",
            Platform::Web => "Web",
        }
    }

    /// Logo URL for playlist entries, when the platform has one
    pub fn logo_url(self) -> Option<&'static str> {
        PLATFORM_LOGOS
            .iter()
            .find(|(platform, _)| *platform == self)
            .map(|(_, logo)| *logo)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
