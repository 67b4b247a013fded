//! URL helpers: protocol normalization, channel extraction, direct-URL
//! resolution
//!
//! Embeddable iframe URLs are frequently unusable directly by IPTV
//! clients; these helpers rewrite them into navigable equivalents.

use regex::Regex;

use crate::platform::Platform;

/// Rewrites a protocol-relative URL (`//host/...`) to `https://`
///
/// Any other input passes through unchanged.
///
/// # Example
/// ```
/// use streamharvest_core::normalize_embed_url;
/// assert_eq!(
///     normalize_embed_url("//ok.ru/videoembed/123"),
///     "https://ok.ru/videoembed/123"
/// );
/// ```
pub fn normalize_embed_url(src: &str) -> String {
    if let Some(rest) = src.strip_prefix("//") {
        format!("https://{}", rest)
    } else {
        src.to_string()
    }
}

/// Extracts the channel identifier from a stream URL
///
/// Only meaningful for Twitch; every other platform yields `""`.
/// Embed URLs carry the channel as a `channel=` query parameter, channel
/// page URLs carry it as the path segment after `twitch.tv/`. Malformed
/// URLs yield `""` rather than an error.
///
/// # Example
/// ```
/// use streamharvest_core::{extract_channel, Platform};
/// let url = "https://player.twitch.tv/?channel=foo123&parent=x";
/// assert_eq!(extract_channel(url, Platform::Twitch), "foo123");
/// ```
pub fn extract_channel(url: &str, platform: Platform) -> String {
    if platform != Platform::Twitch {
        return String::new();
    }

    if url.contains("channel=")
        && let Ok(re) = Regex::new(r"channel=([^&]*)")
        && let Some(caps) = re.captures(url)
    {
        return caps[1].to_string();
    }

    if let Some((_, rest)) = url.split_once("twitch.tv/") {
        return rest.split(['?', '/']).next().unwrap_or_default().to_string();
    }

    String::new()
}

/// Resolves the URL an IPTV client should be handed for a stream
///
/// Twitch embeds resolve to the canonical channel page when a channel is
/// known. OK.ru embeds require a JavaScript-capable player shim that IPTV
/// clients lack, so they resolve to the hosted web player regardless of
/// input. Everything else passes through.
pub fn resolve_direct_url(
    url: &str,
    platform: Platform,
    channel: &str,
    web_player_url: &str,
) -> String {
    match platform {
        Platform::Twitch if !channel.is_empty() => {
            format!("https://www.twitch.tv/{}", channel)
        }
        Platform::OkRu => format!("{}?source=okru", web_player_url),
        _ => url.to_string(),
    }
}
