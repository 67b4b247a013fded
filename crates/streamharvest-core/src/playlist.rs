//! M3U playlist serialization
//!
//! Two independent renderers over a finalized stream collection: the
//! direct variant points players at each stream's resolved URL, the web
//! variant routes every entry through the hosted web player.

use crate::types::StreamRecord;

const HEADER: &str = "#EXTM3U";

/// Builds the `#EXTINF` metadata line for one stream
fn extinf_line(stream: &StreamRecord, with_logo: bool) -> String {
    let mut line = format!(
        "#EXTINF:-1 tvg-id=\"{}\" tvg-name=\"{}\" group-title=\"{}\"",
        stream.tvg_id, stream.tvg_name, stream.group_title
    );

    if with_logo && let Some(logo) = stream.platform.logo_url() {
        line.push_str(&format!(" tvg-logo=\"{}\"", logo));
    }

    line.push_str(&format!(",{} ({})", stream.name, stream.platform));
    line
}

/// Renders the playlist using each stream's resolved direct URL
///
/// The `tvg-logo` attribute is emitted only for platforms with a known
/// logo mapping.
pub fn render_direct_playlist(streams: &[StreamRecord]) -> String {
    let mut lines = vec![HEADER.to_string()];
    for stream in streams {
        lines.push(extinf_line(stream, true));
        lines.push(stream.direct_url.clone());
    }
    lines.join("\n")
}

/// Renders the playlist with every entry routed through the web player
///
/// Entry URLs take the form `<web-player-url>?stream=<id>`; no logo
/// attribute is emitted.
pub fn render_web_playlist(streams: &[StreamRecord], web_player_url: &str) -> String {
    let mut lines = vec![HEADER.to_string()];
    for stream in streams {
        lines.push(extinf_line(stream, false));
        lines.push(format!("{}?stream={}", web_player_url, stream.id));
    }
    lines.join("\n")
}
