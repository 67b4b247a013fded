//! Stream record construction, deduplication, and finalization
//!
//! The builder turns one discovered iframe URL into a normalized
//! [`StreamRecord`]; dedup collapses repeats; finalization assigns ids
//! and TVG metadata once the output order is settled.

use std::collections::HashSet;

use crate::config::AggregatorConfig;
use crate::platform::{self, Platform};
use crate::types::StreamRecord;
use crate::url::{extract_channel, normalize_embed_url, resolve_direct_url};

/// Builds a record for one iframe `src` discovered on a source page
///
/// Sequence: normalize protocol, classify platform, extract channel,
/// resolve direct URL, assemble. The placeholder name uses `position`,
/// the 1-based position of the stream within its page, and is overridden
/// with the channel name for Twitch streams where one was extracted.
///
/// Returns `None` for an empty `src`; this is the only filtering rule.
pub fn build_stream_record(
    src: &str,
    source_name: &str,
    position: usize,
    config: &AggregatorConfig,
) -> Option<StreamRecord> {
    if src.is_empty() {
        return None;
    }

    let url = normalize_embed_url(src);
    let platform = platform::classify(&url);
    let channel = extract_channel(&url, platform);
    let direct_url = resolve_direct_url(&url, platform, &channel, &config.web_player_url);

    let name = if platform == Platform::Twitch && !channel.is_empty() {
        format!("{} - {}", config.label, channel)
    } else {
        format!("{} Stream {}", config.label, position)
    };

    Some(StreamRecord {
        name,
        url: url.clone(),
        platform,
        channel,
        embed_url: url,
        direct_url,
        kind: "embedded".to_string(),
        quality: "adaptive".to_string(),
        source: source_name.to_string(),
        id: 0,
        tvg_id: String::new(),
        tvg_name: String::new(),
        group_title: String::new(),
    })
}

/// Collapses records sharing a `url`, keeping the first occurrence
///
/// Stable: surviving records keep their accumulation order. The key is
/// the exact URL string; no trailing-slash, case, or query-order
/// canonicalization is applied, so trivially-different URLs stay
/// distinct. Callers that need canonical keys must pre-normalize.
pub fn dedupe_streams(streams: Vec<StreamRecord>) -> Vec<StreamRecord> {
    let mut seen = HashSet::new();
    streams
        .into_iter()
        .filter(|stream| seen.insert(stream.url.clone()))
        .collect()
}

/// Assigns ids and TVG metadata in final output order
///
/// Ids are dense 1-based integers; `tvg_id` appends the id to the
/// configured prefix, `tvg_name` combines the label with the platform,
/// and `group_title` is shared by every record of the run.
pub fn finalize_streams(streams: &mut [StreamRecord], config: &AggregatorConfig) {
    for (index, stream) in streams.iter_mut().enumerate() {
        let id = (index + 1) as u32;
        stream.id = id;
        stream.tvg_id = format!("{}{}", config.tvg_id_prefix, id);
        stream.tvg_name = format!("{} {}", config.label, stream.platform);
        stream.group_title = config.group_title.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_config() -> AggregatorConfig {
        AggregatorConfig::default()
    }

    fn record_with_url(url: &str) -> StreamRecord {
        build_stream_record(url, "TestSource", 1, &test_config()).unwrap()
    }

    #[test]
    fn test_build_twitch_record_with_channel() {
        let record = build_stream_record(
            "https://player.twitch.tv/?channel=foo123&parent=x",
            "TamilCrow",
            1,
            &test_config(),
        )
        .unwrap();

        assert_eq!(record.platform, Platform::Twitch);
        assert_eq!(record.channel, "foo123");
        assert_eq!(record.name, "Bigg Boss - foo123");
        assert_eq!(record.direct_url, "https://www.twitch.tv/foo123");
        assert_eq!(record.kind, "embedded");
        assert_eq!(record.quality, "adaptive");
        assert_eq!(record.source, "TamilCrow");
        assert_eq!(record.url, record.embed_url);
    }

    #[test]
    fn test_build_normalizes_protocol_relative_url() {
        let record = build_stream_record("//ok.ru/videoembed/123", "TamilCrow", 2, &test_config())
            .unwrap();

        assert_eq!(record.url, "https://ok.ru/videoembed/123");
        assert_eq!(record.platform, Platform::OkRu);
        // OK.ru has no channel, so the positional placeholder is kept.
        assert_eq!(record.name, "Bigg Boss Stream 2");
        assert_eq!(
            record.direct_url,
            "https://durgaa17.github.io/bblive9/player.html?source=okru"
        );
    }

    #[test]
    fn test_build_skips_empty_src() {
        assert!(build_stream_record("", "TamilCrow", 1, &test_config()).is_none());
    }

    #[test]
    fn test_dedupe_first_occurrence_wins() {
        let streams = vec![
            record_with_url("https://a.example/1"),
            record_with_url("https://b.example/2"),
            record_with_url("https://a.example/1"),
            record_with_url("https://c.example/3"),
        ];

        let deduped = dedupe_streams(streams);
        let urls: Vec<&str> = deduped.iter().map(|s| s.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["https://a.example/1", "https://b.example/2", "https://c.example/3"]
        );
    }

    #[test]
    fn test_dedupe_treats_trivial_variants_as_distinct() {
        // Exact string equality only; this is a documented limitation.
        let streams = vec![
            record_with_url("https://a.example/live"),
            record_with_url("https://a.example/live/"),
        ];
        assert_eq!(dedupe_streams(streams).len(), 2);
    }

    #[test]
    fn test_finalize_assigns_dense_ids_and_tvg_metadata() {
        let mut streams = vec![
            record_with_url("https://player.twitch.tv/?channel=foo&parent=x"),
            record_with_url("https://ok.ru/videoembed/123"),
        ];

        finalize_streams(&mut streams, &test_config());

        assert_eq!(streams[0].id, 1);
        assert_eq!(streams[0].tvg_id, "BiggBoss1");
        assert_eq!(streams[0].tvg_name, "Bigg Boss Twitch");
        assert_eq!(streams[0].group_title, "Bigg Boss Tamil S9");

        assert_eq!(streams[1].id, 2);
        assert_eq!(streams[1].tvg_id, "BiggBoss2");
        assert_eq!(streams[1].tvg_name, "Bigg Boss OK.ru");
    }

    proptest! {
        #[test]
        fn test_dedupe_never_grows_and_has_unique_urls(urls in proptest::collection::vec("[a-z]{1,6}", 0..20)) {
            let streams: Vec<StreamRecord> = urls
                .iter()
                .map(|u| record_with_url(&format!("https://x.example/{}", u)))
                .collect();
            let input_len = streams.len();

            let deduped = dedupe_streams(streams);
            prop_assert!(deduped.len() <= input_len);

            let mut seen = std::collections::HashSet::new();
            for stream in &deduped {
                prop_assert!(seen.insert(stream.url.clone()));
            }
        }
    }
}
