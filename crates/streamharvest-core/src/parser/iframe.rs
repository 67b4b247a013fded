//! Iframe extraction
//!
//! Source pages advertise streams as third-party players inside
//! `<iframe>` elements. Only the `src` attribute is inspected; the rest
//! of the page is ignored.

use scraper::{Html, Selector};

use crate::error::{Result, ScrapeError};

/// Extracts the `src` attribute of every iframe in a page
///
/// Iframes without a `src`, or with an empty one, are skipped. Values
/// are returned raw, in document order; protocol normalization happens
/// later in the pipeline.
///
/// # Arguments
/// * `html` - Raw HTML string of the fetched page
///
/// # Errors
/// Returns `Parse` if the selector cannot be built
pub fn parse_iframe_sources(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("iframe")
        .map_err(|e| ScrapeError::Parse(format!("invalid selector: {:?}", e)))?;

    let mut sources = Vec::new();
    for element in document.select(&selector) {
        if let Some(src) = element.value().attr("src")
            && !src.is_empty()
        {
            sources.push(src.to_string());
        }
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_page() {
        let sources = parse_iframe_sources("<html><body></body></html>").unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_parse_multiple_iframes_in_document_order() {
        let html = r#"
        <html><body>
            <p>Watch live below:</p>
            <iframe src="https://player.twitch.tv/?channel=abc&parent=x"></iframe>
            <div>
                <iframe src="//ok.ru/videoembed/123"></iframe>
            </div>
        </body></html>
        "#;

        let sources = parse_iframe_sources(html).unwrap();
        assert_eq!(
            sources,
            vec![
                "https://player.twitch.tv/?channel=abc&parent=x".to_string(),
                "//ok.ru/videoembed/123".to_string(),
            ]
        );
    }

    #[test]
    fn test_iframes_without_src_are_skipped() {
        let html = r#"
        <html><body>
            <iframe></iframe>
            <iframe src=""></iframe>
            <iframe src="https://example.com/player"></iframe>
        </body></html>
        "#;

        let sources = parse_iframe_sources(html).unwrap();
        assert_eq!(sources, vec!["https://example.com/player".to_string()]);
    }
}
