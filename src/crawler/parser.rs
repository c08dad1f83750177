//! Textual link extraction
//!
//! Pages are scanned left-to-right for anchor markup; the quoted attribute
//! value after each `a href` marker is taken verbatim. This is deliberately
//! not a real HTML parse: malformed markup simply ends the scan.

/// Extracts the raw outbound links from a page body, in document order
pub fn extract_links(body: &str) -> Vec<String> {
    let mut links = Vec::new();
    let mut idx = 0;
    while let Some((link, next_idx)) = next_link(body, idx) {
        links.push(link);
        idx = next_idx;
    }
    links
}

/// Finds the next anchor marker at or after `idx`
///
/// Returns the quoted value following the marker and the index of its closing
/// quote, or `None` when no further complete anchor exists.
fn next_link(html: &str, idx: usize) -> Option<(String, usize)> {
    let rest = &html[idx..];
    let marker = rest.find("a href")?;
    let after_marker = &rest[marker..];

    let open = after_marker.find('"')?;
    let close = after_marker[open + 1..].find('"')? + open + 1;

    let link = after_marker[open + 1..close].to_string();
    Some((link, idx + marker + close))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_links() {
        assert!(extract_links("<html><body>plain text</body></html>").is_empty());
    }

    #[test]
    fn test_single_link() {
        let body = r#"<a href="https://x/a">A</a>"#;
        assert_eq!(extract_links(body), vec!["https://x/a".to_string()]);
    }

    #[test]
    fn test_links_in_document_order() {
        let body = r#"
            <p><a href="/first">1</a></p>
            <p><a href="/second">2</a></p>
            <p><a href="/third">3</a></p>
        "#;
        assert_eq!(
            extract_links(body),
            vec!["/first".to_string(), "/second".to_string(), "/third".to_string()]
        );
    }

    #[test]
    fn test_relative_and_fragment_links_kept_raw() {
        // Extraction is purely textual; filtering happens downstream.
        let body = r##"<a href="#top">top</a><a href="sub/page">sub</a>"##;
        assert_eq!(
            extract_links(body),
            vec!["#top".to_string(), "sub/page".to_string()]
        );
    }

    #[test]
    fn test_unterminated_quote_stops_scan() {
        let body = r#"<a href="/ok">ok</a><a href="/broken"#;
        assert_eq!(extract_links(body), vec!["/ok".to_string()]);
    }

    #[test]
    fn test_empty_href() {
        let body = r#"<a href="">empty</a><a href="/next">n</a>"#;
        assert_eq!(
            extract_links(body),
            vec!["".to_string(), "/next".to_string()]
        );
    }

    #[test]
    fn test_multibyte_text_between_anchors() {
        let body = r#"<a href="/a">łink</a> äöü <a href="/b">b</a>"#;
        assert_eq!(
            extract_links(body),
            vec!["/a".to_string(), "/b".to_string()]
        );
    }
}
