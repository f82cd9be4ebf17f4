use pretty_assertions::assert_eq;
use scrape_core::{extract_title, TitleRecord, NO_TITLE_FOUND};

#[test]
fn extracts_enclosed_text_byte_for_byte() {
    let body = "<html><head><title>Example Domain</title></head><body></body></html>";
    assert_eq!(extract_title(body), "Example Domain");
}

#[test]
fn extracts_only_the_first_title_pair() {
    let body = "<title>First</title><title>Second</title>";
    assert_eq!(extract_title(body), "First");
}

#[test]
fn scan_is_literal_and_case_sensitive() {
    assert_eq!(extract_title("<TITLE>Shouty</TITLE>"), NO_TITLE_FOUND);
    // Attribute-bearing open tags do not match the literal marker.
    assert_eq!(extract_title("<title lang=\"en\">X</title>"), NO_TITLE_FOUND);
    // No entity decoding.
    assert_eq!(extract_title("<title>A &amp; B</title>"), "A &amp; B");
}

#[test]
fn missing_either_marker_yields_sentinel() {
    assert_eq!(extract_title(""), NO_TITLE_FOUND);
    assert_eq!(extract_title("<html>no tags</html>"), NO_TITLE_FOUND);
    assert_eq!(extract_title("<title>unterminated"), NO_TITLE_FOUND);
    assert_eq!(extract_title("dangling</title>"), NO_TITLE_FOUND);
}

#[test]
fn close_before_open_yields_sentinel() {
    assert_eq!(extract_title("</title>backwards<title>"), NO_TITLE_FOUND);
}

#[test]
fn adjacent_markers_yield_empty_string_not_sentinel() {
    assert_eq!(extract_title("<title></title>"), "");
}

#[test]
fn title_may_span_lines() {
    assert_eq!(extract_title("<title>Line one\nLine two</title>"), "Line one\nLine two");
}

#[test]
fn record_renders_in_report_format() {
    let record = TitleRecord::new("https://example.com", "Example Domain");
    assert_eq!(
        record.to_string(),
        "Data from https://example.com:\nTitle: Example Domain"
    );
}
