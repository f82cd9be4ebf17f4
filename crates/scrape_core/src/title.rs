const TITLE_OPEN: &str = "<title>";
const TITLE_CLOSE: &str = "</title>";

/// Sentinel returned when a body carries no usable title markers.
pub const NO_TITLE_FOUND: &str = "No title found";

/// Extracts the text between the first `<title>` and `</title>` markers.
///
/// This is a literal, case-sensitive substring scan, not an HTML parse:
/// no entity decoding, no nested-tag awareness. An empty title
/// (`<title></title>`) yields `""`, which is distinct from the
/// [`NO_TITLE_FOUND`] sentinel used when the markers are missing or
/// out of order.
pub fn extract_title(body: &str) -> String {
    let Some(open) = body.find(TITLE_OPEN) else {
        return NO_TITLE_FOUND.to_string();
    };
    let Some(close) = body.find(TITLE_CLOSE) else {
        return NO_TITLE_FOUND.to_string();
    };

    let text_start = open + TITLE_OPEN.len();
    if text_start > close {
        return NO_TITLE_FOUND.to_string();
    }
    body[text_start..close].to_string()
}
