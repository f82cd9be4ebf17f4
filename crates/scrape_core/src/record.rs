use std::fmt;

/// One scraped page's result: the source URL and its extracted title
/// (or the extractor's sentinel).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TitleRecord {
    pub url: String,
    pub title: String,
}

impl TitleRecord {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

impl fmt::Display for TitleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Data from {}:\nTitle: {}", self.url, self.title)
    }
}
