//! Scrape core: pure title extraction and record formatting.
mod record;
mod title;

pub use record::TitleRecord;
pub use title::{extract_title, NO_TITLE_FOUND};
