use regex::Regex;
use lazy_static::lazy_static;
use tracing::debug;

use crate::MatchSet;

lazy_static! {
    // Trailing ? ! : , . are allowed inside a URL but never end one
    static ref URL_EXTRACTION_PATTERN: Regex = Regex::new(
        r"(?:(?i:https?|ftp|file)://|(?i:www|ftp)\.)[-A-Za-z0-9+&@#/%=~_|$?!:,.]*[-A-Za-z0-9+&@#/%=~_|$]"
    ).unwrap();
}

pub fn extract_urls(text: &str) -> MatchSet {
    let results: MatchSet = URL_EXTRACTION_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    debug!(count = results.len(), "extracted urls");
    results
}
