use regex::Regex;
use lazy_static::lazy_static;
use tracing::debug;

use super::normalize::normalize_for_email;
use crate::MatchSet;

lazy_static! {
    static ref EMAIL_EXTRACTION_PATTERN: Regex = Regex::new(
        r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}"
    ).unwrap();
}

/// Extracts every email address from `text`, including common obfuscations.
///
/// It is impossible to cover every obfuscation, but the usual bracket and
/// spelled-out forms are normalized before matching.
pub fn extract_emails(text: &str) -> MatchSet {
    let cleaned = normalize_for_email(text);

    let results: MatchSet = EMAIL_EXTRACTION_PATTERN
        .find_iter(&cleaned)
        .map(|m| m.as_str().to_string())
        .collect();

    debug!(count = results.len(), "extracted emails");
    results
}
