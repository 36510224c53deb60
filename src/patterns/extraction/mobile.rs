use regex::Regex;
use lazy_static::lazy_static;
use tracing::debug;

use crate::MatchSet;

lazy_static! {
    // Singapore mobiles: starts with 8 or 9, 8 digits long
    static ref SG_MOBILE_EXTRACTION_PATTERN: Regex = Regex::new(r"[89][0-9]{7}").unwrap();
}

/// Extracts Singapore mobile numbers.
///
/// The pattern is deliberately simple: any run of eight digits starting with
/// 8 or 9, scanned left to right without overlap.
pub fn extract_sg_mobile(text: &str) -> MatchSet {
    let results: MatchSet = SG_MOBILE_EXTRACTION_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    debug!(count = results.len(), "extracted mobile numbers");
    results
}
