use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    static ref SG_MOBILE_PATTERN: Regex = Regex::new(r"^[89][0-9]{7}$").unwrap();
}

pub fn is_match(value: &str) -> bool {
    SG_MOBILE_PATTERN.is_match(value)
}

pub struct MobileMatcher {}

impl PatternMatcher for MobileMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}
