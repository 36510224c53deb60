use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    static ref URL_PATTERN: Regex = Regex::new(
        r"^(?:(?i:https?|ftp|file)://|(?i:www|ftp)\.)[-A-Za-z0-9+&@#/%=~_|$?!:,.]*[-A-Za-z0-9+&@#/%=~_|$]$"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    URL_PATTERN.is_match(value)
}

pub struct UrlMatcher {}

impl PatternMatcher for UrlMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}
