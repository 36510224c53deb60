use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    // Two or three lowercase labels, as produced by domain extraction
    static ref DOMAIN_PATTERN: Regex = Regex::new(
        r"^[-a-z0-9+&%=~_|$!,]+(?:\.[-a-z0-9+&%=~_|$!,]+){1,2}$"
    ).unwrap();
}

/// Whether `value` has the shape of a trimmed domain.
///
/// Three labels are only produced when the middle one is short, so
/// `mail.google.com` is rejected while `x.com.sg` is accepted.
pub fn is_match(value: &str) -> bool {
    if !DOMAIN_PATTERN.is_match(value) {
        return false;
    }

    let labels: Vec<&str> = value.split('.').collect();
    labels.len() == 2 || labels[1].len() < 4
}

pub struct DomainMatcher {}

impl PatternMatcher for DomainMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}
