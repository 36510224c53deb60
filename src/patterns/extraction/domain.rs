use tracing::{debug, warn};

use super::url::extract_urls;
use crate::error::{ExtractError, Result};
use crate::MatchSet;

/// What to do with a URL whose host cannot be turned into a domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DomainPolicy {
    /// Log the URL and keep going with the others.
    #[default]
    Skip,
    /// Fail the whole call with `ExtractError::MalformedUrl`.
    Strict,
}

/// Extracts domains from every URL in `text`, skipping malformed hosts.
pub fn extract_domains(text: &str) -> MatchSet {
    let mut results = MatchSet::new();
    for url in extract_urls(text) {
        match registrable_domain(&url) {
            Ok(domain) => {
                results.insert(domain);
            }
            Err(err) => warn!(%url, error = %err, "skipping url without a usable host"),
        }
    }

    debug!(count = results.len(), "extracted domains");
    results
}

/// Extracts domains from every URL in `text` under the given policy.
pub fn extract_domains_with(text: &str, policy: DomainPolicy) -> Result<MatchSet> {
    match policy {
        DomainPolicy::Skip => Ok(extract_domains(text)),
        DomainPolicy::Strict => {
            let results = extract_urls(text)
                .iter()
                .map(|url| registrable_domain(url))
                .collect::<Result<MatchSet>>()?;
            debug!(count = results.len(), "extracted domains");
            Ok(results)
        }
    }
}

/// Trims the host of `url` down to its registrable-looking suffix.
///
/// The last two labels are kept, or the last three when the second-to-last
/// label is at most three characters long (`x.com.sg`, `bbc.co.uk`). This is
/// a length heuristic, not a public suffix lookup.
pub fn registrable_domain(url: &str) -> Result<String> {
    let host = host_of(url)?;
    let labels: Vec<&str> = host.split('.').collect();

    if labels.len() < 2 {
        return Err(ExtractError::malformed(url, format!("host {:?} has a single label", host)));
    }
    if labels.iter().any(|label| label.is_empty()) {
        return Err(ExtractError::malformed(url, format!("host {:?} has an empty label", host)));
    }

    let keep = if labels[labels.len() - 2].len() < 4 { 3 } else { 2 };
    let start = labels.len().saturating_sub(keep);
    Ok(labels[start..].join("."))
}

/// Lowercased host of `url`, without userinfo, port or a trailing dot.
///
/// Bare `www.`/`ftp.` matches have no scheme, so their authority starts at
/// the beginning of the string.
fn host_of(url: &str) -> Result<String> {
    let rest = match url.find("://") {
        Some(idx) if url[..idx].chars().all(|c| c.is_ascii_alphabetic()) => &url[idx + 3..],
        _ => url,
    };

    let authority = match rest.find(|c: char| matches!(c, '/' | '?' | '#')) {
        Some(end) => &rest[..end],
        None => rest,
    };
    let host_port = match authority.rfind('@') {
        Some(at) => &authority[at + 1..],
        None => authority,
    };
    let host = match host_port.find(':') {
        Some(colon) => &host_port[..colon],
        None => host_port,
    };
    let host = host.strip_suffix('.').unwrap_or(host);

    if host.is_empty() {
        return Err(ExtractError::malformed(url, "no host"));
    }
    Ok(host.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> MatchSet {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_two_label_rule() {
        assert_eq!(extract_domains("visit http://www.junda.com/about"), set(&["junda.com"]));
        assert_eq!(registrable_domain("https://mail.google.com").unwrap(), "google.com");
    }

    #[test]
    fn test_three_label_rule() {
        assert_eq!(extract_domains("http://x.com.sg/page"), set(&["x.com.sg"]));
        assert_eq!(registrable_domain("http://news.bbc.co.uk/").unwrap(), "bbc.co.uk");
        assert_eq!(registrable_domain("http://www.google.com.sg/url?q=1").unwrap(), "google.com.sg");
    }

    #[test]
    fn test_short_second_level_labels_pull_in_a_third() {
        // Known limitation: "t.co" is a registrable domain, but the heuristic
        // sees a one-letter label and keeps the subdomain too.
        assert_eq!(registrable_domain("https://go.t.co/x").unwrap(), "go.t.co");
        assert_eq!(registrable_domain("https://t.co/x").unwrap(), "t.co");
        // IPv4 hosts are not special-cased.
        assert_eq!(registrable_domain("http://192.168.1.1/admin").unwrap(), "168.1.1");
    }

    #[test]
    fn test_host_parsing() {
        assert_eq!(registrable_domain("http://user:pw@Shop.Example.COM:8080/x").unwrap(), "example.com");
        assert_eq!(registrable_domain("www.junda.com").unwrap(), "junda.com");
        assert_eq!(registrable_domain("ftp.example.org/pub").unwrap(), "example.org");
        assert_eq!(registrable_domain("https://example.com./").unwrap(), "example.com");
        assert_eq!(registrable_domain("https://example.com?q=a.b.c").unwrap(), "example.com");
        assert_eq!(registrable_domain("https://example.com#frag").unwrap(), "example.com");
        assert_eq!(registrable_domain("www.example.com/http://other.org").unwrap(), "example.com");
    }

    #[test]
    fn test_malformed_hosts() {
        let malformed = vec![
            "file:///etc/hosts",
            "http://localhost:3000",
            "http://user@:80/",
            "http://a..com",
        ];

        for url in malformed {
            assert!(
                matches!(registrable_domain(url), Err(ExtractError::MalformedUrl { .. })),
                "Should be malformed: {}",
                url
            );
        }
    }

    #[test]
    fn test_empty_label_is_rejected_not_trimmed() {
        // A plain split would hand "a..com" straight to the label rule.
        assert_eq!(
            registrable_domain("http://a..com/x").unwrap_err(),
            ExtractError::MalformedUrl {
                url: "http://a..com/x".to_string(),
                reason: "host \"a..com\" has an empty label".to_string(),
            }
        );
        assert_eq!(extract_domains("http://a..com/x www.junda.com"), set(&["junda.com"]));
    }

    #[test]
    fn test_skip_policy_keeps_other_urls() {
        let text = "file:///etc/hosts http://www.junda.com http://localhost:3000 http://x.com.sg";
        let expected = set(&["junda.com", "x.com.sg"]);
        assert_eq!(extract_domains(text), expected);
        assert_eq!(extract_domains_with(text, DomainPolicy::Skip).unwrap(), expected);
    }

    #[test]
    fn test_strict_policy_fails_the_call() {
        let text = "http://www.junda.com file:///etc/hosts";
        let err = extract_domains_with(text, DomainPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            ExtractError::MalformedUrl {
                url: "file:///etc/hosts".to_string(),
                reason: "no host".to_string(),
            }
        );
    }

    #[test]
    fn test_strict_policy_happy_path() {
        let text = "https://a.b.com http://a.b.org www.junda.com";
        assert_eq!(
            extract_domains_with(text, DomainPolicy::Strict).unwrap(),
            set(&["a.b.com", "a.b.org", "junda.com"])
        );
    }

    #[test]
    fn test_domains_deduplicate_across_urls() {
        let text = "http://www.junda.com/a https://shop.junda.com/b www.JUNDA.com";
        assert_eq!(extract_domains(text), set(&["junda.com"]));
    }
}
