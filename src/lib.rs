pub mod error;
pub mod mcp_server;
pub mod output;
pub mod patterns;

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use patterns::PatternMatcher;

pub use error::{ExtractError, OutputError, Result};
pub use patterns::extraction::domain::{
    extract_domains, extract_domains_with, registrable_domain, DomainPolicy,
};
pub use patterns::extraction::email::extract_emails;
pub use patterns::extraction::mobile::extract_sg_mobile;
pub use patterns::extraction::normalize::normalize_for_email;
pub use patterns::extraction::url::extract_urls;

/// Deduplicated result of one extraction pass, ordered for stable output.
pub type MatchSet = BTreeSet<String>;

/// The kinds of token that can be pulled out of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExtractionKind {
    Email,
    Url,
    Domain,
    Mobile,
}

impl ExtractionKind {
    pub const ALL: [ExtractionKind; 4] = [
        ExtractionKind::Email,
        ExtractionKind::Url,
        ExtractionKind::Domain,
        ExtractionKind::Mobile,
    ];

    /// Stable lowercase name, used in output file names and reports.
    pub fn label(self) -> &'static str {
        match self {
            ExtractionKind::Email => "email",
            ExtractionKind::Url => "url",
            ExtractionKind::Domain => "domain",
            ExtractionKind::Mobile => "mobile",
        }
    }

    /// Plural noun for user-facing counts.
    pub fn plural(self) -> &'static str {
        match self {
            ExtractionKind::Email => "emails",
            ExtractionKind::Url => "URLs",
            ExtractionKind::Domain => "domains",
            ExtractionKind::Mobile => "mobile numbers",
        }
    }
}

impl fmt::Display for ExtractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExtractionKind {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" | "emails" => Ok(ExtractionKind::Email),
            "url" | "urls" => Ok(ExtractionKind::Url),
            "domain" | "domains" => Ok(ExtractionKind::Domain),
            "mobile" | "phone" => Ok(ExtractionKind::Mobile),
            _ => Err(ExtractError::UnknownKind(s.to_string())),
        }
    }
}

/// Parses a comma-separated kind list. An empty list means every kind.
pub fn parse_kinds(list: &str) -> Result<Vec<ExtractionKind>> {
    let mut kinds = Vec::new();
    for part in list.split(',').filter(|p| !p.trim().is_empty()) {
        let kind: ExtractionKind = part.parse()?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }

    if kinds.is_empty() {
        return Ok(ExtractionKind::ALL.to_vec());
    }
    Ok(kinds)
}

/// Knobs for a single extraction call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub domain_policy: DomainPolicy,
}

/// Runs the extractor for `kind` over `text`.
///
/// Only domain extraction under `DomainPolicy::Strict` can fail.
pub fn extract(kind: ExtractionKind, text: &str, options: &ExtractOptions) -> Result<MatchSet> {
    match kind {
        ExtractionKind::Email => Ok(extract_emails(text)),
        ExtractionKind::Url => Ok(extract_urls(text)),
        ExtractionKind::Domain => extract_domains_with(text, options.domain_policy),
        ExtractionKind::Mobile => Ok(extract_sg_mobile(text)),
    }
}

/// Returns every kind whose whole-value pattern `value` satisfies.
pub fn classify(value: &str) -> Vec<ExtractionKind> {
    if value.is_empty() {
        return vec![];
    }

    let matchers = get_all_matchers();
    ExtractionKind::ALL
        .iter()
        .copied()
        .filter(|kind| matchers.get(kind).is_some_and(|m| m.matches(value)))
        .collect()
}

pub fn get_all_matchers() -> HashMap<ExtractionKind, Box<dyn PatternMatcher>> {
    let mut matchers: HashMap<ExtractionKind, Box<dyn PatternMatcher>> = HashMap::new();

    matchers.insert(ExtractionKind::Email, Box::new(patterns::email::EmailMatcher {}));
    matchers.insert(ExtractionKind::Url, Box::new(patterns::url::UrlMatcher {}));
    matchers.insert(ExtractionKind::Domain, Box::new(patterns::domain::DomainMatcher {}));
    matchers.insert(ExtractionKind::Mobile, Box::new(patterns::mobile::MobileMatcher {}));

    matchers
}
