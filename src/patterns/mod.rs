pub mod domain;
pub mod email;
pub mod extraction;
pub mod mobile;
pub mod url;

/// Whole-value check for one kind of token.
pub trait PatternMatcher: Send + Sync {
    fn matches(&self, value: &str) -> bool;
}
