use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    // [at] (at) <at> /at/ -at- [@] and bare " at ". Runs of opening and
    // closing separators on either side fold into the one marker.
    static ref AT_MARKER: Regex = Regex::new(
        r"(?i)(?:\s*[\[(</-])*\s*(?:at|@)(?:\s*[\])>/-])*\s*"
    ).unwrap();

    // Same shapes for "dot" and "."
    static ref DOT_MARKER: Regex = Regex::new(
        r"(?i)(?:\s*[\[(</-])*\s*(?:dot|\.)(?:\s*[\])>/-])*\s*"
    ).unwrap();
}

/// Rewrites obfuscated "at"/"dot" markers into literal `@` and `.`.
///
/// The `at` rule runs first and the `dot` rule runs on its output, one linear
/// pass each. Every separator touching a marker is absorbed by that pass, so a
/// second call finds nothing left to fold:
/// `normalize_for_email(normalize_for_email(s)) == normalize_for_email(s)`.
///
/// Markers are matched anywhere, including inside words: `data` becomes
/// `d@a` and `anecdote` becomes `anec.e`.
pub fn normalize_for_email(text: &str) -> String {
    let at = AT_MARKER.replace_all(text, "@");
    DOT_MARKER.replace_all(&at, ".").into_owned()
}
