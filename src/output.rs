use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::OutputError;
use crate::{ExtractionKind, MatchSet};

/// Where the results for `kind` go: `<stem> - <kind>.csv`.
///
/// `<stem>` is the input file name up to its first `.`, so `notes.v2.txt`
/// becomes `notes - email.csv`. The file lands next to the input unless
/// `out_dir` is given.
pub fn output_path(input: &Path, kind: ExtractionKind, out_dir: Option<&Path>) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();

    let dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    dir.join(format!("{} - {}.csv", stem, kind.label()))
}

/// Writes one value per line, without a trailing newline.
pub fn write_match_set(path: &Path, values: &MatchSet) -> Result<(), OutputError> {
    let contents = values.iter().map(String::as_str).collect::<Vec<_>>().join("\n");
    fs::write(path, contents).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), count = values.len(), "wrote match set");
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub source: String,
    pub results: BTreeMap<&'static str, &'a MatchSet>,
}

impl<'a> Report<'a> {
    pub fn new(source: impl Into<String>) -> Self {
        Report {
            source: source.into(),
            results: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, kind: ExtractionKind, values: &'a MatchSet) {
        self.results.insert(kind.label(), values);
    }
}

/// Writes the combined JSON report for every kind that ran.
pub fn write_json_report(path: &Path, report: &Report<'_>) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "wrote json report");
    Ok(())
}
