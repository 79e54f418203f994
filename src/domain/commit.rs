use regex::Regex;

use crate::error::{ProjectVersionError, Result};

/// Pattern matching a pull-request back-reference appended by squash-merge
/// workflows, e.g. " (#123)" plus anything after it.
const PULL_REQUEST_REFERENCE_PATTERN: &str = r"\s+\(#\d+\).*";

/// Extract a release title from a raw commit message.
///
/// Takes only the first line of the message, lower-cases its first character
/// and strips a trailing pull-request back-reference. The result is used as
/// the human-readable part of a release name.
///
/// An empty commit summary is a malformed input, not a panic.
pub fn release_title(commit_message: &str) -> Result<String> {
    let summary = commit_message.lines().next().unwrap_or("");

    let mut chars = summary.chars();
    let first = chars.next().ok_or_else(|| {
        ProjectVersionError::version("Commit message summary is empty".to_string())
    })?;

    let non_capitalized: String = first.to_lowercase().chain(chars).collect();

    let title = match Regex::new(PULL_REQUEST_REFERENCE_PATTERN) {
        Ok(re) => re.replace(&non_capitalized, "").into_owned(),
        Err(_) => non_capitalized,
    };

    Ok(title)
}
