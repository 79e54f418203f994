use crate::analyzer::{evaluate, CheckOutcome};
use crate::domain::SemanticVersion;
use crate::error::Result;
use crate::provider::{Provider, RepoId};
use crate::services::read_version_file;

/// Check whether the head branch's project version is a proper increase over
/// the base branch's.
///
/// Fetches the version file from both branches, parses both versions and
/// hands them to the rule engine. A rule violation is an expected outcome,
/// not an error; malformed version content is an error.
pub fn check_project_version(
    provider: &dyn Provider,
    repo: &RepoId,
    base_branch: &str,
    head_branch: &str,
) -> Result<CheckOutcome> {
    let (base_raw, _) = read_version_file(provider, repo, base_branch)?;
    let (head_raw, _) = read_version_file(provider, repo, head_branch)?;

    let base = SemanticVersion::parse(&base_raw)?;
    let head = SemanticVersion::parse(&head_raw)?;

    Ok(evaluate(&base, &head))
}
