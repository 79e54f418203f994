use crate::domain::SemanticVersion;
use crate::error::Result;
use crate::provider::{Provider, RepoId};
use crate::services::{read_version_file, VERSION_FILE_PATH};

/// Bump the project version read from the base branch and write the result
/// to the head branch's version file.
///
/// The patch component is incremented unconditionally; the rule engine is
/// not consulted. Returns the new version.
pub fn bump_project_version(
    provider: &dyn Provider,
    repo: &RepoId,
    base_branch: &str,
    head_branch: &str,
) -> Result<SemanticVersion> {
    let (base_raw, _) = read_version_file(provider, repo, base_branch)?;
    let current = SemanticVersion::parse(&base_raw)?;
    let next = current.bump_patch();

    // The head branch's blob revision is required to replace its file.
    let (_, head_file) = read_version_file(provider, repo, head_branch)?;

    provider.write_file(
        repo,
        head_branch,
        VERSION_FILE_PATH,
        &format!("{}\n", next),
        &head_file.revision,
        &format!("Bump project version to {}.", next),
    )?;

    Ok(next)
}
