use crate::domain::commit::release_title;
use crate::domain::{ReleaseDescriptor, SemanticVersion};
use crate::error::Result;
use crate::provider::{Provider, RepoId};

/// Create a tagged release for a branch at the given project version.
///
/// Validates the version string, reads the message of the commit the branch
/// points at, extracts the release title from it and asks the provider to
/// publish the release. Returns the descriptor that was published.
pub fn release_project_version(
    provider: &dyn Provider,
    repo: &RepoId,
    branch: &str,
    raw_version: &str,
) -> Result<ReleaseDescriptor> {
    let version = SemanticVersion::parse(raw_version)?;

    let message = provider.commit_message(repo, branch)?;
    let title = release_title(&message)?;

    let descriptor = ReleaseDescriptor::new(&version, &title, branch);
    provider.create_release(repo, &descriptor)?;

    Ok(descriptor)
}
