//! Workflows wiring provider I/O to the pure version rules

pub mod bump;
pub mod check;
pub mod release;

pub use bump::bump_project_version;
pub use check::check_project_version;
pub use release::release_project_version;

use crate::error::Result;
use crate::provider::{Provider, RemoteFile, RepoId};

/// Repository path of the project version file
pub const VERSION_FILE_PATH: &str = ".project-version";

/// Read the project version file from a branch.
///
/// Returns the raw single-line version (a single trailing newline stripped)
/// together with the file's revision for later writes.
fn read_version_file(
    provider: &dyn Provider,
    repo: &RepoId,
    branch: &str,
) -> Result<(String, RemoteFile)> {
    let file = provider.read_file(repo, branch, VERSION_FILE_PATH)?;
    let line = strip_trailing_newline(&file.content).to_string();

    Ok((line, file))
}

fn strip_trailing_newline(content: &str) -> &str {
    let without_lf = content.strip_suffix('\n').unwrap_or(content);
    without_lf.strip_suffix('\r').unwrap_or(without_lf)
}
