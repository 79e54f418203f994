use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::ReleaseDescriptor;
use crate::error::{ProjectVersionError, Result};
use crate::provider::{Provider, RemoteFile, RepoId};

/// A write observed by the mock provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    pub branch: String,
    pub path: String,
    pub content: String,
    pub revision: String,
    pub message: String,
}

/// Mock provider for testing without network access
///
/// Files are keyed by (branch, path); commit messages by commit-ish. Writes
/// and created releases are recorded for assertion.
pub struct MockProvider {
    files: Mutex<HashMap<(String, String), RemoteFile>>,
    commits: HashMap<String, String>,
    writes: Mutex<Vec<RecordedWrite>>,
    releases: Mutex<Vec<ReleaseDescriptor>>,
}

impl MockProvider {
    /// Create a new empty mock provider
    pub fn new() -> Self {
        MockProvider {
            files: Mutex::new(HashMap::new()),
            commits: HashMap::new(),
            writes: Mutex::new(Vec::new()),
            releases: Mutex::new(Vec::new()),
        }
    }

    /// Seed a file on a branch
    pub fn add_file(
        &mut self,
        branch: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
        revision: impl Into<String>,
    ) {
        self.files.lock().expect("mock files lock").insert(
            (branch.into(), path.into()),
            RemoteFile {
                content: content.into(),
                revision: revision.into(),
            },
        );
    }

    /// Seed a commit message for a commit-ish
    pub fn add_commit(&mut self, commit_ish: impl Into<String>, message: impl Into<String>) {
        self.commits.insert(commit_ish.into(), message.into());
    }

    /// Writes observed so far, in order
    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.writes.lock().expect("mock writes lock").clone()
    }

    /// Releases created so far, in order
    pub fn releases(&self) -> Vec<ReleaseDescriptor> {
        self.releases.lock().expect("mock releases lock").clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for MockProvider {
    fn read_file(&self, repo: &RepoId, branch: &str, path: &str) -> Result<RemoteFile> {
        self.files
            .lock()
            .expect("mock files lock")
            .get(&(branch.to_string(), path.to_string()))
            .cloned()
            .ok_or_else(|| {
                ProjectVersionError::provider(format!(
                    "file not found: {} on {}@{}",
                    path, repo, branch
                ))
            })
    }

    fn write_file(
        &self,
        _repo: &RepoId,
        branch: &str,
        path: &str,
        content: &str,
        revision: &str,
        message: &str,
    ) -> Result<()> {
        self.writes
            .lock()
            .expect("mock writes lock")
            .push(RecordedWrite {
                branch: branch.to_string(),
                path: path.to_string(),
                content: content.to_string(),
                revision: revision.to_string(),
                message: message.to_string(),
            });

        self.files.lock().expect("mock files lock").insert(
            (branch.to_string(), path.to_string()),
            RemoteFile {
                content: content.to_string(),
                revision: revision.to_string(),
            },
        );

        Ok(())
    }

    fn commit_message(&self, repo: &RepoId, commit_ish: &str) -> Result<String> {
        self.commits.get(commit_ish).cloned().ok_or_else(|| {
            ProjectVersionError::provider(format!("commit not found: {} on {}", commit_ish, repo))
        })
    }

    fn create_release(&self, _repo: &RepoId, release: &ReleaseDescriptor) -> Result<()> {
        self.releases
            .lock()
            .expect("mock releases lock")
            .push(release.clone());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_files() {
        let mut provider = MockProvider::new();
        provider.add_file("main", ".project-version", "1.2.3\n", "rev1");

        let repo = RepoId::new("acme", "widget");
        let file = provider.read_file(&repo, "main", ".project-version").unwrap();
        assert_eq!(file.content, "1.2.3\n");
        assert_eq!(file.revision, "rev1");

        assert!(provider.read_file(&repo, "other", ".project-version").is_err());
    }

    #[test]
    fn test_mock_provider_records_writes() {
        let provider = MockProvider::new();
        let repo = RepoId::new("acme", "widget");

        provider
            .write_file(&repo, "main", ".project-version", "1.2.4\n", "rev1", "Bump")
            .unwrap();

        let writes = provider.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].branch, "main");
        assert_eq!(writes[0].content, "1.2.4\n");

        // The write is readable back
        let file = provider.read_file(&repo, "main", ".project-version").unwrap();
        assert_eq!(file.content, "1.2.4\n");
    }

    #[test]
    fn test_mock_provider_commits() {
        let mut provider = MockProvider::new();
        provider.add_commit("main", "Add login (#1)");

        let repo = RepoId::new("acme", "widget");
        assert_eq!(
            provider.commit_message(&repo, "main").unwrap(),
            "Add login (#1)"
        );
        assert!(provider.commit_message(&repo, "missing").is_err());
    }
}
