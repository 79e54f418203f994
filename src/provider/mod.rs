//! Hosting provider abstraction layer
//!
//! This module provides a trait-based abstraction over the hosting
//! provider's API, allowing for multiple implementations including the real
//! GitHub REST API and mock implementations for testing.
//!
//! Most code should depend on the [Provider] trait rather than concrete
//! implementations to enable easy testing and flexibility. The pure version
//! rules never see this trait; services fetch through it and hand already
//! parsed values to the rule engine.

pub mod github;
pub mod mock;

pub use github::GitHubProvider;
pub use mock::MockProvider;

use std::fmt;

use crate::domain::ReleaseDescriptor;
use crate::error::Result;

/// Identifies a repository within a provider's organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub organization: String,
    pub repository: String,
}

impl RepoId {
    pub fn new(organization: impl Into<String>, repository: impl Into<String>) -> Self {
        RepoId {
            organization: organization.into(),
            repository: repository.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.repository)
    }
}

/// A versioned text blob read from the provider
///
/// `revision` identifies the blob being replaced when the file is written
/// back, which the provider requires to reject concurrent updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub content: String,
    pub revision: String,
}

/// Common provider operation trait for abstraction
///
/// All implementors must be `Send + Sync`. Methods return
/// [crate::error::Result<T>]; implementations map transport and API errors to
/// the appropriate [crate::error::ProjectVersionError] variants. No operation
/// is retried.
pub trait Provider: Send + Sync {
    /// Read a text file from a branch
    fn read_file(&self, repo: &RepoId, branch: &str, path: &str) -> Result<RemoteFile>;

    /// Write a text file to a branch, replacing the blob at `revision`
    fn write_file(
        &self,
        repo: &RepoId,
        branch: &str,
        path: &str,
        content: &str,
        revision: &str,
        message: &str,
    ) -> Result<()>;

    /// Read the message of the commit a commit-ish points at
    fn commit_message(&self, repo: &RepoId, commit_ish: &str) -> Result<String>;

    /// Create a tagged release
    fn create_release(&self, repo: &RepoId, release: &ReleaseDescriptor) -> Result<()>;
}
