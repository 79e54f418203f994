use crate::domain::version::SemanticVersion;

/// Release body published for every release. The hosting provider renders an
/// empty body as "No description provided", so a blank braille character is
/// used instead (U+2800).
pub const RELEASE_BODY_PLACEHOLDER: &str = "\u{2800}";

/// Everything the hosting provider needs to create a tagged release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDescriptor {
    /// Release tag, e.g. "v1.2.3"
    pub tag: String,
    /// Release name, e.g. "v1.2.3: add login flow"
    pub title: String,
    /// Release body text
    pub body: String,
    /// Commit-ish the release points at, usually a branch name
    pub target: String,
}

impl ReleaseDescriptor {
    /// Compose a descriptor from a version and an extracted commit title
    pub fn new(version: &SemanticVersion, title: &str, target: impl Into<String>) -> Self {
        ReleaseDescriptor {
            tag: version.tag(),
            title: format!("{}: {}", version.tag(), title),
            body: RELEASE_BODY_PLACEHOLDER.to_string(),
            target: target.into(),
        }
    }
}
