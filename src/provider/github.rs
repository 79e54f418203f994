use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde_json::json;

use crate::domain::ReleaseDescriptor;
use crate::error::{ProjectVersionError, Result};
use crate::provider::{Provider, RemoteFile, RepoId};

const API_BASE_URL: &str = "https://api.github.com";

// GitHub rejects requests without a user agent.
const USER_AGENT: &str = concat!("project-version/", env!("CARGO_PKG_VERSION"));

/// GitHub implementation of the [Provider] trait, backed by the REST v3 API
pub struct GitHubProvider {
    client: Client,
    access_token: String,
}

/// Response of `GET /repos/{owner}/{repo}/contents/{path}`
#[derive(Deserialize)]
struct ContentsResponse {
    content: String,
    sha: String,
}

/// Response of `GET /repos/{owner}/{repo}/commits/{ref}`
#[derive(Deserialize)]
struct CommitResponse {
    commit: CommitDetail,
}

#[derive(Deserialize)]
struct CommitDetail {
    message: String,
}

impl GitHubProvider {
    pub fn new(access_token: impl Into<String>) -> Self {
        GitHubProvider {
            client: Client::new(),
            access_token: access_token.into(),
        }
    }

    fn contents_url(&self, repo: &RepoId, path: &str) -> String {
        format!("{}/repos/{}/contents/{}", API_BASE_URL, repo, path)
    }

    fn request(&self, builder: reqwest::blocking::RequestBuilder) -> Result<Response> {
        let response = builder
            .header("Authorization", format!("Bearer {}", self.access_token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .send()?;

        Ok(response)
    }

    fn ensure_success(context: &str, response: Response) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response
            .text()
            .unwrap_or_else(|_| "no response body".to_string());

        Err(ProjectVersionError::provider(format!(
            "{}: {}: {}",
            context, status, body
        )))
    }
}

impl Provider for GitHubProvider {
    fn read_file(&self, repo: &RepoId, branch: &str, path: &str) -> Result<RemoteFile> {
        let url = format!("{}?ref={}", self.contents_url(repo, path), branch);
        let response = self.request(self.client.get(&url))?;
        let response =
            Self::ensure_success(&format!("reading {} from {}@{}", path, repo, branch), response)?;

        let payload: ContentsResponse = response.json()?;

        // The contents API returns base64 with embedded line breaks.
        let encoded: String = payload
            .content
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        let decoded = BASE64.decode(encoded.as_bytes()).map_err(|err| {
            ProjectVersionError::provider(format!("malformed base64 content for {}: {}", path, err))
        })?;

        let content = String::from_utf8(decoded).map_err(|err| {
            ProjectVersionError::provider(format!("non-UTF-8 content for {}: {}", path, err))
        })?;

        Ok(RemoteFile {
            content,
            revision: payload.sha,
        })
    }

    fn write_file(
        &self,
        repo: &RepoId,
        branch: &str,
        path: &str,
        content: &str,
        revision: &str,
        message: &str,
    ) -> Result<()> {
        let url = self.contents_url(repo, path);
        let body = json!({
            "message": message,
            "content": BASE64.encode(content.as_bytes()),
            "sha": revision,
            "branch": branch,
        });

        let response = self.request(self.client.put(&url).json(&body))?;
        Self::ensure_success(&format!("writing {} to {}@{}", path, repo, branch), response)?;

        Ok(())
    }

    fn commit_message(&self, repo: &RepoId, commit_ish: &str) -> Result<String> {
        let url = format!("{}/repos/{}/commits/{}", API_BASE_URL, repo, commit_ish);
        let response = self.request(self.client.get(&url))?;
        let response = Self::ensure_success(
            &format!("reading commit {} from {}", commit_ish, repo),
            response,
        )?;

        let payload: CommitResponse = response.json()?;

        Ok(payload.commit.message)
    }

    fn create_release(&self, repo: &RepoId, release: &ReleaseDescriptor) -> Result<()> {
        let url = format!("{}/repos/{}/releases", API_BASE_URL, repo);
        let body = json!({
            "tag_name": release.tag,
            "name": release.title,
            "body": release.body,
            "target_commitish": release.target,
        });

        let response = self.request(self.client.post(&url).json(&body))?;
        Self::ensure_success(&format!("creating release {} on {}", release.tag, repo), response)?;

        Ok(())
    }
}
