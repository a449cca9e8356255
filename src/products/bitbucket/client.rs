use super::types::{
    BitbucketBranch, BitbucketCodeSearchHit, BitbucketCommit, BitbucketPullRequest,
    BitbucketRepository,
};
use crate::config::RuntimeConfig;
use crate::error::{GatewayError, Result};
use crate::http::{HttpEngine, Idempotency};
use reqwest::Method;
use serde_json::{json, Value};

pub struct BitbucketClient<'a> {
    engine: &'a HttpEngine,
    config: &'a RuntimeConfig,
}

impl<'a> BitbucketClient<'a> {
    #[must_use]
    pub fn new(engine: &'a HttpEngine, config: &'a RuntimeConfig) -> Self {
        Self { engine, config }
    }

    fn base_url(&self) -> Result<String> {
        self.config
            .product(crate::config::Product::Bitbucket)
            .base_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| GatewayError::argument("bitbucket base URL is not configured"))
    }

    fn require_non_blank(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(GatewayError::argument(format!("'{field}' must not be blank")));
        }
        Ok(())
    }

    pub async fn list_repos(&self, workspace: &str) -> Result<Vec<BitbucketRepository>> {
        Self::require_non_blank(workspace, "workspace")?;
        let base = self.base_url()?;
        let url = format!("{base}/2.0/repositories/{workspace}");
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        Ok(value["values"]
            .as_array()
            .map(|arr| arr.iter().map(BitbucketRepository::from_api).collect())
            .unwrap_or_default())
    }

    pub async fn get_repo(&self, workspace: &str, repo_slug: &str) -> Result<BitbucketRepository> {
        Self::require_non_blank(workspace, "workspace")?;
        Self::require_non_blank(repo_slug, "repoSlug")?;
        let base = self.base_url()?;
        let url = format!("{base}/2.0/repositories/{workspace}/{repo_slug}");
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        Ok(BitbucketRepository::from_api(&value))
    }

    pub async fn list_pull_requests(
        &self,
        workspace: &str,
        repo_slug: &str,
        state: &str,
    ) -> Result<Vec<BitbucketPullRequest>> {
        Self::require_non_blank(workspace, "workspace")?;
        Self::require_non_blank(repo_slug, "repoSlug")?;
        let base = self.base_url()?;
        let state_filter = if state.trim().is_empty() { "OPEN" } else { state.trim() };
        let url = format!(
            "{base}/2.0/repositories/{workspace}/{repo_slug}/pullrequests?state={state_filter}"
        );
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        Ok(value["values"]
            .as_array()
            .map(|arr| arr.iter().map(BitbucketPullRequest::from_api).collect())
            .unwrap_or_default())
    }

    pub async fn get_pull_request(
        &self,
        workspace: &str,
        repo_slug: &str,
        pr_id: u64,
    ) -> Result<BitbucketPullRequest> {
        Self::require_non_blank(workspace, "workspace")?;
        Self::require_non_blank(repo_slug, "repoSlug")?;
        if pr_id == 0 {
            return Err(GatewayError::argument("'prId' must be a positive integer"));
        }
        let base = self.base_url()?;
        let url = format!("{base}/2.0/repositories/{workspace}/{repo_slug}/pullrequests/{pr_id}");
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        Ok(BitbucketPullRequest::from_api(&value))
    }

    pub async fn code_search(&self, workspace: &str, search_query: &str) -> Result<Vec<BitbucketCodeSearchHit>> {
        Self::require_non_blank(workspace, "workspace")?;
        Self::require_non_blank(search_query, "searchQuery")?;
        let base = self.base_url()?;
        let url = format!(
            "{base}/2.0/workspaces/{workspace}/search/code?search_query={}",
            urlencoding::encode(search_query)
        );
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        Ok(value["values"]
            .as_array()
            .map(|arr| {
                arr.iter()
                    .map(|v| BitbucketCodeSearchHit {
                        repository: v["file"]["commit"]["repository"]["full_name"]
                            .as_str()
                            .unwrap_or_default()
                            .to_string(),
                        path: v["file"]["path"].as_str().unwrap_or_default().to_string(),
                        snippet: v["content_match_count"].to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    pub async fn create_pull_request(
        &self,
        workspace: &str,
        repo_slug: &str,
        title: &str,
        source_branch: &str,
        destination_branch: &str,
    ) -> Result<BitbucketPullRequest> {
        Self::require_non_blank(workspace, "workspace")?;
        Self::require_non_blank(repo_slug, "repoSlug")?;
        Self::require_non_blank(title, "title")?;
        Self::require_non_blank(source_branch, "sourceBranch")?;
        let base = self.base_url()?;
        let url = format!("{base}/2.0/repositories/{workspace}/{repo_slug}/pullrequests");
        let destination = if destination_branch.trim().is_empty() {
            "main"
        } else {
            destination_branch.trim()
        };
        let payload = json!({
            "title": title,
            "source": {"branch": {"name": source_branch}},
            "destination": {"branch": {"name": destination}},
        });
        let value: Value = self
            .engine
            .send_json(Method::POST, &url, self.config, Some(&payload), Idempotency::Mutating)
            .await?;
        Ok(BitbucketPullRequest::from_api(&value))
    }

    pub async fn list_branches(&self, workspace: &str, repo_slug: &str) -> Result<Vec<BitbucketBranch>> {
        Self::require_non_blank(workspace, "workspace")?;
        Self::require_non_blank(repo_slug, "repoSlug")?;
        let base = self.base_url()?;
        let url = format!("{base}/2.0/repositories/{workspace}/{repo_slug}/refs/branches");
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        Ok(value["values"]
            .as_array()
            .map(|arr| arr.iter().map(BitbucketBranch::from_api).collect())
            .unwrap_or_default())
    }

    pub async fn get_commits(&self, workspace: &str, repo_slug: &str) -> Result<Vec<BitbucketCommit>> {
        Self::require_non_blank(workspace, "workspace")?;
        Self::require_non_blank(repo_slug, "repoSlug")?;
        let base = self.base_url()?;
        let url = format!("{base}/2.0/repositories/{workspace}/{repo_slug}/commits");
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        Ok(value["values"]
            .as_array()
            .map(|arr| arr.iter().map(BitbucketCommit::from_api).collect())
            .unwrap_or_default())
    }
}
