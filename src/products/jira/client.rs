use super::types::{JiraComment, JiraIssue, JiraProject, JiraSearchResult, JiraSprint};
use crate::config::RuntimeConfig;
use crate::error::{GatewayError, Result};
use crate::http::{HttpEngine, Idempotency};
use reqwest::Method;
use serde_json::{json, Value};

/// Jira REST wrapper. A pure function over {config slice, HTTP engine,
/// typed input} -> {typed record, error}. Holds no state of
/// its own beyond a clone of the shared engine.
pub struct JiraClient<'a> {
    engine: &'a HttpEngine,
    config: &'a RuntimeConfig,
}

impl<'a> JiraClient<'a> {
    #[must_use]
    pub fn new(engine: &'a HttpEngine, config: &'a RuntimeConfig) -> Self {
        Self { engine, config }
    }

    fn base_url(&self) -> Result<String> {
        self.config
            .product(crate::config::Product::Jira)
            .base_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| GatewayError::argument("jira base URL is not configured"))
    }

    fn require_non_blank(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(GatewayError::argument(format!("'{field}' must not be blank")));
        }
        Ok(())
    }

    pub async fn search(
        &self,
        jql: &str,
        start_at: u32,
        max_results: u32,
    ) -> Result<JiraSearchResult> {
        Self::require_non_blank(jql, "jql")?;
        let base = self.base_url()?;
        let url = format!(
            "{base}/rest/api/3/search?jql={}&startAt={start_at}&maxResults={}",
            urlencoding::encode(jql),
            max_results.min(100)
        );
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        let issues = value["issues"]
            .as_array()
            .map(|arr| arr.iter().map(|v| JiraIssue::from_api(v, &base)).collect())
            .unwrap_or_default();
        Ok(JiraSearchResult {
            issues,
            total: value["total"].as_u64().unwrap_or(0),
            start_at: value["startAt"].as_u64().unwrap_or(0),
        })
    }

    pub async fn get_issue(&self, issue_key: &str) -> Result<JiraIssue> {
        Self::require_non_blank(issue_key, "issueKey")?;
        let base = self.base_url()?;
        let url = format!("{base}/rest/api/3/issue/{issue_key}");
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        Ok(JiraIssue::from_api(&value, &base))
    }

    pub async fn create_issue(
        &self,
        project_key: &str,
        issue_type: &str,
        summary: &str,
        description: &str,
    ) -> Result<JiraIssue> {
        Self::require_non_blank(project_key, "projectKey")?;
        Self::require_non_blank(issue_type, "issueType")?;
        Self::require_non_blank(summary, "summary")?;
        let base = self.base_url()?;
        let url = format!("{base}/rest/api/3/issue");
        let body = json!({
            "fields": {
                "project": {"key": project_key},
                "issuetype": {"name": issue_type},
                "summary": summary,
                "description": description,
            }
        });
        let value: Value = self
            .engine
            .send_json(Method::POST, &url, self.config, Some(&body), Idempotency::Mutating)
            .await?;
        let key = value["key"].as_str().unwrap_or_default().to_string();
        self.get_issue(&key).await
    }

    pub async fn update_issue(&self, issue_key: &str, fields: Value) -> Result<()> {
        Self::require_non_blank(issue_key, "issueKey")?;
        let base = self.base_url()?;
        let url = format!("{base}/rest/api/3/issue/{issue_key}");
        let body = json!({ "fields": fields });
        let _: Value = self
            .engine
            .send_json(Method::PUT, &url, self.config, Some(&body), Idempotency::Mutating)
            .await?;
        Ok(())
    }

    pub async fn transition_issue(&self, issue_key: &str, transition_id: &str) -> Result<()> {
        Self::require_non_blank(issue_key, "issueKey")?;
        Self::require_non_blank(transition_id, "transitionId")?;
        let base = self.base_url()?;
        let url = format!("{base}/rest/api/3/issue/{issue_key}/transitions");
        let body = json!({ "transition": { "id": transition_id } });
        let _: Value = self
            .engine
            .send_json(Method::POST, &url, self.config, Some(&body), Idempotency::Mutating)
            .await?;
        Ok(())
    }

    pub async fn list_projects(&self) -> Result<Vec<JiraProject>> {
        let base = self.base_url()?;
        let url = format!("{base}/rest/api/3/project/search");
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        Ok(value["values"]
            .as_array()
            .map(|arr| arr.iter().map(JiraProject::from_api).collect())
            .unwrap_or_default())
    }

    pub async fn get_active_sprint(&self, board_id: u64) -> Result<JiraSprint> {
        if board_id == 0 {
            return Err(GatewayError::argument("'boardId' must be a positive integer"));
        }
        let base = self.base_url()?;
        let url = format!("{base}/rest/agile/1.0/board/{board_id}/sprint?state=active");
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        value["values"]
            .as_array()
            .and_then(|arr| arr.first())
            .map(JiraSprint::from_api)
            .ok_or_else(|| GatewayError::not_found(format!("no active sprint for board {board_id}")))
    }

    pub async fn list_sprint_issues(&self, sprint_id: u64) -> Result<Vec<JiraIssue>> {
        if sprint_id == 0 {
            return Err(GatewayError::argument("'sprintId' must be a positive integer"));
        }
        let base = self.base_url()?;
        let url = format!("{base}/rest/agile/1.0/sprint/{sprint_id}/issue");
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        Ok(value["issues"]
            .as_array()
            .map(|arr| arr.iter().map(|v| JiraIssue::from_api(v, &base)).collect())
            .unwrap_or_default())
    }

    pub async fn add_comment(&self, issue_key: &str, body: &str) -> Result<JiraComment> {
        Self::require_non_blank(issue_key, "issueKey")?;
        Self::require_non_blank(body, "body")?;
        let base = self.base_url()?;
        let url = format!("{base}/rest/api/3/issue/{issue_key}/comment");
        let payload = json!({ "body": body });
        let value: Value = self
            .engine
            .send_json(Method::POST, &url, self.config, Some(&payload), Idempotency::Mutating)
            .await?;
        Ok(JiraComment::from_api(&value))
    }

    pub async fn get_comments(&self, issue_key: &str) -> Result<Vec<JiraComment>> {
        Self::require_non_blank(issue_key, "issueKey")?;
        let base = self.base_url()?;
        let url = format!("{base}/rest/api/3/issue/{issue_key}/comment");
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        Ok(value["comments"]
            .as_array()
            .map(|arr| arr.iter().map(JiraComment::from_api).collect())
            .unwrap_or_default())
    }

    pub async fn assign(&self, issue_key: &str, account_id: &str) -> Result<()> {
        Self::require_non_blank(issue_key, "issueKey")?;
        Self::require_non_blank(account_id, "accountId")?;
        let base = self.base_url()?;
        let url = format!("{base}/rest/api/3/issue/{issue_key}/assignee");
        let body = json!({ "accountId": account_id });
        let _: Value = self
            .engine
            .send_json(Method::PUT, &url, self.config, Some(&body), Idempotency::Mutating)
            .await?;
        Ok(())
    }
}
