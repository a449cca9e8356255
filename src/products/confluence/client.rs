use super::types::{ConfluencePage, ConfluenceSearchResult, ConfluenceSpace};
use crate::config::RuntimeConfig;
use crate::error::{GatewayError, Result};
use crate::http::{HttpEngine, Idempotency};
use reqwest::Method;
use serde_json::{json, Value};

pub struct ConfluenceClient<'a> {
    engine: &'a HttpEngine,
    config: &'a RuntimeConfig,
}

impl<'a> ConfluenceClient<'a> {
    #[must_use]
    pub fn new(engine: &'a HttpEngine, config: &'a RuntimeConfig) -> Self {
        Self { engine, config }
    }

    fn base_url(&self) -> Result<String> {
        self.config
            .product(crate::config::Product::Confluence)
            .base_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| GatewayError::argument("confluence base URL is not configured"))
    }

    fn require_non_blank(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(GatewayError::argument(format!("'{field}' must not be blank")));
        }
        Ok(())
    }

    pub async fn search(&self, cql_or_text: &str, limit: u32) -> Result<ConfluenceSearchResult> {
        Self::require_non_blank(cql_or_text, "query")?;
        let base = self.base_url()?;
        let url = format!(
            "{base}/wiki/rest/api/content/search?cql={}&limit={}",
            urlencoding::encode(cql_or_text),
            limit.min(100)
        );
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        let pages = value["results"]
            .as_array()
            .map(|arr| arr.iter().map(|v| ConfluencePage::from_api(v, &base)).collect())
            .unwrap_or_default();
        Ok(ConfluenceSearchResult {
            pages,
            total: value["size"].as_u64().unwrap_or(0),
        })
    }

    pub async fn get_page(&self, page_id: &str) -> Result<ConfluencePage> {
        Self::require_non_blank(page_id, "pageId")?;
        let base = self.base_url()?;
        let url = format!("{base}/wiki/rest/api/content/{page_id}?expand=body.storage,space,version");
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        Ok(ConfluencePage::from_api(&value, &base))
    }

    pub async fn create_page(&self, space_key: &str, title: &str, body: &str) -> Result<ConfluencePage> {
        Self::require_non_blank(space_key, "spaceKey")?;
        Self::require_non_blank(title, "title")?;
        let base = self.base_url()?;
        let url = format!("{base}/wiki/rest/api/content");
        let payload = json!({
            "type": "page",
            "title": title,
            "space": {"key": space_key},
            "body": {"storage": {"value": body, "representation": "storage"}},
        });
        let value: Value = self
            .engine
            .send_json(Method::POST, &url, self.config, Some(&payload), Idempotency::Mutating)
            .await?;
        Ok(ConfluencePage::from_api(&value, &base))
    }

    /// Version is monotonic: callers must pass `current_version + 1`.
    pub async fn update_page(
        &self,
        page_id: &str,
        title: &str,
        body: &str,
        next_version: u64,
    ) -> Result<ConfluencePage> {
        Self::require_non_blank(page_id, "pageId")?;
        if next_version == 0 {
            return Err(GatewayError::argument("'version' must be a positive integer"));
        }
        let base = self.base_url()?;
        let url = format!("{base}/wiki/rest/api/content/{page_id}");
        let payload = json!({
            "id": page_id,
            "type": "page",
            "title": title,
            "version": {"number": next_version},
            "body": {"storage": {"value": body, "representation": "storage"}},
        });
        let value: Value = self
            .engine
            .send_json(Method::PUT, &url, self.config, Some(&payload), Idempotency::Mutating)
            .await?;
        Ok(ConfluencePage::from_api(&value, &base))
    }

    pub async fn list_spaces(&self) -> Result<Vec<ConfluenceSpace>> {
        let base = self.base_url()?;
        let url = format!("{base}/wiki/rest/api/space");
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        Ok(value["results"]
            .as_array()
            .map(|arr| arr.iter().map(ConfluenceSpace::from_api).collect())
            .unwrap_or_default())
    }

    pub async fn get_page_children(&self, page_id: &str) -> Result<Vec<ConfluencePage>> {
        Self::require_non_blank(page_id, "pageId")?;
        let base = self.base_url()?;
        let url = format!("{base}/wiki/rest/api/content/{page_id}/child/page");
        let value: Value = self
            .engine
            .send_json(Method::GET, &url, self.config, None::<&()>, Idempotency::Safe)
            .await?;
        Ok(value["results"]
            .as_array()
            .map(|arr| arr.iter().map(|v| ConfluencePage::from_api(v, &base)).collect())
            .unwrap_or_default())
    }

    pub async fn delete_page(&self, page_id: &str) -> Result<()> {
        Self::require_non_blank(page_id, "pageId")?;
        let base = self.base_url()?;
        let url = format!("{base}/wiki/rest/api/content/{page_id}");
        let _: Value = self
            .engine
            .send_json(Method::DELETE, &url, self.config, None::<&()>, Idempotency::Mutating)
            .await?;
        Ok(())
    }
}
