use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfluencePage {
    pub id: String,
    pub title: String,
    pub space_key: String,
    pub version: u64,
    pub body: String,
    pub url: String,
}

impl ConfluencePage {
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.id
    }

    pub fn from_api(value: &serde_json::Value, base_url: &str) -> Self {
        let id = value["id"].as_str().unwrap_or_default().to_string();
        Self {
            title: value["title"].as_str().unwrap_or_default().to_string(),
            space_key: value["space"]["key"].as_str().unwrap_or_default().to_string(),
            version: value["version"]["number"].as_u64().unwrap_or(1),
            body: value["body"]["storage"]["value"]
                .as_str()
                .unwrap_or_default()
                .to_string(),
            url: format!("{base_url}/wiki/spaces/{}/pages/{id}", value["space"]["key"].as_str().unwrap_or("")),
            id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfluenceSpace {
    pub key: String,
    pub name: String,
    pub space_type: String,
}

impl ConfluenceSpace {
    pub fn from_api(value: &serde_json::Value) -> Self {
        Self {
            key: value["key"].as_str().unwrap_or_default().to_string(),
            name: value["name"].as_str().unwrap_or_default().to_string(),
            space_type: value["type"].as_str().unwrap_or("-").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfluenceSearchResult {
    pub pages: Vec<ConfluencePage>,
    pub total: u64,
}
