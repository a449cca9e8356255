use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BitbucketRepository {
    pub slug: String,
    pub name: String,
    pub workspace: String,
    pub description: String,
    pub is_private: bool,
}

impl BitbucketRepository {
    #[must_use]
    pub fn identity(&self) -> String {
        format!("{}/{}", self.workspace, self.slug)
    }

    pub fn from_api(value: &serde_json::Value) -> Self {
        Self {
            slug: value["slug"].as_str().unwrap_or_default().to_string(),
            name: value["name"].as_str().unwrap_or_default().to_string(),
            workspace: value["workspace"]["slug"].as_str().unwrap_or_default().to_string(),
            description: value["description"].as_str().unwrap_or_default().to_string(),
            is_private: value["is_private"].as_bool().unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BitbucketPullRequest {
    pub id: u64,
    pub title: String,
    pub state: String,
    pub author: String,
    pub source_branch: String,
    pub destination_branch: String,
    pub description: String,
}

impl BitbucketPullRequest {
    #[must_use]
    pub fn identity(&self) -> String {
        self.id.to_string()
    }

    pub fn from_api(value: &serde_json::Value) -> Self {
        Self {
            id: value["id"].as_u64().unwrap_or(0),
            title: value["title"].as_str().unwrap_or_default().to_string(),
            state: value["state"].as_str().unwrap_or("-").to_string(),
            author: value["author"]["display_name"].as_str().unwrap_or("").to_string(),
            source_branch: value["source"]["branch"]["name"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            destination_branch: value["destination"]["branch"]["name"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            description: value["description"].as_str().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BitbucketBranch {
    pub name: String,
    pub target_hash: String,
}

impl BitbucketBranch {
    pub fn from_api(value: &serde_json::Value) -> Self {
        Self {
            name: value["name"].as_str().unwrap_or_default().to_string(),
            target_hash: value["target"]["hash"].as_str().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BitbucketCommit {
    pub hash: String,
    pub message: String,
    pub author: String,
}

impl BitbucketCommit {
    pub fn from_api(value: &serde_json::Value) -> Self {
        Self {
            hash: value["hash"].as_str().unwrap_or_default().to_string(),
            message: value["message"].as_str().unwrap_or_default().to_string(),
            author: value["author"]["raw"].as_str().unwrap_or("").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BitbucketCodeSearchHit {
    pub repository: String,
    pub path: String,
    pub snippet: String,
}
