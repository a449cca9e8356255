use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    pub id: String,
    pub summary: String,
    pub status: String,
    pub issue_type: String,
    pub priority: String,
    pub assignee: String,
    pub reporter: String,
    pub description: String,
    pub project_key: String,
    pub url: String,
}

impl JiraIssue {
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.key
    }

    pub fn from_api(value: &serde_json::Value, base_url: &str) -> Self {
        let fields = &value["fields"];
        let key = value["key"].as_str().unwrap_or_default().to_string();
        Self {
            id: value["id"].as_str().unwrap_or_default().to_string(),
            summary: fields["summary"].as_str().unwrap_or_default().to_string(),
            status: fields["status"]["name"].as_str().unwrap_or("-").to_string(),
            issue_type: fields["issuetype"]["name"]
                .as_str()
                .unwrap_or("-")
                .to_string(),
            priority: fields["priority"]["name"].as_str().unwrap_or("-").to_string(),
            assignee: fields["assignee"]["displayName"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            reporter: fields["reporter"]["displayName"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            description: fields["description"].as_str().unwrap_or("").to_string(),
            project_key: fields["project"]["key"].as_str().unwrap_or("").to_string(),
            url: format!("{base_url}/browse/{key}"),
            key,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraProject {
    pub key: String,
    pub id: String,
    pub name: String,
    pub project_type: String,
    pub lead: String,
}

impl JiraProject {
    pub fn from_api(value: &serde_json::Value) -> Self {
        Self {
            key: value["key"].as_str().unwrap_or_default().to_string(),
            id: value["id"].as_str().unwrap_or_default().to_string(),
            name: value["name"].as_str().unwrap_or_default().to_string(),
            project_type: value["projectTypeKey"].as_str().unwrap_or("-").to_string(),
            lead: value["lead"]["displayName"].as_str().unwrap_or("").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraSearchResult {
    pub issues: Vec<JiraIssue>,
    pub total: u64,
    pub start_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraSprint {
    pub id: u64,
    pub name: String,
    pub state: String,
    pub goal: String,
}

impl JiraSprint {
    pub fn from_api(value: &serde_json::Value) -> Self {
        Self {
            id: value["id"].as_u64().unwrap_or(0),
            name: value["name"].as_str().unwrap_or_default().to_string(),
            state: value["state"].as_str().unwrap_or_default().to_string(),
            goal: value["goal"].as_str().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraComment {
    pub id: String,
    pub author: String,
    pub body: String,
    pub created: String,
}

impl JiraComment {
    pub fn from_api(value: &serde_json::Value) -> Self {
        Self {
            id: value["id"].as_str().unwrap_or_default().to_string(),
            author: value["author"]["displayName"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            body: value["body"].as_str().unwrap_or_default().to_string(),
            created: value["created"].as_str().unwrap_or_default().to_string(),
        }
    }
}
