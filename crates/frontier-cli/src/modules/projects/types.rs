use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub org_id: Option<String>,
    pub members_count: Value,
    pub created_at: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectAccessPair {
    pub project_id: Option<String>,
    pub permissions: Vec<String>,
}

#[derive(Serialize)]
pub struct ListProjectsByCurrentUserRequest {}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ListProjectsResponse {
    pub projects: Vec<Project>,
    pub access_pairs: Vec<ProjectAccessPair>,
    pub count: Value,
}
