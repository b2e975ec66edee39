use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Group {
    pub id: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub org_id: Option<String>,
    pub members_count: Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupAccessPair {
    pub group_id: Option<String>,
    pub permissions: Vec<String>,
}

#[derive(Serialize)]
pub struct ListCurrentUserGroupsRequest {}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ListGroupsResponse {
    pub groups: Vec<Group>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ListCurrentUserGroupsResponse {
    pub groups: Vec<Group>,
    pub access_pairs: Vec<GroupAccessPair>,
}
