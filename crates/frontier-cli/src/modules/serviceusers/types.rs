use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceUser {
    pub id: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
    pub org_id: Option<String>,
    pub state: Option<String>,
    pub metadata: Option<Map<String, Value>>,
    pub created_at: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListServiceUsersRequest<'a> {
    pub org_id: &'a str,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ListServiceUsersResponse {
    pub serviceusers: Vec<ServiceUser>,
}
