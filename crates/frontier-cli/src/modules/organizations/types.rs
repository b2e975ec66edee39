use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Organization {
    pub id: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub state: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Serialize)]
pub struct ListOrganizationsByUserRequest<'a> {
    pub id: &'a str,
}

#[derive(Serialize)]
pub struct ListOrganizationsByCurrentUserRequest {}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ListOrganizationsResponse {
    pub organizations: Vec<Organization>,
    pub joinable_via_domain: Vec<Organization>,
}
