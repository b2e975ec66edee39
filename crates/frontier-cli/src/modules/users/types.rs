use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::modules::serviceusers::ServiceUser;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
    pub avatar: Option<String>,
    pub state: Option<String>,
    pub metadata: Option<Map<String, Value>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersRequest<'a> {
    pub page_size: u32,
    pub page_num: u32,
    pub keyword: &'a str,
    pub org_id: &'a str,
    pub group_id: &'a str,
    pub state: &'a str,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ListUsersResponse {
    pub users: Vec<User>,
    pub count: Value,
}

/// Request body shared by create and update calls.
#[derive(Serialize, Debug, Clone)]
pub struct UserRequestBody {
    pub email: String,
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub metadata: Map<String, Value>,
}

#[derive(Serialize)]
pub struct CreateUserRequest {
    pub body: UserRequestBody,
}

#[derive(Serialize)]
pub struct UpdateUserRequest<'a> {
    pub id: &'a str,
    pub body: UserRequestBody,
}

#[derive(Serialize)]
pub struct UpdateCurrentUserRequest {
    pub body: UserRequestBody,
}

#[derive(Serialize)]
pub struct UserIdRequest<'a> {
    pub id: &'a str,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UserResponse {
    pub user: Option<User>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CurrentUserResponse {
    pub user: Option<User>,
    pub serviceuser: Option<ServiceUser>,
}

/// Who `GetCurrentUser` says the session belongs to.
#[derive(Debug, Clone)]
pub enum CurrentPrincipal {
    User(User),
    ServiceUser(ServiceUser),
}

impl CurrentPrincipal {
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::User(user) => user.id.as_deref(),
            Self::ServiceUser(service_user) => service_user.id.as_deref(),
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Self::User(user) => user.email.as_deref(),
            Self::ServiceUser(service_user) => service_user.email.as_deref(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::User(_) => "User",
            Self::ServiceUser(_) => "Service User",
        }
    }

    /// The principal projected onto user fields, for before/after output.
    pub fn as_user_view(&self) -> User {
        match self {
            Self::User(user) => user.clone(),
            Self::ServiceUser(service_user) => User {
                id: service_user.id.clone(),
                email: service_user.email.clone(),
                title: service_user.title.clone(),
                state: service_user.state.clone(),
                metadata: service_user.metadata.clone(),
                created_at: service_user.created_at.clone(),
                ..User::default()
            },
        }
    }
}

/// Users collected by the paginated listing.
#[derive(Debug, Default)]
pub struct UserPages {
    pub requests: u32,
    pub pages_fetched: u32,
    pub users: Vec<User>,
}
