mod actions;
mod http;
pub(crate) mod types;

pub(crate) use actions::probe_list_service_users;
pub(crate) use types::{ListServiceUsersRequest, ListServiceUsersResponse, ServiceUser};
