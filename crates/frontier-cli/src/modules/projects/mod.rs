mod actions;
mod http;
pub(crate) mod types;

pub(crate) use actions::{probe_list_projects_by_current_user, probe_list_projects_by_user};
pub(crate) use types::{ListProjectsByCurrentUserRequest, ListProjectsResponse, Project};
