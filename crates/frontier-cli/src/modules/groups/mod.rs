mod actions;
mod http;
pub(crate) mod types;

pub(crate) use actions::{probe_list_current_user_groups, probe_list_user_groups};
pub(crate) use types::{
    Group, ListCurrentUserGroupsRequest, ListCurrentUserGroupsResponse,
    ListGroupsResponse,
};
