mod actions;
mod http;
pub(crate) mod types;

pub(crate) use actions::{
    probe_create_user, probe_delete_user, probe_disable_user, probe_enable_user,
    probe_get_current_user, probe_get_user, probe_list_users, probe_update_current_user,
    probe_update_user,
};
#[cfg(test)]
pub(crate) use actions::{collect_users, MAX_PAGES, PAGE_SIZE};
pub(crate) use types::{
    CreateUserRequest, CurrentPrincipal, CurrentUserResponse, ListUsersRequest, ListUsersResponse,
    UpdateCurrentUserRequest, UpdateUserRequest, User, UserIdRequest, UserPages, UserRequestBody,
    UserResponse,
};
