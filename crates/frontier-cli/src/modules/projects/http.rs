use crate::modules::projects::{ListProjectsByCurrentUserRequest, ListProjectsResponse};
use crate::modules::system::http::call_rpc;
use crate::modules::system::ProbeContext;
use crate::modules::users::UserIdRequest;

pub(crate) async fn list_projects_by_user(
    ctx: &ProbeContext<'_>,
    user_id: &str,
) -> anyhow::Result<ListProjectsResponse> {
    call_rpc(ctx, "ListProjectsByUser", &UserIdRequest { id: user_id }).await
}

pub(crate) async fn list_projects_by_current_user(
    ctx: &ProbeContext<'_>,
) -> anyhow::Result<ListProjectsResponse> {
    call_rpc(
        ctx,
        "ListProjectsByCurrentUser",
        &ListProjectsByCurrentUserRequest {},
    )
    .await
}
