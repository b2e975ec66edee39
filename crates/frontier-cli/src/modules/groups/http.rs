use crate::modules::groups::{
    ListCurrentUserGroupsRequest, ListCurrentUserGroupsResponse, ListGroupsResponse,
};
use crate::modules::system::http::call_rpc;
use crate::modules::system::ProbeContext;
use crate::modules::users::UserIdRequest;

pub(crate) async fn list_user_groups(
    ctx: &ProbeContext<'_>,
    user_id: &str,
) -> anyhow::Result<ListGroupsResponse> {
    call_rpc(ctx, "ListUserGroups", &UserIdRequest { id: user_id }).await
}

pub(crate) async fn list_current_user_groups(
    ctx: &ProbeContext<'_>,
) -> anyhow::Result<ListCurrentUserGroupsResponse> {
    call_rpc(ctx, "ListCurrentUserGroups", &ListCurrentUserGroupsRequest {}).await
}
