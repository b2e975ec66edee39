use crate::modules::organizations::{
    ListOrganizationsByCurrentUserRequest, ListOrganizationsByUserRequest,
    ListOrganizationsResponse,
};
use crate::modules::system::http::call_rpc;
use crate::modules::system::ProbeContext;

pub(crate) async fn list_organizations_by_user(
    ctx: &ProbeContext<'_>,
    user_id: &str,
) -> anyhow::Result<ListOrganizationsResponse> {
    let payload = ListOrganizationsByUserRequest { id: user_id };
    call_rpc(ctx, "ListOrganizationsByUser", &payload).await
}

pub(crate) async fn list_organizations_by_current_user(
    ctx: &ProbeContext<'_>,
) -> anyhow::Result<ListOrganizationsResponse> {
    let payload = ListOrganizationsByCurrentUserRequest {};
    call_rpc(ctx, "ListOrganizationsByCurrentUser", &payload).await
}
