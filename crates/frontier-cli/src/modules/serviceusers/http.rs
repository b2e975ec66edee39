use crate::modules::serviceusers::{ListServiceUsersRequest, ListServiceUsersResponse};
use crate::modules::system::http::call_rpc;
use crate::modules::system::ProbeContext;

pub(crate) async fn list_service_users(
    ctx: &ProbeContext<'_>,
    org_id: &str,
) -> anyhow::Result<ListServiceUsersResponse> {
    call_rpc(ctx, "ListServiceUsers", &ListServiceUsersRequest { org_id }).await
}
