use crate::modules::system::http::call_rpc;
use crate::modules::system::ProbeContext;
use crate::modules::users::{
    CreateUserRequest, CurrentPrincipal, CurrentUserResponse, ListUsersRequest,
    ListUsersResponse, UpdateCurrentUserRequest, UpdateUserRequest, User, UserIdRequest,
    UserRequestBody, UserResponse,
};

pub(crate) async fn list_users_page(
    ctx: &ProbeContext<'_>,
    page_num: u32,
    page_size: u32,
) -> anyhow::Result<ListUsersResponse> {
    let payload = ListUsersRequest {
        page_size,
        page_num,
        keyword: "",
        org_id: "",
        group_id: "",
        state: "",
    };
    call_rpc(ctx, "ListUsers", &payload).await
}

pub(crate) async fn create_user(
    ctx: &ProbeContext<'_>,
    body: UserRequestBody,
) -> anyhow::Result<User> {
    let response: UserResponse = call_rpc(ctx, "CreateUser", &CreateUserRequest { body }).await?;
    Ok(response.user.unwrap_or_default())
}

pub(crate) async fn get_user(ctx: &ProbeContext<'_>, id: &str) -> anyhow::Result<User> {
    let response: UserResponse = call_rpc(ctx, "GetUser", &UserIdRequest { id }).await?;
    Ok(response.user.unwrap_or_default())
}

pub(crate) async fn get_current_user(
    ctx: &ProbeContext<'_>,
) -> anyhow::Result<Option<CurrentPrincipal>> {
    let response: CurrentUserResponse =
        call_rpc(ctx, "GetCurrentUser", &serde_json::json!({})).await?;
    Ok(match (response.user, response.serviceuser) {
        (Some(user), _) => Some(CurrentPrincipal::User(user)),
        (None, Some(service_user)) => Some(CurrentPrincipal::ServiceUser(service_user)),
        (None, None) => None,
    })
}

pub(crate) async fn update_user(
    ctx: &ProbeContext<'_>,
    id: &str,
    body: UserRequestBody,
) -> anyhow::Result<User> {
    let response: UserResponse =
        call_rpc(ctx, "UpdateUser", &UpdateUserRequest { id, body }).await?;
    Ok(response.user.unwrap_or_default())
}

pub(crate) async fn update_current_user(
    ctx: &ProbeContext<'_>,
    body: UserRequestBody,
) -> anyhow::Result<User> {
    let response: UserResponse =
        call_rpc(ctx, "UpdateCurrentUser", &UpdateCurrentUserRequest { body }).await?;
    Ok(response.user.unwrap_or_default())
}

pub(crate) async fn enable_user(ctx: &ProbeContext<'_>, id: &str) -> anyhow::Result<()> {
    let _: serde_json::Value = call_rpc(ctx, "EnableUser", &UserIdRequest { id }).await?;
    Ok(())
}

pub(crate) async fn disable_user(ctx: &ProbeContext<'_>, id: &str) -> anyhow::Result<()> {
    let _: serde_json::Value = call_rpc(ctx, "DisableUser", &UserIdRequest { id }).await?;
    Ok(())
}

pub(crate) async fn delete_user(
    ctx: &ProbeContext<'_>,
    id: &str,
) -> anyhow::Result<serde_json::Value> {
    call_rpc(ctx, "DeleteUser", &UserIdRequest { id }).await
}
