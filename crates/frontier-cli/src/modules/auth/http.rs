use reqwest::cookie::Jar;
use reqwest::Url;
use tracing::{debug, info};

use crate::modules::auth::{
    session_headers, AuthCallbackRequest, AuthStrategy, AuthenticateRequest,
    AuthenticateResponse, FlowStart, ListAuthStrategiesResponse, SessionCookies, SignInSession,
};
use crate::modules::system::http::{post_rpc, print_json, read_json, rpc_url};

pub(crate) async fn list_auth_strategies(
    client: &reqwest::Client,
    base_url: &str,
) -> anyhow::Result<Vec<AuthStrategy>> {
    let response = post_rpc(
        client,
        base_url,
        "ListAuthStrategies",
        &serde_json::json!({}),
    )
    .await?;
    let body: ListAuthStrategiesResponse = read_json(response, "ListAuthStrategies").await?;
    Ok(body.strategies)
}

/// Starts an authentication flow for `email`. Cookies set by the service
/// land in the client's jar so the callback is sent from the same session.
pub(crate) async fn initiate_signin(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
    strategy: &str,
) -> anyhow::Result<FlowStart> {
    let payload = AuthenticateRequest {
        strategy_name: strategy,
        email,
        redirect_onstart: false,
    };
    let response = post_rpc(client, base_url, "Authenticate", &payload).await?;
    let body: serde_json::Value = read_json(response, "Authenticate").await?;
    println!("Response:");
    print_json(&body)?;
    let parsed: AuthenticateResponse = serde_json::from_value(body)?;
    let state = parsed.state.filter(|state| !state.trim().is_empty());
    debug!(flow_id = ?state, "authentication flow started");
    Ok(FlowStart {
        state,
        endpoint: parsed.endpoint,
    })
}

/// Completes the flow and snapshots the session `jar` holds afterwards.
/// `jar` must be the one `client` was built with.
pub(crate) async fn complete_signin(
    client: &reqwest::Client,
    jar: &Jar,
    base_url: &str,
    email: &str,
    code: &str,
    state: &str,
    strategy: &str,
) -> anyhow::Result<SignInSession> {
    let payload = AuthCallbackRequest {
        strategy_name: strategy,
        code,
        state,
    };
    info!(email = %email, flow_id = %state, "completing authentication callback");
    let response = post_rpc(client, base_url, "AuthCallback", &payload).await?;
    let headers = session_headers(response.headers());
    let body: serde_json::Value = read_json(response, "AuthCallback").await?;
    println!("Response:");
    print_json(&body)?;
    let cookies = SessionCookies::capture(jar, &Url::parse(&rpc_url(base_url, "AuthCallback"))?);
    debug!(cookies = cookies.len(), headers = headers.len(), "callback session data");
    Ok(SignInSession { cookies, headers })
}
