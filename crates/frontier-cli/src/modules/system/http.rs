use reqwest::cookie::Jar;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::modules::system::ProbeContext;

pub(crate) const RPC_SERVICE: &str = "raystack.frontier.v1beta1.FrontierService";

pub(crate) fn rpc_url(base_url: &str, method: &str) -> String {
    format!("{}/{}/{}", base_url.trim_end_matches('/'), RPC_SERVICE, method)
}

/// Client whose every request reads cookies from and stores cookies into
/// `jar`, so one run shares a single session.
pub(crate) fn session_client(jar: Arc<Jar>) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().cookie_provider(jar).build()
}

/// POSTs a Connect RPC JSON request. Non-2xx responses are returned as-is.
pub(crate) async fn post_rpc<P: Serialize + ?Sized>(
    client: &reqwest::Client,
    base_url: &str,
    method: &str,
    payload: &P,
) -> anyhow::Result<reqwest::Response> {
    let url = rpc_url(base_url, method);
    debug!(rpc = %method, url = %url, "http request");
    let start = std::time::Instant::now();
    let response = client
        .post(&url)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .json(payload)
        .send()
        .await?;
    debug!(
        rpc = %method,
        url = %url,
        status = %response.status(),
        elapsed_ms = start.elapsed().as_millis(),
        "http response"
    );
    Ok(response)
}

pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    method: &str,
) -> anyhow::Result<T> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("{method} failed: {status} {body}");
    }
    Ok(response.json::<T>().await?)
}

pub(crate) async fn call_rpc<P: Serialize + ?Sized, T: DeserializeOwned>(
    ctx: &ProbeContext<'_>,
    method: &str,
    payload: &P,
) -> anyhow::Result<T> {
    let response = post_rpc(ctx.client, ctx.base_url, method, payload).await?;
    read_json(response, method).await
}

pub(crate) fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
