use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::HeaderMap;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateRequest<'a> {
    pub strategy_name: &'a str,
    pub email: &'a str,
    pub redirect_onstart: bool,
}

#[derive(Deserialize, Default)]
pub struct AuthenticateResponse {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCallbackRequest<'a> {
    pub strategy_name: &'a str,
    pub code: &'a str,
    pub state: &'a str,
}

#[derive(Deserialize)]
pub struct AuthStrategy {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct ListAuthStrategiesResponse {
    #[serde(default)]
    pub strategies: Vec<AuthStrategy>,
}

/// Result of starting a flow. `state` is the flow identifier; it is absent
/// when the service response did not carry one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowStart {
    pub state: Option<String>,
    pub endpoint: Option<String>,
}

/// Snapshot of the cookies the client's jar sends to the RPC service,
/// ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCookies {
    entries: BTreeMap<String, String>,
}

impl SessionCookies {
    /// Reads what `jar` would attach to a request for `url`. Cookies the
    /// service expired or cleared are no longer in the jar.
    pub fn capture(jar: &Jar, url: &Url) -> Self {
        let mut entries = BTreeMap::new();
        if let Some(header) = jar.cookies(url) {
            let raw = String::from_utf8_lossy(header.as_bytes()).into_owned();
            for pair in raw.split(';').map(str::trim).filter(|pair| !pair.is_empty()) {
                let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                entries.insert(name.to_string(), value.to_string());
            }
        }
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// `name=value; name=value`, or `None` when no cookie is held.
    pub fn header_value(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        Some(
            self.iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<String>>()
                .join("; "),
        )
    }
}

/// Response headers whose name mentions `session` or `cookie`, keyed by the
/// lowercase header name. Repeated headers are joined with `, `.
pub fn session_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut found: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_ascii_lowercase();
        if !key.contains("session") && !key.contains("cookie") {
            continue;
        }
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        found
            .entry(key)
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    found
}

/// Terminal success value of the handshake.
#[derive(Debug, Clone, Default)]
pub struct SignInSession {
    pub cookies: SessionCookies,
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInState {
    Init,
    FlowStarted,
    CodeRetrieved,
    Authenticated,
    Failed,
}

impl SignInState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::FlowStarted => "flow_started",
            Self::CodeRetrieved => "code_retrieved",
            Self::Authenticated => "authenticated",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    #[error("could not start authentication flow: {0:#}")]
    StartFlow(anyhow::Error),
    #[error("no state/flow ID found in Authenticate response")]
    MissingFlowId,
    #[error("could not read OTP for flow {flow_id}: {error:#}")]
    CodeLookup {
        flow_id: String,
        error: anyhow::Error,
    },
    #[error("no OTP found for flow {flow_id}")]
    MissingCode { flow_id: String },
    #[error("authentication callback failed: {0:#}")]
    Callback(anyhow::Error),
    #[error("authentication callback returned no session cookies or headers")]
    NoSession,
}
