use async_trait::async_trait;
use mockito::{Matcher, Server, ServerGuard};
use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;
use serde_json::json;
use std::sync::{Arc, Mutex};

use crate::cli_args::ProbeArgs;
use crate::cli_command::handle_probes;
use crate::modules::auth::{
    complete_signin, initiate_signin, session_headers, signin_flow, OtpSource, SessionCookies,
    SignInError, StaticOtpSource,
};
use crate::modules::system::http::{rpc_url, session_client};
use crate::modules::system::ProbeContext;
use crate::modules::users::{collect_users, MAX_PAGES, PAGE_SIZE};

const FLOW_ID: &str = "0190f5a4-6c1e-7d3a-9b52-3f1e2d4c5b6a";
const RPC: &str = "/raystack.frontier.v1beta1.FrontierService";

/// Records every flow ID it is asked about and answers with a fixed code.
struct RecordingOtpSource {
    code: Option<String>,
    requested: Mutex<Vec<String>>,
}

impl RecordingOtpSource {
    fn new(code: Option<&str>) -> Self {
        Self {
            code: code.map(str::to_string),
            requested: Mutex::new(Vec::new()),
        }
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().expect("lock").clone()
    }
}

#[async_trait]
impl OtpSource for RecordingOtpSource {
    async fn fetch_code(&self, flow_id: &str) -> anyhow::Result<Option<String>> {
        self.requested
            .lock()
            .map_err(|_| anyhow::anyhow!("poisoned"))?
            .push(flow_id.to_string());
        Ok(self.code.clone())
    }
}

fn path(method: &str) -> String {
    format!("{RPC}/{method}")
}

async fn mock_strategies(server: &mut ServerGuard) {
    server
        .mock("POST", path("ListAuthStrategies").as_str())
        .with_status(200)
        .with_body(json!({ "strategies": [{ "name": "mailotp" }] }).to_string())
        .create_async()
        .await;
}

async fn mock_authenticate(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("POST", path("Authenticate").as_str())
        .match_body(Matcher::PartialJson(json!({
            "strategyName": "mailotp",
            "email": "user@example.com",
            "redirectOnstart": false
        })))
        .with_status(200)
        .with_header("set-cookie", "flow_session=f1; Path=/")
        .with_body(json!({ "state": FLOW_ID, "endpoint": "" }).to_string())
        .create_async()
        .await
}

fn users_page(start: usize, count: usize) -> serde_json::Value {
    let users: Vec<serde_json::Value> = (start..start + count)
        .map(|index| {
            json!({
                "id": format!("user-{index}"),
                "name": format!("user-{index}"),
                "email": format!("user{index}@example.com")
            })
        })
        .collect();
    let total = users.len();
    json!({ "users": users, "count": total })
}

fn signin_client() -> (Arc<Jar>, reqwest::Client) {
    let jar = Arc::new(Jar::default());
    let client = session_client(Arc::clone(&jar)).expect("client");
    (jar, client)
}

/// A client whose jar already holds an established session for `server_url`.
fn signed_in_client(server_url: &str) -> reqwest::Client {
    let url = Url::parse(server_url).expect("server url");
    let jar = Arc::new(Jar::default());
    jar.add_cookie_str("sid=abc123; Path=/", &url);
    jar.add_cookie_str("theme=dark; Path=/", &url);
    session_client(jar).expect("client")
}

fn session_cookie_header() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::Regex("sid=abc123".to_string()),
        Matcher::Regex("theme=dark".to_string()),
    ])
}

#[test]
fn rpc_url_joins_service_and_method() {
    assert_eq!(
        rpc_url("http://localhost:8002/", "GetUser"),
        "http://localhost:8002/raystack.frontier.v1beta1.FrontierService/GetUser"
    );
}

#[test]
fn cookie_snapshot_skips_expired_cookies() {
    let url = Url::parse("http://127.0.0.1:8002/").expect("url");
    let jar = Jar::default();
    jar.add_cookie_str("theme=dark; Path=/", &url);
    jar.add_cookie_str("sid=abc123; Path=/", &url);
    jar.add_cookie_str("gone=x; Path=/", &url);
    jar.add_cookie_str("gone=; Path=/; Max-Age=0", &url);

    let cookies = SessionCookies::capture(&jar, &url);
    assert_eq!(cookies.len(), 2);
    assert_eq!(
        cookies.header_value().as_deref(),
        Some("sid=abc123; theme=dark")
    );
    assert_eq!(SessionCookies::default().header_value(), None);
}

#[test]
fn session_headers_match_case_insensitively() {
    let mut headers = HeaderMap::new();
    headers.append("set-cookie", HeaderValue::from_static("sid=abc"));
    headers.append("set-cookie", HeaderValue::from_static("theme=dark"));
    headers.insert(
        HeaderName::from_static("x-session-id"),
        HeaderValue::from_static("s-1"),
    );
    headers.insert("content-type", HeaderValue::from_static("application/json"));

    let found = session_headers(&headers);
    assert_eq!(found.len(), 2);
    assert_eq!(
        found.get("set-cookie").map(String::as_str),
        Some("sid=abc, theme=dark")
    );
    assert_eq!(found.get("x-session-id").map(String::as_str), Some("s-1"));
}

#[tokio::test]
async fn signin_uses_started_flow_for_lookup_and_callback() {
    let mut server = Server::new_async().await;
    mock_strategies(&mut server).await;
    let authenticate = mock_authenticate(&mut server).await;
    let callback = server
        .mock("POST", path("AuthCallback").as_str())
        .match_header("cookie", "flow_session=f1")
        .match_body(Matcher::PartialJson(json!({
            "strategyName": "mailotp",
            "state": FLOW_ID,
            "code": "482913"
        })))
        .with_status(200)
        .with_header("set-cookie", "sid=abc123; Path=/; HttpOnly")
        .with_body("{}")
        .create_async()
        .await;

    let otp = RecordingOtpSource::new(Some("482913"));
    let (jar, client) = signin_client();
    let session = signin_flow(&client, &jar, &server.url(), "user@example.com", "mailotp", &otp)
        .await
        .expect("signin ok");

    authenticate.assert_async().await;
    callback.assert_async().await;
    assert_eq!(otp.requested(), vec![FLOW_ID.to_string()]);
    assert_eq!(
        session.cookies.header_value().as_deref(),
        Some("flow_session=f1; sid=abc123")
    );
    assert!(session.headers.contains_key("set-cookie"));
}

#[tokio::test]
async fn signin_continues_when_strategy_listing_fails() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", path("ListAuthStrategies").as_str())
        .with_status(500)
        .create_async()
        .await;
    mock_authenticate(&mut server).await;
    server
        .mock("POST", path("AuthCallback").as_str())
        .with_status(200)
        .with_header("set-cookie", "sid=abc123")
        .with_body("{}")
        .create_async()
        .await;

    let otp = StaticOtpSource::new("111111");
    let (jar, client) = signin_client();
    let session = signin_flow(&client, &jar, &server.url(), "user@example.com", "mailotp", &otp)
        .await
        .expect("signin ok");
    assert_eq!(session.cookies.header_value().as_deref(), Some("sid=abc123"));
}

#[tokio::test]
async fn cleared_cookie_is_dropped_from_session() {
    let mut server = Server::new_async().await;
    mock_strategies(&mut server).await;
    mock_authenticate(&mut server).await;
    server
        .mock("POST", path("AuthCallback").as_str())
        .match_header("cookie", "flow_session=f1")
        .with_status(200)
        .with_header("set-cookie", "flow_session=; Path=/; Max-Age=0")
        .with_header("set-cookie", "sid=abc123; Path=/")
        .with_body("{}")
        .create_async()
        .await;
    let current_user = server
        .mock("POST", path("GetCurrentUser").as_str())
        .match_header("cookie", "sid=abc123")
        .with_status(200)
        .with_body(json!({ "user": { "id": "me" } }).to_string())
        .expect(1)
        .create_async()
        .await;

    let otp = StaticOtpSource::new("482913");
    let (jar, client) = signin_client();
    let session = signin_flow(&client, &jar, &server.url(), "user@example.com", "mailotp", &otp)
        .await
        .expect("signin ok");
    assert_eq!(session.cookies.len(), 1);
    assert_eq!(session.cookies.header_value().as_deref(), Some("sid=abc123"));

    let ctx = ProbeContext {
        client: &client,
        base_url: &server.url(),
    };
    let args = ProbeArgs {
        test_get_current_user: true,
        ..ProbeArgs::default()
    };
    let summary = handle_probes(&args, true, &ctx).await;
    assert_eq!(summary.passed, 1);
    current_user.assert_async().await;
}

#[tokio::test]
async fn strategy_listing_cookie_carries_through_signin() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", path("ListAuthStrategies").as_str())
        .with_status(200)
        .with_header("set-cookie", "csrf=tok")
        .with_body(json!({ "strategies": [{ "name": "mailotp" }] }).to_string())
        .create_async()
        .await;
    let authenticate = server
        .mock("POST", path("Authenticate").as_str())
        .match_header("cookie", "csrf=tok")
        .with_status(200)
        .with_header("set-cookie", "flow_session=f1; Path=/")
        .with_body(json!({ "state": FLOW_ID }).to_string())
        .expect(1)
        .create_async()
        .await;
    let callback = server
        .mock("POST", path("AuthCallback").as_str())
        .match_header(
            "cookie",
            Matcher::AllOf(vec![
                Matcher::Regex("csrf=tok".to_string()),
                Matcher::Regex("flow_session=f1".to_string()),
            ]),
        )
        .with_status(200)
        .with_header("set-cookie", "sid=abc123; Path=/")
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let otp = StaticOtpSource::new("482913");
    let (jar, client) = signin_client();
    let session = signin_flow(&client, &jar, &server.url(), "user@example.com", "mailotp", &otp)
        .await
        .expect("signin ok");

    authenticate.assert_async().await;
    callback.assert_async().await;
    assert_eq!(
        session.cookies.header_value().as_deref(),
        Some("csrf=tok; flow_session=f1; sid=abc123")
    );
}

#[tokio::test]
async fn failed_flow_start_skips_code_lookup() {
    let mut server = Server::new_async().await;
    mock_strategies(&mut server).await;
    server
        .mock("POST", path("Authenticate").as_str())
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;
    let callback = server
        .mock("POST", path("AuthCallback").as_str())
        .expect(0)
        .create_async()
        .await;

    let otp = RecordingOtpSource::new(Some("482913"));
    let (jar, client) = signin_client();
    let err = signin_flow(&client, &jar, &server.url(), "user@example.com", "mailotp", &otp)
        .await
        .expect_err("flow start should fail");

    assert!(matches!(err, SignInError::StartFlow(_)));
    assert!(err.to_string().contains("boom"));
    assert!(otp.requested().is_empty());
    callback.assert_async().await;
}

#[tokio::test]
async fn missing_flow_id_skips_code_lookup() {
    let mut server = Server::new_async().await;
    mock_strategies(&mut server).await;
    server
        .mock("POST", path("Authenticate").as_str())
        .with_status(200)
        .with_body(json!({ "endpoint": "" }).to_string())
        .create_async()
        .await;

    let otp = RecordingOtpSource::new(Some("482913"));
    let (jar, client) = signin_client();
    let err = signin_flow(&client, &jar, &server.url(), "user@example.com", "mailotp", &otp)
        .await
        .expect_err("missing state should fail");

    assert!(matches!(err, SignInError::MissingFlowId));
    assert!(otp.requested().is_empty());
}

#[tokio::test]
async fn missing_code_skips_callback() {
    let mut server = Server::new_async().await;
    mock_strategies(&mut server).await;
    mock_authenticate(&mut server).await;
    let callback = server
        .mock("POST", path("AuthCallback").as_str())
        .expect(0)
        .create_async()
        .await;

    let otp = RecordingOtpSource::new(None);
    let (jar, client) = signin_client();
    let err = signin_flow(&client, &jar, &server.url(), "user@example.com", "mailotp", &otp)
        .await
        .expect_err("missing code should fail");

    assert!(matches!(err, SignInError::MissingCode { ref flow_id } if flow_id == FLOW_ID));
    assert_eq!(otp.requested(), vec![FLOW_ID.to_string()]);
    callback.assert_async().await;
}

#[tokio::test]
async fn rejected_callback_fails_signin() {
    let mut server = Server::new_async().await;
    mock_strategies(&mut server).await;
    mock_authenticate(&mut server).await;
    server
        .mock("POST", path("AuthCallback").as_str())
        .with_status(401)
        .with_body(json!({ "code": "unauthenticated" }).to_string())
        .create_async()
        .await;

    let otp = StaticOtpSource::new("000000");
    let (jar, client) = signin_client();
    let err = signin_flow(&client, &jar, &server.url(), "user@example.com", "mailotp", &otp)
        .await
        .expect_err("callback should fail");

    assert!(matches!(err, SignInError::Callback(_)));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn callback_without_session_data_fails() {
    let mut server = Server::new_async().await;
    mock_strategies(&mut server).await;
    server
        .mock("POST", path("Authenticate").as_str())
        .with_status(200)
        .with_body(json!({ "state": FLOW_ID }).to_string())
        .create_async()
        .await;
    server
        .mock("POST", path("AuthCallback").as_str())
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let otp = StaticOtpSource::new("000000");
    let (jar, client) = signin_client();
    let err = signin_flow(&client, &jar, &server.url(), "user@example.com", "mailotp", &otp)
        .await
        .expect_err("no session should fail");
    assert!(matches!(err, SignInError::NoSession));
}

#[tokio::test]
async fn initiate_and_complete_can_run_standalone() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", path("Authenticate").as_str())
        .with_status(200)
        .with_body(json!({ "state": FLOW_ID, "endpoint": "https://idp.example.com" }).to_string())
        .create_async()
        .await;
    server
        .mock("POST", path("AuthCallback").as_str())
        .with_status(200)
        .with_header("x-frontier-session", "s-1")
        .with_body("{}")
        .create_async()
        .await;

    let (jar, client) = signin_client();
    let flow = initiate_signin(&client, &server.url(), "user@example.com", "mailotp")
        .await
        .expect("initiate");
    assert_eq!(flow.state.as_deref(), Some(FLOW_ID));
    assert_eq!(flow.endpoint.as_deref(), Some("https://idp.example.com"));

    let session = complete_signin(
        &client,
        &jar,
        &server.url(),
        "user@example.com",
        "482913",
        FLOW_ID,
        "mailotp",
    )
    .await
    .expect("complete");
    assert!(session.cookies.is_empty());
    assert_eq!(
        session.headers.get("x-frontier-session").map(String::as_str),
        Some("s-1")
    );
}

#[tokio::test]
async fn pagination_stops_on_short_page() {
    let mut server = Server::new_async().await;
    let mut mocks = Vec::new();
    for (page_num, start, count) in [(1, 0, 10), (2, 10, 10), (3, 20, 5)] {
        let mock = server
            .mock("POST", path("ListUsers").as_str())
            .match_body(Matcher::PartialJson(json!({
                "pageNum": page_num,
                "pageSize": PAGE_SIZE
            })))
            .with_status(200)
            .with_body(users_page(start, count).to_string())
            .expect(1)
            .create_async()
            .await;
        mocks.push(mock);
    }

    let client = signed_in_client(&server.url());
    let ctx = ProbeContext {
        client: &client,
        base_url: &server.url(),
    };
    let pages = collect_users(&ctx, true).await.expect("collect users");

    assert_eq!(pages.requests, 3);
    assert_eq!(pages.pages_fetched, 3);
    assert_eq!(pages.users.len(), 25);
    assert_eq!(pages.users[24].id.as_deref(), Some("user-24"));
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn pagination_stops_at_page_ceiling() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("ListUsers").as_str())
        .with_status(200)
        .with_body(users_page(0, PAGE_SIZE as usize).to_string())
        .expect(MAX_PAGES as usize)
        .create_async()
        .await;

    let client = signed_in_client(&server.url());
    let ctx = ProbeContext {
        client: &client,
        base_url: &server.url(),
    };
    let pages = collect_users(&ctx, true).await.expect("collect users");

    assert_eq!(pages.requests, 50);
    assert_eq!(pages.users.len(), 500);
    mock.assert_async().await;
}

#[tokio::test]
async fn pagination_disabled_fetches_one_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("ListUsers").as_str())
        .with_status(200)
        .with_body(users_page(0, PAGE_SIZE as usize).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = signed_in_client(&server.url());
    let ctx = ProbeContext {
        client: &client,
        base_url: &server.url(),
    };
    let pages = collect_users(&ctx, false).await.expect("collect users");

    assert_eq!(pages.requests, 1);
    assert_eq!(pages.users.len(), 10);
    mock.assert_async().await;
}

#[tokio::test]
async fn checks_forward_session_cookies_unchanged() {
    let mut server = Server::new_async().await;
    let mut mocks = Vec::new();
    let responses = [
        ("ListUsers", users_page(0, 3)),
        (
            "GetCurrentUser",
            json!({ "user": { "id": "me", "email": "user@example.com" } }),
        ),
        ("ListCurrentUserGroups", json!({ "groups": [] })),
        ("ListOrganizationsByCurrentUser", json!({})),
        ("ListProjectsByCurrentUser", json!({ "projects": [], "count": 0 })),
        (
            "ListServiceUsers",
            json!({ "serviceusers": [{ "id": "su-1", "orgId": "org-1" }] }),
        ),
    ];
    for (method, body) in responses {
        let mock = server
            .mock("POST", path(method).as_str())
            .match_header("cookie", session_cookie_header())
            .with_status(200)
            .with_body(body.to_string())
            .expect(1)
            .create_async()
            .await;
        mocks.push(mock);
    }

    let client = signed_in_client(&server.url());
    let ctx = ProbeContext {
        client: &client,
        base_url: &server.url(),
    };
    let args = ProbeArgs {
        test_list_users: true,
        test_get_current_user: true,
        test_list_current_user_groups: true,
        test_list_organizations_by_current_user: true,
        test_list_projects_by_current_user: true,
        test_list_service_users: Some("org-1".to_string()),
        ..ProbeArgs::default()
    };
    let summary = handle_probes(&args, true, &ctx).await;

    assert_eq!(summary.passed, 6);
    assert_eq!(summary.failed, 0);
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn created_user_id_feeds_later_checks() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", path("CreateUser").as_str())
        .match_body(Matcher::PartialJson(json!({
            "body": { "metadata": { "source": "api_test", "test_run": true } }
        })))
        .with_status(200)
        .with_body(json!({ "user": { "id": "new-user", "email": "testuser1234@example.com" } }).to_string())
        .create_async()
        .await;
    let get_user = server
        .mock("POST", path("GetUser").as_str())
        .match_body(Matcher::Json(json!({ "id": "new-user" })))
        .with_status(200)
        .with_body(json!({ "user": { "id": "new-user" } }).to_string())
        .expect(1)
        .create_async()
        .await;
    let delete_user = server
        .mock("POST", path("DeleteUser").as_str())
        .match_body(Matcher::Json(json!({ "id": "new-user" })))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let client = signed_in_client(&server.url());
    let ctx = ProbeContext {
        client: &client,
        base_url: &server.url(),
    };
    let args = ProbeArgs {
        test_create_user: true,
        test_get_user: Some("created".to_string()),
        test_delete_user: Some("created".to_string()),
        ..ProbeArgs::default()
    };
    let summary = handle_probes(&args, true, &ctx).await;

    assert_eq!(summary.passed, 3);
    get_user.assert_async().await;
    delete_user.assert_async().await;
}

#[tokio::test]
async fn created_placeholder_without_create_is_skipped() {
    let mut server = Server::new_async().await;
    let enable = server
        .mock("POST", path("EnableUser").as_str())
        .expect(0)
        .create_async()
        .await;

    let client = signed_in_client(&server.url());
    let ctx = ProbeContext {
        client: &client,
        base_url: &server.url(),
    };
    let args = ProbeArgs {
        test_enable_user: Some("created".to_string()),
        ..ProbeArgs::default()
    };
    let summary = handle_probes(&args, true, &ctx).await;

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.ran(), 0);
    enable.assert_async().await;
}

#[tokio::test]
async fn failing_check_does_not_stop_the_rest() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", path("DisableUser").as_str())
        .with_status(404)
        .with_body(json!({ "code": "not_found" }).to_string())
        .create_async()
        .await;
    let groups = server
        .mock("POST", path("ListUserGroups").as_str())
        .match_body(Matcher::Json(json!({ "id": "user-7" })))
        .with_status(200)
        .with_body(json!({ "groups": [{ "id": "g-1", "name": "ops", "membersCount": 2 }] }).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = signed_in_client(&server.url());
    let ctx = ProbeContext {
        client: &client,
        base_url: &server.url(),
    };
    let args = ProbeArgs {
        test_disable_user: Some("user-7".to_string()),
        test_list_user_groups: Some("user-7".to_string()),
        ..ProbeArgs::default()
    };
    let summary = handle_probes(&args, true, &ctx).await;

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.passed, 1);
    groups.assert_async().await;
}

#[tokio::test]
async fn update_current_user_keeps_current_email() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", path("GetCurrentUser").as_str())
        .with_status(200)
        .with_body(
            json!({
                "user": {
                    "id": "me",
                    "email": "user@example.com",
                    "title": "Old",
                    "metadata": { "department": "sales" }
                }
            })
            .to_string(),
        )
        .create_async()
        .await;
    let update = server
        .mock("POST", path("UpdateCurrentUser").as_str())
        .match_body(Matcher::PartialJson(json!({
            "body": { "email": "user@example.com", "metadata": { "department": "product" } }
        })))
        .with_status(200)
        .with_body(json!({ "user": { "id": "me", "email": "user@example.com" } }).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = signed_in_client(&server.url());
    let ctx = ProbeContext {
        client: &client,
        base_url: &server.url(),
    };
    let args = ProbeArgs {
        test_update_current_user: true,
        ..ProbeArgs::default()
    };
    let summary = handle_probes(&args, true, &ctx).await;

    assert_eq!(summary.passed, 1);
    update.assert_async().await;
}

#[tokio::test]
async fn listing_requests_send_only_their_keys() {
    let mut server = Server::new_async().await;
    let mut mocks = Vec::new();
    let expected = [
        ("ListCurrentUserGroups", json!({})),
        ("ListOrganizationsByUser", json!({ "id": "user-7" })),
        ("ListOrganizationsByCurrentUser", json!({})),
        ("ListProjectsByCurrentUser", json!({})),
        ("ListServiceUsers", json!({ "orgId": "org-1" })),
    ];
    for (method, body) in expected {
        let mock = server
            .mock("POST", path(method).as_str())
            .match_body(Matcher::Json(body))
            .with_status(200)
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;
        mocks.push(mock);
    }

    let client = signed_in_client(&server.url());
    let ctx = ProbeContext {
        client: &client,
        base_url: &server.url(),
    };
    let args = ProbeArgs {
        test_list_current_user_groups: true,
        test_list_organizations_by_user: Some("user-7".to_string()),
        test_list_organizations_by_current_user: true,
        test_list_projects_by_current_user: true,
        test_list_service_users: Some("org-1".to_string()),
        ..ProbeArgs::default()
    };
    let summary = handle_probes(&args, true, &ctx).await;

    assert_eq!(summary.passed, 5);
    for mock in mocks {
        mock.assert_async().await;
    }
}
