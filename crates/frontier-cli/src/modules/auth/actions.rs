use reqwest::cookie::Jar;
use tracing::{debug, warn};

use super::http::{complete_signin, initiate_signin, list_auth_strategies};
use crate::modules::auth::{OtpSource, SignInError, SignInSession, SignInState};

/// Tracks the handshake position so every transition is logged in one place.
struct Handshake {
    state: SignInState,
}

impl Handshake {
    fn new() -> Self {
        Self {
            state: SignInState::Init,
        }
    }

    fn advance(&mut self, next: SignInState) {
        debug!(from = self.state.as_str(), to = next.as_str(), "sign-in transition");
        self.state = next;
    }

    fn fail(&mut self, error: SignInError) -> SignInError {
        debug!(at = self.state.as_str(), error = %error, "sign-in failed");
        self.advance(SignInState::Failed);
        error
    }
}

/// Runs start flow → fetch OTP → callback. Each step only runs when the
/// previous one succeeded; nothing is retried. `client` must be built over
/// `jar`.
pub(crate) async fn signin_flow(
    client: &reqwest::Client,
    jar: &Jar,
    base_url: &str,
    email: &str,
    strategy: &str,
    otp_source: &dyn OtpSource,
) -> Result<SignInSession, SignInError> {
    let mut handshake = Handshake::new();
    println!("Starting Connect RPC authentication flow for {email}");
    println!("{}", "=".repeat(50));

    println!("Checking available authentication strategies...");
    match list_auth_strategies(client, base_url).await {
        Ok(strategies) => {
            println!("Available strategies:");
            for strategy in strategies {
                println!("   - {}", strategy.name.as_deref().unwrap_or("N/A"));
            }
        }
        Err(err) => warn!(error = %err, "could not list authentication strategies"),
    }
    println!();

    println!("Starting authentication flow for {email}");
    let flow = initiate_signin(client, base_url, email, strategy)
        .await
        .map_err(|err| handshake.fail(SignInError::StartFlow(err)))?;
    let Some(flow_id) = flow.state else {
        return Err(handshake.fail(SignInError::MissingFlowId));
    };
    println!("Flow ID/State: {flow_id}");
    println!("Endpoint: {}", flow.endpoint.as_deref().unwrap_or("N/A"));
    handshake.advance(SignInState::FlowStarted);

    println!("Fetching OTP using flow ID: {flow_id}");
    let code = match otp_source.fetch_code(&flow_id).await {
        Ok(Some(code)) => code,
        Ok(None) => {
            return Err(handshake.fail(SignInError::MissingCode { flow_id }));
        }
        Err(error) => {
            return Err(handshake.fail(SignInError::CodeLookup { flow_id, error }));
        }
    };
    println!("Using OTP: {code}");
    handshake.advance(SignInState::CodeRetrieved);

    println!("Completing authentication with code: {code}");
    let session = complete_signin(client, jar, base_url, email, &code, &flow_id, strategy)
        .await
        .map_err(|err| handshake.fail(SignInError::Callback(err)))?;

    for (name, value) in &session.headers {
        println!("{name}: {value}");
    }
    if session.cookies.is_empty() {
        println!("No cookies received");
    } else {
        println!("Authentication cookies:");
        for (name, value) in session.cookies.iter() {
            println!("   {name}={value}");
        }
        if let Some(header) = session.cookies.header_value() {
            println!();
            println!("Cookie header for curl:");
            println!("Cookie: {header}");
        }
    }

    if session.cookies.is_empty() && session.headers.is_empty() {
        return Err(handshake.fail(SignInError::NoSession));
    }
    handshake.advance(SignInState::Authenticated);
    println!();
    println!("Authentication successful!");
    Ok(session)
}
