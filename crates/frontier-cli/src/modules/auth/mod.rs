mod actions;
mod http;
mod otp;
pub(crate) mod types;

pub(crate) use actions::signin_flow;
pub(crate) use otp::{OtpSource, PostgresOtpSource, StaticOtpSource};
pub(crate) use types::{
    session_headers, AuthCallbackRequest, AuthStrategy, AuthenticateRequest,
    AuthenticateResponse, FlowStart, ListAuthStrategiesResponse, SessionCookies, SignInError,
    SignInSession, SignInState,
};
#[cfg(test)]
pub(crate) use http::{complete_signin, initiate_signin};
