//! Profile and refresh endpoint calls.
//!
//! Real HTTP via `gloo-net` in the browser; on non-wasm targets the
//! functions are stubs so the crate compiles and its state logic stays
//! testable on the host.

use crate::config::{RefreshPolicy, SessionConfig};
use crate::error::SessionError;
use crate::session::UserProfile;

/// Fetch the signed-in user's profile using ambient cookie credentials.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_profile() -> Result<UserProfile, SessionError> {
    let resp = gloo_net::http::Request::get(SessionConfig::PROFILE_ENDPOINT)
        .send()
        .await
        .map_err(|err| SessionError::Network(err.to_string()))?;
    if !resp.ok() {
        return Err(SessionError::ProfileStatus(resp.status()));
    }
    resp.json()
        .await
        .map_err(|err| SessionError::Decode(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_profile() -> Result<UserProfile, SessionError> {
    Err(SessionError::Network(
        "profile endpoint is only reachable in the browser".to_owned(),
    ))
}

/// Ping the refresh endpoint and interpret the outcome per `policy`.
#[cfg(target_arch = "wasm32")]
pub async fn refresh_session(policy: RefreshPolicy) -> Result<(), SessionError> {
    let resp = gloo_net::http::Request::get(SessionConfig::REFRESH_ENDPOINT)
        .send()
        .await
        .map_err(|err| SessionError::Network(err.to_string()))?;
    interpret_refresh(policy, resp.status())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn refresh_session(policy: RefreshPolicy) -> Result<(), SessionError> {
    let _ = policy;
    Err(SessionError::Network(
        "refresh endpoint is only reachable in the browser".to_owned(),
    ))
}

/// Decide what a completed refresh response means.
///
/// Kept separate from the request so both readings of the backend contract
/// can be pinned by tests.
pub fn interpret_refresh(policy: RefreshPolicy, status: u16) -> Result<(), SessionError> {
    let ok = (200..300).contains(&status);
    match policy {
        RefreshPolicy::IgnoreSuccess if ok => Ok(()),
        _ => Err(SessionError::RefreshStatus(status)),
    }
}
