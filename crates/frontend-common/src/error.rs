//! Session error types

use thiserror::Error;

/// Failures recorded on the session.
///
/// `Clone + PartialEq` so the error can live inside Yew context state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("profile request failed with status {0}")]
    ProfileStatus(u16),

    #[error("session refresh rejected with status {0}")]
    RefreshStatus(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed session payload: {0}")]
    Decode(String),
}
