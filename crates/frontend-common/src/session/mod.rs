//! Session bootstrap: reducer-backed context plus the provider component
//! that owns the profile load, the refresh timer, and cross-tab sync.

pub mod context;
pub mod provider;

#[cfg(test)]
mod context_tests;

pub use context::{
    display_name, use_session, use_user, SessionAction, SessionContext, SessionState, UserProfile,
};
pub use provider::SessionProvider;
