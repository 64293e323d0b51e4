//! Global session context and reducer

use std::rc::Rc;

use serde_json::Value;
use yew::prelude::*;

use crate::error::SessionError;
use crate::storage;

/// Identity record returned by the profile endpoint.
///
/// Deliberately opaque: the backend owns the shape and the client never
/// validates it against a schema.
pub type UserProfile = Value;

/// Session state shared with every view through context.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    pub error: Option<SessionError>,
    /// True until the initial profile fetch resolves either way.
    pub is_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            error: None,
            is_loading: true,
        }
    }
}

/// State transitions. Each originator owns a disjoint set: the loader
/// dispatches `ProfileLoaded`/`ProfileFailed`, the refresher
/// `RefreshFailed`, and the storage listener `StorageChanged`.
pub enum SessionAction {
    /// Initial profile fetch succeeded.
    ProfileLoaded(UserProfile),
    /// Initial profile fetch failed.
    ProfileFailed(SessionError),
    /// A periodic refresh was interpreted as failed.
    RefreshFailed(SessionError),
    /// Another tab changed the persisted mirror; `None` means it was removed.
    StorageChanged(Option<UserProfile>),
}

/// Session context handle
pub type SessionContext = UseReducerHandle<SessionState>;

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::ProfileLoaded(user) => {
                // Overwrite semantics; also the explicit ERRORED -> OK
                // transition: a successful load clears a recorded error.
                storage::store_user(&user);
                Rc::new(Self {
                    user: Some(user),
                    error: None,
                    is_loading: false,
                })
            }
            SessionAction::ProfileFailed(err) => {
                storage::clear_user();
                Rc::new(Self {
                    user: None,
                    error: Some(err),
                    is_loading: false,
                })
            }
            SessionAction::RefreshFailed(err) => Rc::new(Self {
                error: Some(err),
                ..(*self).clone()
            }),
            // Came from the mirror, so no write-back.
            SessionAction::StorageChanged(user) => Rc::new(Self {
                user,
                ..(*self).clone()
            }),
        }
    }
}

/// Best-effort display name from the opaque profile record.
pub fn display_name(profile: &UserProfile) -> Option<String> {
    profile.get("name").and_then(Value::as_str).map(str::to_owned)
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to get the current user, if signed in
#[hook]
pub fn use_user() -> Option<UserProfile> {
    let session = use_session();
    session.user.clone()
}
