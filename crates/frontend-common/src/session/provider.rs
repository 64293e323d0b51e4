//! Session provider component

use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::{RefreshPolicy, SessionConfig};
use crate::services::session::{fetch_profile, refresh_session};
use crate::storage;

use super::context::{SessionAction, SessionContext, SessionState};

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    /// How completed refresh responses are interpreted; see [`RefreshPolicy`].
    #[prop_or_default]
    pub refresh_policy: RefreshPolicy,
    pub children: Children,
}

/// Owns the session for the whole application.
///
/// On mount: one profile fetch, a periodic refresh interval, and a `storage`
/// event listener for cross-tab sync. All three are scoped to the provider;
/// the effect's teardown closure cancels the interval and unsubscribes the
/// listener on unmount.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionState::default);
    let refresh_policy = props.refresh_policy;

    {
        let session = session.clone();
        use_effect_with((), move |_| {
            // One-shot profile load against ambient cookie credentials.
            {
                let session = session.clone();
                spawn_local(async move {
                    match fetch_profile().await {
                        Ok(profile) => session.dispatch(SessionAction::ProfileLoaded(profile)),
                        Err(err) => {
                            tracing::warn!(%err, "profile fetch failed");
                            session.dispatch(SessionAction::ProfileFailed(err));
                        }
                    }
                });
            }

            // Periodic session refresh; cancelled when the interval drops.
            let interval = {
                let session = session.clone();
                Interval::new(SessionConfig::REFRESH_INTERVAL_MS, move || {
                    let session = session.clone();
                    spawn_local(async move {
                        if let Err(err) = refresh_session(refresh_policy).await {
                            tracing::warn!(%err, "session refresh failed");
                            session.dispatch(SessionAction::RefreshFailed(err));
                        }
                    });
                })
            };

            // Cross-tab sync: re-read the mirror when another tab writes the
            // user key. The listener unsubscribes when dropped.
            let listener = web_sys::window().map(|window| {
                let session = session.clone();
                EventListener::new(&window, "storage", move |event| {
                    let key = event
                        .dyn_ref::<web_sys::StorageEvent>()
                        .and_then(web_sys::StorageEvent::key);
                    if storage::is_user_key_change(key.as_deref()) {
                        session.dispatch(SessionAction::StorageChanged(storage::load_user()));
                    }
                })
            });

            move || {
                drop(interval);
                drop(listener);
            }
        });
    }

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
