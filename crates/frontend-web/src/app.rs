//! Root application component.

use yew::prelude::*;
use yew_router::prelude::*;

use satchel_frontend_common::{use_session, SessionProvider, SessionState, Spinner, UserProfile};

use crate::components::Header;
use crate::pages::{Home, ProfilePage, SupplyListPage};
use crate::routes::{requires_user, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <AppContent />
        </SessionProvider>
    }
}

/// What the application body shows for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Body {
    /// A recorded session error suppresses everything, header included.
    Suppressed,
    /// Initial profile fetch still in flight.
    Loading,
    /// Header plus the routed view.
    Ready,
}

fn body_for(session: &SessionState) -> Body {
    if session.error.is_some() {
        Body::Suppressed
    } else if session.is_loading {
        Body::Loading
    } else {
        Body::Ready
    }
}

fn switch(route: Route, user: Option<UserProfile>) -> Html {
    if requires_user(&route) && user.is_none() {
        return html! {};
    }
    match route {
        Route::Home => html! { <Home /> },
        Route::SupplyList { id } => html! { <SupplyListPage {id} /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::NotFound => html! {},
    }
}

#[function_component(AppContent)]
fn app_content() -> Html {
    let session = use_session();

    match body_for(&session) {
        Body::Suppressed => html! {},
        Body::Loading => html! { <Spinner text="Signing you in..." /> },
        Body::Ready => {
            let user = session.user.clone();
            html! {
                <HashRouter>
                    <Header />
                    <main class="max-w-3xl mx-auto p-6">
                        <Switch<Route> render={move |route| switch(route, user.clone())} />
                    </main>
                </HashRouter>
            }
        }
    }
}
