//! Profile page, reachable only while signed in.

use yew::prelude::*;

use satchel_frontend_common::{session::display_name, use_user};

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let Some(user) = use_user() else {
        // The router gates this page on a signed-in user, but the user can
        // still vanish mid-session via a cross-tab sign-out.
        return html! {};
    };

    let heading = display_name(&user).unwrap_or_else(|| "Your profile".to_owned());
    let raw = serde_json::to_string_pretty(&user).unwrap_or_default();

    html! {
        <div class="py-4">
            <h1 class="text-2xl font-bold text-gray-900 mb-4">{heading}</h1>
            <pre class="bg-gray-50 border border-gray-200 rounded p-4 text-sm text-gray-700 overflow-x-auto">
                {raw}
            </pre>
        </div>
    }
}
