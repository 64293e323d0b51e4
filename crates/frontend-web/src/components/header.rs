//! Persistent navigation header

use yew::prelude::*;
use yew_router::prelude::*;

use satchel_frontend_common::{session::display_name, use_user};

use crate::routes::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let user = use_user();

    html! {
        <header class="flex items-center justify-between p-4 bg-white shadow-sm">
            <Link<Route> to={Route::Home} classes="text-xl font-bold text-gray-900">
                {"Satchel"}
            </Link<Route>>
            <nav class="flex items-center gap-4">
                if user.is_some() {
                    <Link<Route> to={Route::Profile} classes="text-sm text-gray-600 hover:text-gray-900">
                        {"Profile"}
                    </Link<Route>>
                }
                if let Some(name) = user.as_ref().and_then(|u| display_name(u)) {
                    <span class="text-sm text-gray-500">{name}</span>
                }
            </nav>
        </header>
    }
}
