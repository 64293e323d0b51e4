//! Landing page

use yew::prelude::*;

use satchel_frontend_common::{session::display_name, use_user};

#[function_component(Home)]
pub fn home() -> Html {
    let user = use_user();

    html! {
        <div class="py-8">
            <h1 class="text-2xl font-bold text-gray-900 mb-2">
                if let Some(name) = user.as_ref().and_then(|u| display_name(u)) {
                    {format!("Welcome back, {name}")}
                } else {
                    {"Welcome to Satchel"}
                }
            </h1>
            <p class="text-gray-600">
                {"Find your school's supply lists and check off what you already have."}
            </p>
        </div>
    }
}
