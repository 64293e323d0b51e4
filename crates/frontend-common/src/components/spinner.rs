//! Loading indicator shown while a fetch is in flight.

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    /// Caption rendered under the spinner.
    #[prop_or_default]
    pub text: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="flex flex-col items-center gap-3 py-12" role="status">
            <span class="w-8 h-8 rounded-full border-4 border-emerald-100 border-t-emerald-600 animate-spin"></span>
            if let Some(text) = &props.text {
                <span class="text-sm text-gray-500">{text}</span>
            }
        </div>
    }
}
