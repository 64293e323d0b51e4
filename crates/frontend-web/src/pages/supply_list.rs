//! Supply list view, parameterized by list id.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use satchel_frontend_common::services::{fetch_supply_list, SupplyItem, SupplyList};
use satchel_frontend_common::Spinner;

#[derive(Properties, Clone, PartialEq)]
pub struct SupplyListPageProps {
    pub id: String,
}

enum ListFetch {
    Loading,
    Loaded(SupplyList),
    Failed(String),
}

#[function_component(SupplyListPage)]
pub fn supply_list_page(props: &SupplyListPageProps) -> Html {
    let fetch = use_state(|| ListFetch::Loading);

    {
        let fetch = fetch.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            fetch.set(ListFetch::Loading);
            spawn_local(async move {
                match fetch_supply_list(&id).await {
                    Ok(list) => fetch.set(ListFetch::Loaded(list)),
                    Err(err) => {
                        tracing::warn!(%err, "supply list fetch failed");
                        fetch.set(ListFetch::Failed(err));
                    }
                }
            });
            || ()
        });
    }

    match &*fetch {
        ListFetch::Loading => html! { <Spinner text="Loading supply list..." /> },
        ListFetch::Failed(err) => html! {
            <p class="text-red-600">{format!("Could not load this list: {err}")}</p>
        },
        ListFetch::Loaded(list) => {
            // Stable section order for the category map.
            let mut categories: Vec<_> = list.categorized_supplies.iter().collect();
            categories.sort_by(|a, b| a.0.cmp(b.0));

            html! {
                <div class="py-4">
                    <h1 class="text-2xl font-bold text-gray-900 mb-1">{&list.list_name}</h1>
                    <p class="text-gray-500 mb-6">{format!("Grade {}", list.grade)}</p>

                    { supplies_section(&list.basic_supplies) }

                    { for categories.into_iter().map(|(category, items)| html! {
                        <section class="mb-4">
                            <h2 class="text-lg font-semibold text-gray-800 mb-2">{category}</h2>
                            { supplies_section(items) }
                        </section>
                    }) }
                </div>
            }
        }
    }
}

fn supplies_section(items: &[SupplyItem]) -> Html {
    html! {
        <ul class="list-disc list-inside space-y-1">
            { for items.iter().map(|item| html! {
                <li class="text-gray-700">
                    <span class="font-medium">{&item.supply}</span>
                    if !item.desc.is_empty() {
                        <span class="text-gray-500">{format!(" ({})", item.desc)}</span>
                    }
                </li>
            }) }
        </ul>
    }
}
