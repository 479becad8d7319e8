use crate::pages::requests::types::StatusFilter;
use leptos::*;

pub fn filter_button_class(active: bool) -> &'static str {
    if active {
        "px-3 py-1 rounded text-sm bg-white text-indigo-600"
    } else {
        "px-3 py-1 rounded text-sm bg-indigo-500 text-white"
    }
}

#[component]
pub fn StatusFilterBar(filter: RwSignal<StatusFilter>) -> impl IntoView {
    view! {
        <div class="flex space-x-2">
            {StatusFilter::OPTIONS
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            type="button"
                            class=move || filter_button_class(filter.get() == option)
                            on:click=move |_| filter.set(option)
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
