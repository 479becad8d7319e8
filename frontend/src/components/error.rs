use crate::api::ApiError;
use leptos::*;

/// Messages from a FastAPI validation list (`[{"loc": [...], "msg": "..."}]`).
pub fn validation_messages(error: &ApiError) -> Vec<String> {
    error
        .details
        .as_ref()
        .and_then(|details| details.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|msg| msg.as_str()))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(|e| e.is_some())>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1">
                <div class="text-sm">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    let messages = error.with(|e| e.as_ref().map(validation_messages).unwrap_or_default());
                    (!messages.is_empty()).then(|| {
                        view! {
                            <ul class="list-disc list-inside text-xs">
                                {messages.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                            </ul>
                        }
                    })
                }}
            </div>
        </Show>
    }
}
