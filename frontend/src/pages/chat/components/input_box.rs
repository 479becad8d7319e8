use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
pub fn InputBox(
    #[prop(into)] disabled: Signal<bool>,
    on_send: Callback<String>,
) -> impl IntoView {
    let (text, set_text) = create_signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if disabled.get_untracked() {
            return;
        }
        let value = text.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        set_text.set(String::new());
        on_send.call(value);
    };

    view! {
        <form class="border-t border-gray-200 p-4 flex space-x-2" on:submit=handle_submit>
            <input
                type="text"
                class="flex-1 px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500 disabled:bg-gray-100"
                placeholder="Type your message..."
                prop:value=text
                disabled=move || disabled.get()
                on:input=move |ev| {
                    let target = event_target::<HtmlInputElement>(&ev);
                    set_text.set(target.value());
                }
            />
            <button
                type="submit"
                class="px-6 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 disabled:opacity-50 disabled:cursor-not-allowed"
                disabled=move || disabled.get() || text.get().trim().is_empty()
            >
                "Send"
            </button>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn input_is_disabled_while_busy() {
        let html = render_to_string(move || {
            view! { <InputBox disabled=Signal::derive(|| true) on_send=Callback::new(|_: String| {}) /> }
        });
        assert!(html.contains("Type your message..."));
        assert!(html.contains("disabled"));
    }
}
