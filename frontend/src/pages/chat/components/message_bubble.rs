use crate::pages::chat::transcript::ChatMessage;
use leptos::*;

pub fn bubble_alignment(message: &ChatMessage) -> &'static str {
    if message.is_user() {
        "flex justify-end"
    } else {
        "flex justify-start"
    }
}

pub fn bubble_class(message: &ChatMessage) -> &'static str {
    if message.is_user() {
        "max-w-xs lg:max-w-md px-4 py-2 rounded-lg bg-indigo-600 text-white"
    } else {
        "max-w-xs lg:max-w-md px-4 py-2 rounded-lg bg-gray-100 text-gray-800"
    }
}

#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let alignment = bubble_alignment(&message);
    let class = bubble_class(&message);
    let confirms_leave = message.confirms_leave_request();
    view! {
        <div class=alignment>
            <div class=class>
                <p class="text-sm whitespace-pre-wrap">{message.content}</p>
                <Show when=move || confirms_leave>
                    <div class="mt-2 pt-2 border-t border-gray-300">
                        <p class="text-xs opacity-90">"✓ Leave request created successfully"</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
