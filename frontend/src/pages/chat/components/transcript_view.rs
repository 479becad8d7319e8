use crate::pages::chat::{
    components::message_bubble::MessageBubble,
    transcript::{ChatMessage, Transcript},
};
use leptos::{html::Div, *};

#[cfg(target_arch = "wasm32")]
fn scroll_to_end(end_ref: NodeRef<Div>) {
    if let Some(end) = end_ref.get_untracked() {
        end.scroll_into_view();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to_end(_end_ref: NodeRef<Div>) {}

#[component]
pub fn TranscriptView(
    transcript: RwSignal<Transcript>,
    #[prop(into)] loading_history: Signal<bool>,
) -> impl IntoView {
    let end_ref = create_node_ref::<Div>();
    let messages = create_memo(move |_| transcript.with(|t| t.messages.clone()));
    let busy = create_memo(move |_| transcript.with(|t| t.busy));

    create_effect(move |_| {
        messages.with(|m| m.len());
        busy.get();
        scroll_to_end(end_ref);
    });

    view! {
        <div class="flex-1 overflow-y-auto p-4 space-y-4">
            <Show when=move || loading_history.get()>
                <div class="text-center text-gray-500 mt-8">
                    <p>"Loading conversation history..."</p>
                </div>
            </Show>
            <Show when=move || !loading_history.get() && messages.with(|m| m.is_empty())>
                <div class="text-center text-gray-500 mt-8">
                    <p class="text-lg font-semibold mb-2">"Welcome to HR AI Agent!"</p>
                    <p>"Ask me about company policies or request leave."</p>
                    <p class="text-sm mt-4">
                        "Try: \"What is the work from home policy?\" or \"I need to take leave tomorrow\""
                    </p>
                </div>
            </Show>
            <For
                each=move || messages.get()
                key=|message| message.id
                children=move |message: ChatMessage| view! { <MessageBubble message=message /> }
            />
            <Show when=move || busy.get()>
                <div class="flex justify-start" data-testid="typing-indicator">
                    <div class="bg-gray-100 rounded-lg p-3 max-w-xs">
                        <div class="flex space-x-1">
                            <div class="w-2 h-2 bg-gray-400 rounded-full animate-bounce"></div>
                            <div class="w-2 h-2 bg-gray-400 rounded-full animate-bounce" style="animation-delay: 0.1s"></div>
                            <div class="w-2 h-2 bg-gray-400 rounded-full animate-bounce" style="animation-delay: 0.2s"></div>
                        </div>
                    </div>
                </div>
            </Show>
            <div node_ref=end_ref></div>
        </div>
    }
}
