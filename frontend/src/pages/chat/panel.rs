use crate::{
    pages::chat::{
        components::{input_box::InputBox, transcript_view::TranscriptView},
        view_model::ChatViewModel,
    },
    state::app::use_app_context,
};
use leptos::*;

#[component]
pub fn ChatPanel() -> impl IntoView {
    let ctx = use_app_context();
    let vm = ChatViewModel::new(&ctx);
    let on_send = Callback::new(move |text: String| vm.send(&text));

    view! {
        <div class="flex flex-col h-full">
            <TranscriptView transcript=vm.transcript loading_history=vm.loading_history />
            <InputBox disabled=vm.busy() on_send=on_send />
        </div>
    }
}
