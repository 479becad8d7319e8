use crate::{
    components::layout::{Layout, Panel},
    pages::{
        chat::ChatPanel,
        requests::{types::RequestScope, RequestList, RequestListViewModel},
    },
    state::app::use_app_context,
};
use leptos::*;

pub const EMPTY_HINT: &str = "Use the chat to create a leave request!";

#[component]
pub fn EmployeePage() -> impl IntoView {
    let ctx = use_app_context();
    let vm = RequestListViewModel::new(&ctx, RequestScope::Mine);

    view! {
        <Layout title="HR AI Agent">
            <Panel title="Chat with HR Assistant" class="flex-1">
                <div class="flex-1 overflow-hidden">
                    <ChatPanel />
                </div>
            </Panel>
            <Panel title="My Leave Requests" class="w-96">
                <div class="flex-1 overflow-y-auto p-4">
                    <RequestList
                        requests=vm.requests
                        loading=vm.loading
                        empty_message=vm.scope.empty_message()
                        empty_hint=EMPTY_HINT
                    />
                </div>
            </Panel>
        </Layout>
    }
}
