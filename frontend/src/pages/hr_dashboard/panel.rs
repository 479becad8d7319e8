use crate::{
    components::layout::{Layout, Panel},
    pages::{
        chat::ChatPanel,
        requests::{
            components::filter::StatusFilterBar, types::RequestScope, RequestList,
            RequestListViewModel,
        },
    },
    state::app::use_app_context,
};
use leptos::*;

#[component]
pub fn HrDashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let vm = RequestListViewModel::new(&ctx, RequestScope::All);
    let filtered = vm.filtered_requests();
    let toolbar = view! { <StatusFilterBar filter=vm.filter /> }.into_view();

    view! {
        <Layout title="HR Dashboard">
            <Panel title="Leave Requests" class="flex-1" toolbar=toolbar>
                <div class="flex-1 overflow-y-auto p-4">
                    <RequestList
                        requests=filtered
                        loading=vm.loading
                        empty_message=vm.scope.empty_message()
                        show_requester=true
                        on_review=Some(vm.on_review())
                    />
                </div>
            </Panel>
            <Panel title="HR Assistant" class="w-96">
                <div class="flex-1 overflow-hidden">
                    <ChatPanel />
                </div>
            </Panel>
        </Layout>
    }
}
