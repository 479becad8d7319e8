use crate::api::LeaveRequest;
use crate::components::empty_state::EmptyState;
use crate::pages::requests::{components::card::RequestCard, view_model::ReviewCommand};
use leptos::*;

#[component]
pub fn RequestList(
    #[prop(into)] requests: Signal<Vec<LeaveRequest>>,
    #[prop(into)] loading: Signal<bool>,
    empty_message: &'static str,
    #[prop(optional)] empty_hint: Option<&'static str>,
    #[prop(default = false)] show_requester: bool,
    #[prop(default = None)] on_review: Option<Callback<ReviewCommand>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="text-center text-gray-500">"Loading..."</div> }
        >
            <Show
                when=move || !requests.with(|list| list.is_empty())
                fallback=move || {
                    view! {
                        <EmptyState title=empty_message description=empty_hint.unwrap_or_default() />
                    }
                }
            >
                <div class="space-y-4">
                    <For
                        each=move || requests.get()
                        key=|request| (request.id, request.status.as_str().to_string())
                        children=move |request: LeaveRequest| {
                            view! {
                                <RequestCard
                                    request=request
                                    show_requester=show_requester
                                    on_review=on_review
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::RequestStatus;
    use crate::pages::requests::types::fixtures::leave_request;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn shows_loading_placeholder_until_first_fetch() {
        let html = render_to_string(move || {
            view! {
                <RequestList
                    requests=Signal::derive(Vec::new)
                    loading=Signal::derive(|| true)
                    empty_message="No requests found."
                />
            }
        });
        assert!(html.contains("Loading..."));
        assert!(!html.contains("No requests found."));
    }

    #[test]
    fn shows_empty_message_when_list_is_empty() {
        let html = render_to_string(move || {
            view! {
                <RequestList
                    requests=Signal::derive(Vec::new)
                    loading=Signal::derive(|| false)
                    empty_message="No leave requests yet."
                    empty_hint="Use the chat to create a leave request!"
                />
            }
        });
        assert!(html.contains("No leave requests yet."));
        assert!(html.contains("Use the chat to create a leave request!"));
    }

    #[test]
    fn renders_cards_in_list_order() {
        let html = render_to_string(move || {
            let mut second = leave_request(2, RequestStatus::Rejected);
            second.request_type = "sick".into();
            let list = vec![leave_request(1, RequestStatus::Pending), second];
            view! {
                <RequestList
                    requests=Signal::derive(move || list.clone())
                    loading=Signal::derive(|| false)
                    empty_message="No requests found."
                />
            }
        });
        let annual = html.find("Annual Leave").unwrap();
        let sick = html.find("Sick Leave").unwrap();
        assert!(annual < sick);
        assert!(!html.contains("No requests found."));
    }
}
