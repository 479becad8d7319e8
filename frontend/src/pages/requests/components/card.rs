use crate::api::{LeaveRequest, ReviewDecision};
use crate::pages::requests::{utils, view_model::ReviewCommand};
use leptos::*;

/// One leave request. `on_review` is given only where the viewer may decide,
/// and the buttons appear only while the request is pending.
#[component]
pub fn RequestCard(
    request: LeaveRequest,
    #[prop(default = false)] show_requester: bool,
    #[prop(default = None)] on_review: Option<Callback<ReviewCommand>>,
) -> impl IntoView {
    let id = request.id;
    let badge_class = format!(
        "px-3 py-1 rounded-full text-xs font-semibold border {}",
        utils::status_badge_class(&request.status)
    );
    let status = utils::status_label(&request.status);
    let title = utils::request_title(&request.request_type);
    let range = utils::date_range(&request);
    let duration = utils::duration_label(&request);
    let reviewed = utils::reviewed_label(&request);
    let created = utils::created_label(&request);
    let requester = show_requester
        .then(|| (request.user_name.clone(), request.user_email.clone()));
    let reason = request.reason.clone().filter(|r| !r.trim().is_empty());
    let actions = on_review.filter(|_| request.status.is_pending());

    view! {
        <div class="bg-white rounded-lg shadow-md p-4 border border-gray-200" data-request-id=id>
            <div class="flex justify-between items-start mb-2">
                <div class="flex-1">
                    <div class="flex items-center gap-2 mb-1">
                        <h3 class="font-semibold text-gray-800">{title}</h3>
                        {requester
                            .as_ref()
                            .and_then(|(name, _)| name.clone())
                            .map(|name| view! { <span class="text-xs text-gray-500">{format!("by {}", name)}</span> })}
                    </div>
                    <p class="text-sm text-gray-600">{format!("{} ({})", range, duration)}</p>
                    {requester
                        .and_then(|(_, email)| email)
                        .map(|email| view! { <p class="text-xs text-gray-500 mt-1">{email}</p> })}
                </div>
                <span class=badge_class>{status}</span>
            </div>
            {reason.map(|reason| view! { <p class="text-sm text-gray-600 mb-2">{format!("Reason: {}", reason)}</p> })}
            {reviewed.map(|text| view! { <p class="text-xs text-gray-500 mb-2">{text}</p> })}
            {created.map(|text| view! { <p class="text-xs text-gray-500">{text}</p> })}
            {actions.map(|on_review| {
                view! {
                    <div class="flex justify-end space-x-2 mt-2">
                        <button
                            type="button"
                            class="px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700 transition-colors"
                            on:click=move |_| on_review.call(ReviewCommand { id, decision: ReviewDecision::Approve })
                        >
                            "Approve"
                        </button>
                        <button
                            type="button"
                            class="px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 transition-colors"
                            on:click=move |_| on_review.call(ReviewCommand { id, decision: ReviewDecision::Reject })
                        >
                            "Reject"
                        </button>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::RequestStatus;
    use crate::pages::requests::types::fixtures::leave_request;
    use crate::test_support::ssr::render_to_string;

    fn noop() -> Callback<ReviewCommand> {
        Callback::new(|_: ReviewCommand| {})
    }

    #[test]
    fn pending_request_with_reviewer_shows_actions() {
        let html = render_to_string(move || {
            let request = leave_request(1, RequestStatus::Pending);
            view! { <RequestCard request=request show_requester=true on_review=Some(noop()) /> }
        });
        assert!(html.contains("Annual Leave"));
        assert!(html.contains("2025-01-10 to 2025-01-12 (3 days)"));
        assert!(html.contains("by Alice Example"));
        assert!(html.contains("alice@example.com"));
        assert!(html.contains("PENDING"));
        assert!(html.contains("Approve"));
        assert!(html.contains("Reject"));
    }

    #[test]
    fn decided_request_has_no_actions() {
        let html = render_to_string(move || {
            let mut request = leave_request(2, RequestStatus::Approved);
            request.reviewed_by_name = Some("Helen HR".into());
            request.reviewed_at = Some("2025-01-05T10:00:00".into());
            view! { <RequestCard request=request show_requester=true on_review=Some(noop()) /> }
        });
        assert!(html.contains("APPROVED"));
        assert!(html.contains("Reviewed by: Helen HR on 2025-01-05"));
        assert!(!html.contains("bg-green-600"));
        assert!(!html.contains("bg-red-600"));
    }

    #[test]
    fn employee_card_hides_requester_and_actions() {
        let html = render_to_string(move || {
            let request = leave_request(3, RequestStatus::Pending);
            view! { <RequestCard request=request /> }
        });
        assert!(html.contains("Reason: family trip"));
        assert!(html.contains("Created: 2025-01-01"));
        assert!(!html.contains("by Alice Example"));
        assert!(!html.contains("bg-green-600"));
    }
}
