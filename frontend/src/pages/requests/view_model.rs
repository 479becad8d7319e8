use crate::api::{ApiError, LeaveRequest, ReviewDecision};
use crate::pages::requests::{
    repository::RequestsRepository,
    types::{filter_requests, RequestScope, StatusFilter},
};
use crate::state::app::AppContext;
use crate::utils::browser;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewCommand {
    pub id: i64,
    pub decision: ReviewDecision,
}

pub type ReviewOutcome = (ReviewDecision, Result<(), ApiError>);

#[derive(Clone, Copy)]
pub struct RequestListViewModel {
    pub scope: RequestScope,
    pub requests: RwSignal<Vec<LeaveRequest>>,
    pub loading: RwSignal<bool>,
    pub filter: RwSignal<StatusFilter>,
    pub reload: RwSignal<u32>,
    pub fetch_action: Action<RequestScope, Result<Vec<LeaveRequest>, ApiError>>,
    pub review_action: Action<ReviewCommand, ReviewOutcome>,
}

pub fn review_failure_message(decision: ReviewDecision) -> &'static str {
    match decision {
        ReviewDecision::Approve => "Failed to approve request",
        ReviewDecision::Reject => "Failed to reject request",
    }
}

/// Replaces the list on success. Failures keep the previous list; only the
/// HR scope tells the user about them.
fn apply_optional_fetch_result<A>(
    result: Option<Result<Vec<LeaveRequest>, ApiError>>,
    scope: RequestScope,
    requests: RwSignal<Vec<LeaveRequest>>,
    loading: RwSignal<bool>,
    alert: A,
) where
    A: FnOnce(String),
{
    if let Some(result) = result {
        match result {
            Ok(list) => {
                log::debug!("fetched {} leave requests", list.len());
                requests.set(list);
            }
            Err(err) => {
                log::error!("error fetching requests: {} ({})", err, err.code);
                if scope.alerts_on_failure() {
                    alert(format!("Failed to load requests: {}", err.error));
                }
            }
        }
        loading.set(false);
    }
}

fn apply_optional_review_result<A>(result: Option<ReviewOutcome>, reload: RwSignal<u32>, alert: A)
where
    A: FnOnce(String),
{
    if let Some((decision, result)) = result {
        match result {
            Ok(()) => reload.update(|value| *value = value.wrapping_add(1)),
            Err(err) => {
                log::error!("error reviewing request: {}", err);
                alert(review_failure_message(decision).to_string());
            }
        }
    }
}

impl RequestListViewModel {
    pub fn new(ctx: &AppContext, scope: RequestScope) -> Self {
        let repository = store_value(RequestsRepository::new(ctx.api.clone()));

        let requests = create_rw_signal(Vec::<LeaveRequest>::new());
        let loading = create_rw_signal(true);
        let filter = create_rw_signal(StatusFilter::default());
        let reload = create_rw_signal(0u32);

        let fetch_action = create_action(move |scope: &RequestScope| {
            let repo = repository.get_value();
            let scope = *scope;
            async move { repo.list(scope).await }
        });

        let review_action = create_action(move |command: &ReviewCommand| {
            let repo = repository.get_value();
            let command = *command;
            async move {
                let result = repo.review(command.id, command.decision).await;
                (command.decision, result)
            }
        });

        create_effect(move |_| {
            reload.get();
            fetch_action.dispatch(scope);
        });

        create_effect(move |_| {
            apply_optional_fetch_result(
                fetch_action.value().get(),
                scope,
                requests,
                loading,
                |message| browser::blocking_alert(&message),
            );
        });

        create_effect(move |_| {
            apply_optional_review_result(review_action.value().get(), reload, |message| {
                browser::blocking_alert(&message)
            });
        });

        Self {
            scope,
            requests,
            loading,
            filter,
            reload,
            fetch_action,
            review_action,
        }
    }

    pub fn filtered_requests(&self) -> Signal<Vec<LeaveRequest>> {
        let requests = self.requests;
        let filter = self.filter;
        Signal::derive(move || requests.with(|list| filter_requests(list, filter.get())))
    }

    pub fn on_review(&self) -> Callback<ReviewCommand> {
        let review_action = self.review_action;
        Callback::new(move |command: ReviewCommand| review_action.dispatch(command))
    }
}
