use crate::api::{ApiClient, ApiError, LeaveRequest, ReviewDecision};
use std::rc::Rc;

use super::types::RequestScope;

#[derive(Clone)]
pub struct RequestsRepository {
    client: Rc<ApiClient>,
}

impl RequestsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, scope: RequestScope) -> Result<Vec<LeaveRequest>, ApiError> {
        match scope {
            RequestScope::Mine => self.client.get_my_requests().await,
            RequestScope::All => self.client.get_all_requests().await,
        }
    }

    pub async fn review(&self, id: i64, decision: ReviewDecision) -> Result<(), ApiError> {
        match decision {
            ReviewDecision::Approve => self.client.approve_request(id).await,
            ReviewDecision::Reject => self.client.reject_request(id).await,
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::fixtures::{api_client, leave_request_json, signed_in_session};
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;

    #[tokio::test]
    async fn list_picks_endpoint_by_scope() {
        let server = MockServer::start_async().await;
        let mine = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/requests");
                then.status(200)
                    .json_body(json!([leave_request_json(1, "pending")]));
            })
            .await;
        let all = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/requests/all");
                then.status(200).json_body(json!([
                    leave_request_json(1, "pending"),
                    leave_request_json(2, "rejected"),
                    leave_request_json(3, "approved")
                ]));
            })
            .await;

        let repo = RequestsRepository::new(api_client(&server, signed_in_session("t-1")));
        assert_eq!(repo.list(RequestScope::Mine).await.unwrap().len(), 1);
        assert_eq!(repo.list(RequestScope::All).await.unwrap().len(), 3);
        mine.assert_async().await;
        all.assert_async().await;
    }

    #[tokio::test]
    async fn review_failure_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PATCH).path("/api/requests/5/reject");
                then.status(400)
                    .json_body(json!({ "detail": "Request is not pending" }));
            })
            .await;

        let repo = RequestsRepository::new(api_client(&server, signed_in_session("t-hr")));
        let err = repo.review(5, ReviewDecision::Reject).await.unwrap_err();
        assert_eq!(err.error, "Request is not pending");
    }
}
