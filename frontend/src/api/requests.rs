use super::{
    client::ApiClient,
    types::{ApiError, LeaveRequest},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn path_segment(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "approve",
            ReviewDecision::Reject => "reject",
        }
    }
}

impl ApiClient {
    pub async fn get_my_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(self.http_client().get(format!("{}/requests", base_url)))
            .await?;
        Self::map_json_response(response).await
    }

    pub async fn get_all_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(self.http_client().get(format!("{}/requests/all", base_url)))
            .await?;
        Self::map_json_response(response).await
    }

    pub async fn approve_request(&self, id: i64) -> Result<(), ApiError> {
        self.review_request(id, ReviewDecision::Approve).await
    }

    pub async fn reject_request(&self, id: i64) -> Result<(), ApiError> {
        self.review_request(id, ReviewDecision::Reject).await
    }

    async fn review_request(&self, id: i64, decision: ReviewDecision) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(self.http_client().patch(format!(
                "{}/requests/{}/{}",
                base_url,
                id,
                decision.path_segment()
            )))
            .await?;
        Self::map_empty_response(response).await
    }
}
