use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{
    client::ApiClient,
    types::{ApiError, ChatHistoryResponse, ChatReply, ChatRequest},
};

// RFC 3986 unreserved characters stay literal.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub(crate) fn history_path(session_id: &str) -> String {
    format!(
        "/chat/history/{}",
        utf8_percent_encode(session_id, PATH_SEGMENT)
    )
}

impl ApiClient {
    pub async fn send_chat_message(&self, request: ChatRequest) -> Result<ChatReply, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(
                self.http_client()
                    .post(format!("{}/chat", base_url))
                    .json(&request),
            )
            .await?;
        Self::map_json_response(response).await
    }

    pub async fn get_chat_history(&self, session_id: &str) -> Result<ChatHistoryResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(
                self.http_client()
                    .get(format!("{}{}", base_url, history_path(session_id))),
            )
            .await?;
        Self::map_json_response(response).await
    }
}
