use crate::api::{ApiClient, ApiError, ChatHistoryResponse, ChatReply, ChatRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct ChatRepository {
    client: Rc<ApiClient>,
}

impl ChatRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn send(&self, request: ChatRequest) -> Result<ChatReply, ApiError> {
        self.client.send_chat_message(request).await
    }

    pub async fn history(&self, session_id: &str) -> Result<ChatHistoryResponse, ApiError> {
        self.client.get_chat_history(session_id).await
    }
}
