pub mod fixtures {
    use crate::api::ApiClient;
    use crate::state::session::SessionStore;
    use httpmock::MockServer;
    use serde_json::{json, Value};

    pub fn user_json(id: i64, role: &str) -> Value {
        json!({
            "id": id,
            "email": format!("user{}@example.com", id),
            "full_name": if role == "HR" { "Helen HR" } else { "Alice Example" },
            "role": role,
            "created_at": "2025-01-01T00:00:00"
        })
    }

    pub fn leave_request_json(id: i64, status: &str) -> Value {
        json!({
            "id": id,
            "user_id": 3,
            "user_name": "Alice Example",
            "user_email": "alice@example.com",
            "request_type": "annual",
            "start_date": "2025-01-10",
            "end_date": "2025-01-12",
            "duration_days": 3,
            "reason": null,
            "status": status,
            "reviewed_by": null,
            "reviewed_by_name": null,
            "reviewed_at": null,
            "created_at": "2025-01-01T09:00:00.000001"
        })
    }

    pub fn history_json(entries: &[(&str, &str)]) -> Value {
        json!({
            "messages": entries
                .iter()
                .map(|(message, response)| json!({
                    "message": message,
                    "response": response,
                    "intent": "policy_qa"
                }))
                .collect::<Vec<_>>()
        })
    }

    pub fn signed_in_session(token: &str) -> SessionStore {
        let session = SessionStore::in_memory();
        session
            .set_token(token)
            .expect("memory storage accepts writes");
        session
    }

    pub fn api_client(server: &MockServer, session: SessionStore) -> ApiClient {
        ApiClient::new_with_base_url(server.url("/api")).with_session(session)
    }
}
