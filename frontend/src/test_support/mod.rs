#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, Role, UserResponse};
    use crate::state::{app::AppContext, auth::AuthState, session::SessionStore};
    use leptos::*;

    pub fn employee_user() -> UserResponse {
        UserResponse {
            id: 3,
            email: "alice@example.com".into(),
            full_name: "Alice Employee".into(),
            role: Role::Employee,
            created_at: None,
        }
    }

    pub fn hr_user() -> UserResponse {
        UserResponse {
            id: 1,
            email: "helen@example.com".into(),
            full_name: "Helen HR".into(),
            role: Role::Hr,
            created_at: None,
        }
    }

    /// Provides an `AppContext` backed by in-memory storage. A token is stored
    /// whenever a user is given.
    pub fn provide_app(user: Option<UserResponse>) -> AppContext {
        let state = match user {
            Some(user) => AuthState::signed_in(user),
            None => AuthState::signed_out(),
        };
        provide_app_state(state)
    }

    pub fn provide_app_state(state: AuthState) -> AppContext {
        let session = SessionStore::in_memory();
        if state.is_authenticated || state.loading {
            let _ = session.set_token("test-token");
        }
        let api = ApiClient::new_with_base_url("http://localhost/api").with_session(session);
        let ctx = AppContext::new(api);
        ctx.set_auth.set(state);
        provide_context(ctx.clone());
        ctx
    }
}
