use crate::{
    api::{ApiClient, ApiError, LoginRequest, Role, UserResponse},
    state::app::use_app_context,
};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    /// A stored token means the identity check is still pending; without one
    /// the visitor is known to be signed out.
    pub fn initial(has_token: bool) -> Self {
        Self {
            user: None,
            is_authenticated: false,
            loading: has_token,
        }
    }

    pub fn signed_in(user: UserResponse) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

pub fn use_auth() -> AuthContext {
    let ctx = use_app_context();
    (ctx.auth, ctx.set_auth)
}

/// Resolves the stored token into a user. A rejected token is discarded.
pub async fn restore_session(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    match api.get_me().await {
        Ok(user) => {
            log::info!("restored session for {}", user.email);
            set_auth_state.set(AuthState::signed_in(user));
        }
        Err(err) => {
            if err.is_unauthorized() {
                log::info!("stored token expired, signing out");
            } else {
                log::warn!("could not restore session: {}", err);
            }
            api.session().clear_token();
            set_auth_state.set(AuthState::signed_out());
        }
    }
}

pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<UserResponse, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match api.login(request).await {
        Ok(response) => {
            let user = response.user;
            set_auth_state.set(AuthState::signed_in(user.clone()));
            Ok(user)
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn logout(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    api.logout();
    set_auth_state.set(AuthState::signed_out());
}

pub fn use_login_action() -> Action<LoginRequest, Result<UserResponse, ApiError>> {
    let ctx = use_app_context();
    let api = store_value(ctx.api.clone());
    let set_auth = ctx.set_auth;

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.get_value();
        async move { login_request(payload, &api, set_auth).await }
    })
}
