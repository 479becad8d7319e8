use super::utils::LoginFormState;
use crate::api::{ApiError, LoginRequest, UserResponse};
use crate::router::home_path;
use crate::state::auth;
use crate::utils::browser;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<UserResponse, ApiError>>,
}

fn apply_optional_login_result<N>(
    result: Option<Result<UserResponse, ApiError>>,
    form: LoginFormState,
    error: RwSignal<Option<ApiError>>,
    navigate: N,
) where
    N: FnOnce(&'static str),
{
    if let Some(result) = result {
        match result {
            Ok(user) => {
                error.set(None);
                form.clear_password();
                navigate(home_path(user.role));
            }
            Err(err) => {
                log::warn!("login failed: {}", err);
                error.set(Some(err));
            }
        }
    }
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        apply_optional_login_result(login_action.value().get(), form, error, |path| {
            browser::redirect_to(path)
        });
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
