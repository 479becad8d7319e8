use crate::api::{ApiError, LoginRequest};
use leptos::*;

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Please enter your email".into());
    }
    if password.trim().is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(())
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    /// Builds the request, or the inline validation error for blank fields.
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        validate_credentials(&email, &password).map_err(ApiError::validation)?;
        Ok(LoginRequest {
            email: email.trim().to_string(),
            password,
        })
    }

    pub fn clear_password(&self) {
        self.password.set(String::new());
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn form_state_builds_trimmed_request() {
        with_runtime(|| {
            let form = LoginFormState::default();
            form.email.set("  alice@example.com ".into());
            form.password.set("secret".into());
            let request = form.to_request().unwrap();
            assert_eq!(request.email, "alice@example.com");
            assert_eq!(request.password, "secret");
        });
    }

    #[test]
    fn form_state_reports_validation_error() {
        with_runtime(|| {
            let form = LoginFormState::default();
            let err = form.to_request().unwrap_err();
            assert_eq!(err.code, "VALIDATION_ERROR");
            assert_eq!(err.error, "Please enter your email");
        });
    }
}
