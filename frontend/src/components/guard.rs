use crate::{
    api::Role,
    components::layout::LoadingSpinner,
    router::{home_path, LOGIN_PATH},
    state::{
        app::use_app_context,
        auth::{use_auth, AuthState},
    },
    utils::browser,
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    Redirect(&'static str),
    Render,
}

/// Decides what a guarded route shows for the current auth state.
pub fn resolve_access(state: &AuthState, has_token: bool, required: Option<Role>) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    let current = match state.role() {
        Some(role) if has_token && state.is_authenticated => role,
        _ => return GuardDecision::Redirect(LOGIN_PATH),
    };
    match required {
        Some(role) if current != role => GuardDecision::Redirect(home_path(current)),
        _ => GuardDecision::Render,
    }
}

#[component]
pub fn RequireRole(#[prop(optional)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let session = store_value(use_app_context().session);
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| {
        let has_token = session.with_value(|s| s.has_token());
        auth.with(|state| resolve_access(state, has_token, role))
    });

    create_effect(move |_| {
        if let GuardDecision::Redirect(target) = decision.get() {
            browser::redirect_to(target);
        }
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                if decision.get() == GuardDecision::Loading {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{EMPLOYEE_PATH, HR_DASHBOARD_PATH};
    use crate::test_support::helpers::{employee_user, hr_user};

    #[test]
    fn loading_state_waits_without_redirect() {
        let state = AuthState::initial(true);
        assert_eq!(resolve_access(&state, true, Some(Role::Hr)), GuardDecision::Loading);
    }

    #[test]
    fn unauthenticated_visit_redirects_to_login() {
        let signed_out = AuthState::signed_out();
        assert_eq!(
            resolve_access(&signed_out, false, Some(Role::Employee)),
            GuardDecision::Redirect(LOGIN_PATH)
        );
        assert_eq!(
            resolve_access(&signed_out, true, None),
            GuardDecision::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn resolved_user_without_token_redirects_to_login() {
        let state = AuthState::signed_in(employee_user());
        assert_eq!(
            resolve_access(&state, false, Some(Role::Employee)),
            GuardDecision::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn role_mismatch_redirects_to_own_home() {
        let hr = AuthState::signed_in(hr_user());
        let employee = AuthState::signed_in(employee_user());
        assert_eq!(
            resolve_access(&hr, true, Some(Role::Employee)),
            GuardDecision::Redirect(HR_DASHBOARD_PATH)
        );
        assert_eq!(
            resolve_access(&employee, true, Some(Role::Hr)),
            GuardDecision::Redirect(EMPLOYEE_PATH)
        );
    }

    #[test]
    fn matching_or_unrestricted_role_renders() {
        let hr = AuthState::signed_in(hr_user());
        assert_eq!(resolve_access(&hr, true, Some(Role::Hr)), GuardDecision::Render);
        assert_eq!(resolve_access(&hr, true, None), GuardDecision::Render);
    }

    #[test]
    fn unknown_role_is_sent_to_login_instead_of_looping() {
        let mut user = employee_user();
        user.role = Role::Unknown;
        let state = AuthState::signed_in(user);
        assert_eq!(
            resolve_access(&state, true, Some(Role::Employee)),
            GuardDecision::Redirect(LOGIN_PATH)
        );
    }
}
