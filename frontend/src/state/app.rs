use crate::{
    api::ApiClient,
    state::{
        auth::{self, AuthState},
        session::SessionStore,
    },
};
use leptos::*;

/// Everything the views share: the API client, the durable session values and
/// the signed-in user. Built once at the application root.
#[derive(Clone)]
pub struct AppContext {
    pub api: ApiClient,
    pub session: SessionStore,
    pub auth: ReadSignal<AuthState>,
    pub set_auth: WriteSignal<AuthState>,
}

impl AppContext {
    pub fn new(api: ApiClient) -> Self {
        let session = api.session().clone();
        let (auth, set_auth) = create_signal(AuthState::initial(session.has_token()));
        Self {
            api,
            session,
            auth,
            set_auth,
        }
    }

    /// Builds the root context, provides it to the tree and starts the
    /// identity check for a stored token. Teardown runs when the root owner
    /// is disposed.
    pub fn init(api: ApiClient) -> Self {
        let ctx = Self::new(api);
        provide_context(ctx.clone());

        if ctx.session.has_token() {
            let api = ctx.api.clone();
            let set_auth = ctx.set_auth;
            spawn_local(async move {
                auth::restore_session(&api, set_auth).await;
            });
        }

        let root = ctx.clone();
        on_cleanup(move || root.teardown());
        ctx
    }

    /// Resets the auth state so nothing still subscribed sees a stale user.
    /// The signals themselves are disposed with the root owner.
    pub fn teardown(&self) {
        log::debug!(
            "tearing down app context (signed in: {})",
            self.auth
                .try_get_untracked()
                .is_some_and(|state| state.is_authenticated)
        );
        let _ = self.set_auth.try_set(AuthState::signed_out());
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().unwrap_or_else(|| AppContext::new(ApiClient::new()))
}

#[component]
pub fn AppProvider(children: Children) -> impl IntoView {
    AppContext::init(ApiClient::new());
    children()
}
