use crate::{
    router::LOGIN_PATH,
    state::{
        app::use_app_context,
        auth::{self, use_auth},
    },
    utils::browser,
};
use leptos::*;

#[component]
pub fn Header(#[prop(into)] title: String) -> impl IntoView {
    let api = store_value(use_app_context().api);
    let (auth_state, set_auth) = use_auth();
    let full_name = move || {
        auth_state
            .get()
            .user
            .map(|user| user.full_name)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        api.with_value(|api| auth::logout(api, set_auth));
        browser::redirect_to(LOGIN_PATH);
    };

    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 py-4 flex justify-between items-center">
                <h1 class="text-2xl font-bold text-gray-800">{title}</h1>
                <div class="flex items-center space-x-4">
                    <span class="text-gray-600">{move || format!("Welcome, {}", full_name())}</span>
                    <button
                        type="button"
                        on:click=on_logout
                        class="px-4 py-2 text-sm text-gray-600 hover:text-gray-800"
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}

/// Full-height page with the shared header above `children`.
#[component]
pub fn Layout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="h-screen flex flex-col bg-gradient-to-br from-blue-50 to-indigo-100">
            <Header title=title />
            <div class="flex-1 flex overflow-hidden">{children()}</div>
        </div>
    }
}

#[component]
pub fn Panel(
    #[prop(into)] title: String,
    #[prop(into, default = String::new())] class: String,
    #[prop(optional)] toolbar: Option<View>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("bg-white m-4 rounded-lg shadow-lg flex flex-col {}", class)>
            <div class="bg-indigo-600 text-white px-6 py-4 rounded-t-lg flex justify-between items-center">
                <h2 class="text-xl font-semibold">{title}</h2>
                {toolbar}
            </div>
            {children()}
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600"></div>
        </div>
    }
}
