use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    view! {
        <Title text="Sign in | HR AI Agent" />
        <LoginForm vm=vm />
    }
}
