use crate::{components::error::InlineErrorMessage, pages::login::view_model::LoginViewModel};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-md focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm";

#[component]
pub fn LoginForm(vm: LoginViewModel) -> impl IntoView {
    let email = vm.form.email;
    let password = vm.form.password;
    let pending = vm.login_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 to-indigo-100 py-12 px-4">
            <div class="max-w-md w-full space-y-8 bg-white p-8 rounded-lg shadow-lg">
                <div>
                    <h2 class="text-center text-3xl font-extrabold text-gray-900">"HR AI Agent"</h2>
                    <p class="mt-2 text-center text-sm text-gray-600">"Sign in to your account"</p>
                </div>
                <form class="mt-8 space-y-6" on:submit=on_submit>
                    <InlineErrorMessage error=vm.error />
                    <div class="space-y-4">
                        <div>
                            <label for="email" class="block text-sm font-medium text-gray-700">"Email"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                autocomplete="email"
                                class=INPUT_CLASS
                                placeholder="you@company.com"
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    email.set(target.value());
                                }
                            />
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-medium text-gray-700">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                class=INPUT_CLASS
                                placeholder="Password"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    password.set(target.value());
                                }
                            />
                        </div>
                    </div>
                    <button
                        type="submit"
                        class="w-full py-2 px-4 rounded-md text-white bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
