use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::Role,
    components::guard::RequireRole,
    pages::{EmployeePage, HrDashboardPage, LoginPage},
    state::app::AppProvider,
};

pub use crate::api::LOGIN_PATH;
pub const EMPLOYEE_PATH: &str = "/employee";
pub const HR_DASHBOARD_PATH: &str = "/hr-dashboard";

/// Landing route for a signed-in user. A role this client does not know has
/// no page of its own.
pub fn home_path(role: Role) -> &'static str {
    match role {
        Role::Hr => HR_DASHBOARD_PATH,
        Role::Employee => EMPLOYEE_PATH,
        Role::Unknown => LOGIN_PATH,
    }
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="HR AI Agent" />
        <AppProvider>
            <Router>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path=LOGIN_PATH /> } />
                    <Route path=LOGIN_PATH view=LoginPage />
                    <Route path=EMPLOYEE_PATH view=ProtectedEmployee />
                    <Route path=HR_DASHBOARD_PATH view=ProtectedHrDashboard />
                </Routes>
            </Router>
        </AppProvider>
    }
}

#[component]
fn ProtectedEmployee() -> impl IntoView {
    view! { <RequireRole role=Role::Employee><EmployeePage /></RequireRole> }
}

#[component]
fn ProtectedHrDashboard() -> impl IntoView {
    view! { <RequireRole role=Role::Hr><HrDashboardPage /></RequireRole> }
}
