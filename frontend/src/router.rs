use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::pages::{HomePage, ResetPasswordPage};

pub const ROUTE_PATHS: &[&str] = &["/", "/reset-password"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=IndexRoute/>
                <Route path="/reset-password" view=ResetPasswordRoute/>
            </Routes>
        </Router>
    }
}

#[component]
fn IndexRoute() -> impl IntoView {
    view! { <Title text="Sign in"/><HomePage/> }
}

#[component]
fn ResetPasswordRoute() -> impl IntoView {
    view! { <Title text="Reset password"/><ResetPasswordPage/> }
}
