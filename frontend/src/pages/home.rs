use crate::pages::{forgot_password::view_model::use_forgot_password_view_model, ForgotPasswordPanel, LoginPanel};
use leptos::*;

/// Index page: the login form, or the forgot-password form once toggled.
#[component]
pub fn HomePage() -> impl IntoView {
    let vm = use_forgot_password_view_model();
    vm.initialize();
    let show_forgot = move || vm.state.with(|s| s.show_forgot_password);

    view! {
        <Show when=show_forgot fallback=|| view! { <LoginPanel/> }>
            <ForgotPasswordPanel/>
        </Show>
    }
}
