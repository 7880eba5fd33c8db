use leptos::*;

mod panel;

pub use panel::ResetPasswordPanel;

/// Landing page for the link embedded in reset emails.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    view! { <ResetPasswordPanel /> }
}
