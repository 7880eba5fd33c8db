use crate::pages::forgot_password::view_model::{
    use_forgot_password_view_model, ForgotPasswordViewModel,
};
use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Fresh runtime with the session view model already in context.
pub fn with_view_model<T>(f: impl FnOnce(ForgotPasswordViewModel) -> T) -> T {
    with_runtime(|| f(use_forgot_password_view_model()))
}

/// Server-renders `view`. Anything it puts in context is visible to the components it builds.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
