use crate::{
    components::common::Button,
    pages::forgot_password::view_model::use_forgot_password_view_model,
};
use leptos::{ev::SubmitEvent, *};

// Sign-in itself is handled by the account service; this form only links into the reset flow.
#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-6 bg-surface-elevated p-8 rounded-lg shadow-lg">
                <h2 class="text-center text-3xl font-extrabold text-fg">"Sign in"</h2>
                <form class="space-y-4" on:submit=move |ev: SubmitEvent| ev.prevent_default()>
                    <input
                        id="login-email"
                        name="email"
                        type="email"
                        autocomplete="email"
                        class="appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg text-form-control-text sm:text-sm"
                        placeholder="Email"
                    />
                    <input
                        id="login-password"
                        name="password"
                        type="password"
                        autocomplete="current-password"
                        class="appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg text-form-control-text sm:text-sm"
                        placeholder="Password"
                    />
                    <Button submit=true>"Sign in"</Button>
                </form>
                <hr class="border-border"/>
                <button
                    type="button"
                    class="w-full text-sm font-medium text-link hover:text-link-hover"
                    on:click=move |_| vm.toggle()
                >
                    "Forgot password?"
                </button>
                <p class="text-center text-sm text-fg-muted">
                    "No account yet? "
                    <a href="/register" class="text-link hover:text-link-hover">"Register"</a>
                </p>
            </div>
        </div>
    }
}
