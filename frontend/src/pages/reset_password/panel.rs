use crate::components::common::Button;
use leptos::{ev::SubmitEvent, *};

// The new password is submitted to the account service, not through this app.
#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-6 bg-surface-elevated p-8 rounded-lg shadow-lg">
                <div>
                    <h2 class="text-center text-3xl font-extrabold text-fg">"Set a new password"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">"Enter your new password"</p>
                </div>
                <form class="space-y-4" on:submit=move |ev: SubmitEvent| ev.prevent_default()>
                    <input
                        id="new-password"
                        name="new_password"
                        type="password"
                        autocomplete="new-password"
                        class="appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg text-form-control-text sm:text-sm"
                        placeholder="New password"
                    />
                    <input
                        id="confirm-password"
                        name="confirm_password"
                        type="password"
                        autocomplete="new-password"
                        class="appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg text-form-control-text sm:text-sm"
                        placeholder="Confirm new password"
                    />
                    <Button submit=true>"Reset password"</Button>
                </form>
            </div>
        </div>
    }
}
