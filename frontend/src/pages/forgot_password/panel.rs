use super::view_model::use_forgot_password_view_model;
use crate::components::{common::Button, message::StatusMessage};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();
    let state = vm.state;
    let pending = vm.pending();

    let message = Signal::derive(move || state.with(|s| s.forgot_message.clone()));
    let message_type = Signal::derive(move || state.with(|s| s.message_type));
    let email_sent = move || state.with(|s| s.email_sent);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8 bg-surface-elevated p-8 rounded-lg shadow-lg">
                <div>
                    <h2 class="text-center text-3xl font-extrabold text-fg">"Reset your password"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Enter the email address you registered with and we'll send you a reset link."
                    </p>
                </div>

                <StatusMessage message=message message_type=message_type/>

                <Show
                    when=email_sent
                    fallback=move || {
                        view! {
                            <form class="space-y-6" on:submit=on_submit>
                                <div>
                                    <label for="forgot-email" class="sr-only">"Email address"</label>
                                    <input
                                        id="forgot-email"
                                        name="email"
                                        type="email"
                                        autocomplete="email"
                                        class="appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm"
                                        placeholder="Registered email address"
                                        prop:value=move || state.with(|s| s.forgot_email.clone())
                                        on:input=move |ev| vm.set_email(event_target_value(&ev))
                                    />
                                </div>
                                <Button submit=true loading=pending>
                                    {move || if pending.get() { "Sending..." } else { "Send reset link" }}
                                </Button>
                                <button
                                    type="button"
                                    class="w-full text-sm font-medium text-link hover:text-link-hover"
                                    on:click=move |_| vm.toggle()
                                >
                                    "Back to login"
                                </button>
                            </form>
                        }
                    }
                >
                    <div class="flex flex-col items-center space-y-3 text-center">
                        <h3 class="text-lg font-bold text-status-success-text">"Reset link sent!"</h3>
                        <p class="text-sm text-fg-muted">
                            "Check your inbox and follow the link. It is valid for 30 minutes."
                        </p>
                        <button
                            type="button"
                            class="mt-4 px-4 py-2 rounded-md border border-form-control-border text-sm font-medium"
                            on:click=move |_| vm.toggle()
                        >
                            "Back to login"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
