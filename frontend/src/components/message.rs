use crate::state::forgot_password::MessageType;
use leptos::*;

/// Status line under the forgot-password heading, colored by severity.
#[component]
pub fn StatusMessage(
    #[prop(into)] message: Signal<String>,
    #[prop(into)] message_type: Signal<MessageType>,
) -> impl IntoView {
    view! {
        <Show when=move || message.with(|m| !m.is_empty()) fallback=|| ()>
            <div
                role="status"
                data-severity=move || message_type.get().as_str()
                class=move || format!("w-full rounded-md p-3 text-sm {}", message_type.get().classes())
            >
                {move || message.get()}
            </div>
        </Show>
    }
}
