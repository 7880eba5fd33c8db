mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
mod test_support;
pub mod utils;

pub use api::{ApiClient, ApiError, ForgotPasswordRequest, ForgotPasswordResponse, ResetDispatch};
pub use pages::forgot_password::{
    controller::ForgotPasswordController,
    view_model::{use_forgot_password_view_model, ForgotPasswordViewModel},
};
pub use state::forgot_password::{ForgotPasswordState, FormPhase, MessageType};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    web_sys::console::log_1(&"Starting resetkit frontend (wasm)".into());

    // Resolve runtime config before mounting so the view model sees the real backend URL.
    wasm_bindgen_futures::spawn_local(async move {
        let cfg = config::init().await;
        log::info!("runtime config initialized, backend at {}", cfg.api_base_url);
        router::mount_app();
    });
}
