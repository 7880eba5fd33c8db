use super::{repository::ForgotPasswordRepository, utils};
use crate::{
    api::{ApiClient, ApiError, ForgotPasswordRequest, ResetDispatch},
    config::RuntimeConfig,
    state::forgot_password::{ForgotPasswordState, MessageType},
    utils::network,
};
use std::rc::Rc;

/// Runs the forgot-password flow against a session's [`ForgotPasswordState`].
///
/// `submit` is split into `begin_submit` / `finish_submit` so a reactive caller
/// can publish the "sending" state before awaiting the request.
#[derive(Clone)]
pub struct ForgotPasswordController {
    repository: ForgotPasswordRepository,
    reset_page_port: u16,
    reset_page_path: String,
}

impl ForgotPasswordController {
    pub fn new(repository: ForgotPasswordRepository, config: &RuntimeConfig) -> Self {
        Self {
            repository,
            reset_page_port: config.reset_page_port,
            reset_page_path: config.reset_page_path.clone(),
        }
    }

    pub fn with_client(client: Rc<ApiClient>, config: &RuntimeConfig) -> Self {
        Self::new(ForgotPasswordRepository::new_with_client(client), config)
    }

    pub fn toggle(&self, state: &mut ForgotPasswordState) {
        state.toggle();
    }

    pub fn reset(&self, state: &mut ForgotPasswordState) {
        state.reset();
    }

    pub fn initialize(&self, state: &mut ForgotPasswordState) {
        if state.adopt_server_ip(network::discover_local_ip()) {
            log::debug!("reset links will point at {}", state.server_ip);
        }
    }

    /// Validates `email` and moves to the sending state. `None` means the
    /// input was rejected and no request should go out.
    pub fn begin_submit(
        &self,
        state: &mut ForgotPasswordState,
        email: &str,
    ) -> Option<ForgotPasswordRequest> {
        state.email_sent = false;
        let email = match utils::validate_email(email) {
            Ok(email) => email,
            Err(err) => {
                state.set_message(err.to_string(), MessageType::Error);
                return None;
            }
        };
        state.forgot_email = email.clone();
        state.set_message(utils::SENDING_MESSAGE, MessageType::Info);
        Some(ForgotPasswordRequest {
            email,
            reset_url: utils::build_reset_url(
                &state.server_ip,
                self.reset_page_port,
                &self.reset_page_path,
            ),
        })
    }

    pub async fn send(&self, request: ForgotPasswordRequest) -> Result<ResetDispatch, ApiError> {
        self.repository.request_reset(request).await
    }

    pub fn finish_submit(
        state: &mut ForgotPasswordState,
        outcome: Result<ResetDispatch, ApiError>,
    ) {
        match outcome {
            Ok(dispatch) => {
                state.set_message(utils::success_message(&dispatch.email), MessageType::Success);
                state.email_sent = true;
            }
            Err(err) => {
                log::warn!("forgot-password request failed ({}): {:?}", err.code(), err);
                state.set_message(err.to_string(), MessageType::Error);
                state.email_sent = false;
            }
        }
    }

    pub async fn submit(&self, state: &mut ForgotPasswordState, email: &str) {
        let Some(request) = self.begin_submit(state, email) else {
            return;
        };
        let outcome = self.send(request).await;
        Self::finish_submit(state, outcome);
    }
}
