use super::controller::ForgotPasswordController;
use crate::{
    api::{ApiClient, ApiError, ForgotPasswordRequest, ResetDispatch},
    config,
    state::forgot_password::{ForgotPasswordState, FormPhase},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ForgotPasswordViewModel {
    pub state: RwSignal<ForgotPasswordState>,
    pub submit_action: Action<ForgotPasswordRequest, Result<ResetDispatch, ApiError>>,
    controller: StoredValue<ForgotPasswordController>,
}

impl ForgotPasswordViewModel {
    pub fn toggle(&self) {
        self.controller
            .with_value(|c| self.state.update(|s| c.toggle(s)));
    }

    pub fn reset(&self) {
        self.controller
            .with_value(|c| self.state.update(|s| c.reset(s)));
    }

    pub fn initialize(&self) {
        self.controller
            .with_value(|c| self.state.update(|s| c.initialize(s)));
    }

    pub fn set_email(&self, email: String) {
        self.state.update(|s| s.forgot_email = email);
    }

    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        let email = self.state.with_untracked(|s| s.forgot_email.clone());
        let request = self
            .controller
            .with_value(|c| self.state.try_update(|s| c.begin_submit(s, &email)))
            .flatten();
        if let Some(request) = request {
            self.submit_action.dispatch(request);
        }
    }

    /// Drops outcomes that arrive after the user navigated away from the sending form.
    pub fn apply_outcome(&self, outcome: Result<ResetDispatch, ApiError>) {
        self.state.update(|s| {
            if s.phase() == FormPhase::Sending {
                ForgotPasswordController::finish_submit(s, outcome);
            } else {
                log::debug!("discarding forgot-password outcome, form is {:?}", s.phase());
            }
        });
    }

    pub fn pending(&self) -> ReadSignal<bool> {
        self.submit_action.pending()
    }

    pub fn snapshot(&self) -> ForgotPasswordState {
        self.state.get()
    }
}

pub fn create_forgot_password_view_model(api: ApiClient) -> ForgotPasswordViewModel {
    let controller = ForgotPasswordController::with_client(Rc::new(api), &config::current());
    let state = create_rw_signal(ForgotPasswordState::default());

    let controller_for_submit = controller.clone();
    let submit_action = create_action(move |request: &ForgotPasswordRequest| {
        let controller = controller_for_submit.clone();
        let request = request.clone();
        async move { controller.send(request).await }
    });

    let vm = ForgotPasswordViewModel {
        state,
        submit_action,
        controller: store_value(controller),
    };

    create_effect(move |_| {
        if let Some(outcome) = submit_action.value().get() {
            vm.apply_outcome(outcome);
        }
    });

    vm
}

/// Shares one view model between the login and forgot-password panels.
pub fn use_forgot_password_view_model() -> ForgotPasswordViewModel {
    if let Some(vm) = use_context::<ForgotPasswordViewModel>() {
        return vm;
    }
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = create_forgot_password_view_model(api);
    provide_context(vm);
    vm
}
