use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_IP: &str = "127.0.0.1";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Info,
    Success,
    Error,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Info => "info",
            MessageType::Success => "success",
            MessageType::Error => "error",
        }
    }

    pub fn classes(&self) -> &'static str {
        match self {
            MessageType::Info => "bg-status-info-bg text-status-info-text",
            MessageType::Success => "bg-status-success-bg text-status-success-text",
            MessageType::Error => "bg-status-error-bg text-status-error-text",
        }
    }
}

/// Which screen the index page is on, derived from [`ForgotPasswordState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Login,
    Idle,
    Sending,
    Failed,
    Sent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordState {
    pub show_forgot_password: bool,
    pub forgot_email: String,
    pub forgot_message: String,
    pub message_type: MessageType,
    pub email_sent: bool,
    pub server_ip: String,
}

impl Default for ForgotPasswordState {
    fn default() -> Self {
        Self {
            show_forgot_password: false,
            forgot_email: String::new(),
            forgot_message: String::new(),
            message_type: MessageType::Info,
            email_sent: false,
            server_ip: DEFAULT_SERVER_IP.to_string(),
        }
    }
}

impl ForgotPasswordState {
    pub fn toggle(&mut self) {
        self.show_forgot_password = !self.show_forgot_password;
        self.forgot_message.clear();
        self.email_sent = false;
    }

    /// Back to the login form. The discovered server address survives.
    pub fn reset(&mut self) {
        self.forgot_email.clear();
        self.forgot_message.clear();
        self.email_sent = false;
        self.show_forgot_password = false;
    }

    /// Applies a discovered address, only while still on the loopback default.
    pub fn adopt_server_ip(&mut self, discovered: Option<String>) -> bool {
        if self.server_ip != DEFAULT_SERVER_IP {
            return false;
        }
        match discovered {
            Some(ip) if !ip.is_empty() && ip != DEFAULT_SERVER_IP => {
                self.server_ip = ip;
                true
            }
            _ => false,
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>, message_type: MessageType) {
        self.forgot_message = message.into();
        self.message_type = message_type;
    }

    pub fn phase(&self) -> FormPhase {
        if !self.show_forgot_password {
            return FormPhase::Login;
        }
        if self.email_sent {
            return FormPhase::Sent;
        }
        match self.message_type {
            MessageType::Error if !self.forgot_message.is_empty() => FormPhase::Failed,
            MessageType::Info if !self.forgot_message.is_empty() => FormPhase::Sending,
            _ => FormPhase::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dirty_state() -> ForgotPasswordState {
        ForgotPasswordState {
            show_forgot_password: true,
            forgot_email: "a@b.com".into(),
            forgot_message: "Reset link sent".into(),
            message_type: MessageType::Success,
            email_sent: true,
            server_ip: "10.0.0.7".into(),
        }
    }

    #[test]
    fn default_state_shows_login_with_loopback_ip() {
        let state = ForgotPasswordState::default();
        assert!(!state.show_forgot_password);
        assert!(state.forgot_email.is_empty());
        assert!(state.forgot_message.is_empty());
        assert_eq!(state.message_type, MessageType::Info);
        assert!(!state.email_sent);
        assert_eq!(state.server_ip, "127.0.0.1");
        assert_eq!(state.phase(), FormPhase::Login);
    }

    #[test]
    fn toggle_twice_restores_view_and_clears_feedback() {
        let mut state = dirty_state();
        state.toggle();
        assert!(!state.show_forgot_password);
        assert!(state.forgot_message.is_empty());
        assert!(!state.email_sent);

        state.set_message("stale", MessageType::Error);
        state.toggle();
        assert!(state.show_forgot_password);
        assert!(state.forgot_message.is_empty());
        assert!(!state.email_sent);
        assert_eq!(state.phase(), FormPhase::Idle);
    }

    #[test]
    fn toggle_keeps_entered_email() {
        let mut state = dirty_state();
        state.toggle();
        assert_eq!(state.forgot_email, "a@b.com");
    }

    #[test]
    fn reset_returns_to_defaults_from_any_state() {
        let mut state = dirty_state();
        state.reset();
        assert!(state.forgot_email.is_empty());
        assert!(state.forgot_message.is_empty());
        assert!(!state.email_sent);
        assert!(!state.show_forgot_password);
        assert_eq!(state.server_ip, "10.0.0.7");

        let mut fresh = ForgotPasswordState::default();
        fresh.reset();
        assert_eq!(fresh, ForgotPasswordState::default());
    }

    #[test]
    fn adopt_server_ip_overwrites_loopback_once() {
        let mut state = ForgotPasswordState::default();
        assert!(state.adopt_server_ip(Some("192.168.0.12".into())));
        assert_eq!(state.server_ip, "192.168.0.12");
        assert!(!state.adopt_server_ip(Some("10.1.1.1".into())));
        assert_eq!(state.server_ip, "192.168.0.12");
    }

    #[test]
    fn adopt_server_ip_ignores_missing_or_loopback() {
        let mut state = ForgotPasswordState::default();
        assert!(!state.adopt_server_ip(None));
        assert!(!state.adopt_server_ip(Some("127.0.0.1".into())));
        assert!(!state.adopt_server_ip(Some(String::new())));
        assert_eq!(state.server_ip, DEFAULT_SERVER_IP);
    }

    #[test]
    fn phase_follows_message_and_sent_flag() {
        let mut state = ForgotPasswordState::default();
        state.toggle();
        assert_eq!(state.phase(), FormPhase::Idle);
        state.set_message("Sending", MessageType::Info);
        assert_eq!(state.phase(), FormPhase::Sending);
        state.set_message("nope", MessageType::Error);
        assert_eq!(state.phase(), FormPhase::Failed);
        state.set_message("done", MessageType::Success);
        state.email_sent = true;
        assert_eq!(state.phase(), FormPhase::Sent);
    }

    #[test]
    fn message_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(MessageType::Success).unwrap(),
            serde_json::json!("success")
        );
        assert_eq!(MessageType::Error.as_str(), "error");
        assert!(MessageType::Error.classes().contains("status-error"));
    }
}
