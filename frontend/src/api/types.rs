use leptos::{IntoView, View};
use serde::{Deserialize, Serialize};

pub const REJECTED_FALLBACK: &str = "please try again later";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
    pub reset_url: String,
}

/// `success` and `reset_token` are read loosely: a missing or null flag means
/// "not sent", and the token is only logged, whatever its JSON type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub reset_token: Option<serde_json::Value>,
}

impl ForgotPasswordResponse {
    pub fn succeeded(&self) -> bool {
        self.success.unwrap_or(false)
    }

    pub fn token_text(&self) -> Option<String> {
        match self.reset_token.as_ref()? {
            serde_json::Value::String(token) => Some(token.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// A reset request the backend confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetDispatch {
    pub email: String,
    pub reset_token: Option<String>,
}

/// Every way a forgot-password submission can fail. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("This email address is not registered")]
    NotFound,
    #[error("Failed to send: {0}")]
    Rejected(String),
    #[error("Server error (status {0})")]
    Server(u16),
    #[error("Request timed out, please check your network connection")]
    Timeout,
    #[error("Cannot reach the server, please try again later")]
    Transport(String),
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }

    pub fn rejected(message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| REJECTED_FALLBACK.to_string());
        Self::Rejected(message)
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::Rejected(_) => "REJECTED",
            ApiError::Server(_) => "SERVER_ERROR",
            ApiError::Timeout => "TIMEOUT",
            ApiError::Transport(_) => "REQUEST_FAILED",
            ApiError::Unknown(_) => "UNKNOWN",
        }
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() || err.is_body() {
            ApiError::Unknown(err.to_string())
        } else if is_connection_failure(&err) {
            ApiError::Transport(err.to_string())
        } else {
            ApiError::Unknown(err.to_string())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_connection_failure(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_request()
}

// fetch() failures surface as request errors in the browser.
#[cfg(target_arch = "wasm32")]
fn is_connection_failure(err: &reqwest::Error) -> bool {
    err.is_request()
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn api_error_can_be_converted_to_view() {
        let runtime = leptos::create_runtime();
        let _: View = ApiError::Timeout.into_view();
        runtime.dispose();
    }
}
