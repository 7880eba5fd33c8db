use crate::api::{ApiClient, ApiError, ForgotPasswordRequest, ResetDispatch};
use std::rc::Rc;

#[derive(Clone)]
pub struct ForgotPasswordRepository {
    client: Rc<ApiClient>,
}

impl ForgotPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// A 200 only counts once the body says `success: true`.
    pub async fn request_reset(
        &self,
        request: ForgotPasswordRequest,
    ) -> Result<ResetDispatch, ApiError> {
        let response = self.client.request_password_reset(&request).await?;
        if !response.succeeded() {
            return Err(ApiError::rejected(response.message));
        }
        let reset_token = response.token_text();
        if let Some(token) = &reset_token {
            log::info!("reset token issued for {}: {}", request.email, token);
        }
        Ok(ResetDispatch {
            email: request.email,
            reset_token,
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> ForgotPasswordRepository {
        ForgotPasswordRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    fn request() -> ForgotPasswordRequest {
        ForgotPasswordRequest {
            email: "a@b.com".into(),
            reset_url: "http://127.0.0.1:3000/reset-password".into(),
        }
    }

    #[tokio::test]
    async fn request_reset_returns_dispatch_with_token() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/forgot-password");
                then.status(200)
                    .json_body(json!({ "success": true, "reset_token": "abc" }));
            })
            .await;

        let dispatch = repository(&server).request_reset(request()).await.unwrap();
        assert_eq!(dispatch.email, "a@b.com");
        assert_eq!(dispatch.reset_token.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn request_reset_turns_unsuccessful_body_into_rejection() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/forgot-password");
                then.status(200)
                    .json_body(json!({ "success": false, "message": "X" }));
            })
            .await;

        let err = repository(&server)
            .request_reset(request())
            .await
            .expect_err("should be rejected");
        assert_eq!(err, ApiError::Rejected("X".into()));
    }
}
