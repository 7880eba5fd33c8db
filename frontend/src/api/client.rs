use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::{future::Future, time::Duration};

use crate::{api::types::*, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            timeout: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn resolved_base_url(&self) -> String {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => config::current().api_base_url,
        };
        base.trim_end_matches('/').to_string()
    }

    fn resolved_timeout(&self) -> Duration {
        self.timeout
            .unwrap_or_else(|| config::current().request_timeout())
    }

    pub fn http_client(&self) -> &Client {
        &self.client
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn apply_timeout(&self, request: RequestBuilder) -> RequestBuilder {
        request.timeout(self.resolved_timeout())
    }

    #[cfg(target_arch = "wasm32")]
    fn apply_timeout(&self, request: RequestBuilder) -> RequestBuilder {
        request
    }

    // reqwest's native timeout already covers headers and body.
    #[cfg(not(target_arch = "wasm32"))]
    async fn within_deadline<T, F>(&self, call: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        call.await
    }

    // The browser client has no per-request timeout, so race the whole exchange
    // (headers and body) against a timer.
    #[cfg(target_arch = "wasm32")]
    async fn within_deadline<T, F>(&self, call: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        use futures::future::{select, Either};

        let millis = u32::try_from(self.resolved_timeout().as_millis()).unwrap_or(u32::MAX);
        let call = Box::pin(call);
        let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(millis));
        match select(call, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ApiError::Timeout),
        }
    }

    /// POSTs to `/forgot-password`. Only a 200 yields a body; every other outcome is an `ApiError`.
    pub async fn request_password_reset(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<ForgotPasswordResponse, ApiError> {
        let base_url = self.resolved_base_url();
        let builder = self.apply_timeout(
            self.http_client()
                .post(format!("{}/forgot-password", base_url))
                .json(request),
        );
        self.within_deadline(async move {
            let response = builder.send().await.map_err(ApiError::from_transport)?;
            read_reset_response(response).await
        })
        .await
    }
}

async fn read_reset_response(response: Response) -> Result<ForgotPasswordResponse, ApiError> {
    match response.status() {
        StatusCode::OK => response
            .json::<ForgotPasswordResponse>()
            .await
            .map_err(ApiError::from_transport),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        status => Err(ApiError::Server(status.as_u16())),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn stalled_exchange_times_out() {
        let client = ApiClient::new_with_base_url("http://127.0.0.1:9/api")
            .with_timeout(Duration::from_millis(50));
        let result = client
            .within_deadline(futures::future::pending::<Result<(), ApiError>>())
            .await;
        assert_eq!(result, Err(ApiError::Timeout));
    }

    #[wasm_bindgen_test]
    async fn finished_exchange_wins_the_race() {
        let client = ApiClient::new_with_base_url("http://127.0.0.1:9/api")
            .with_timeout(Duration::from_secs(5));
        let result = client
            .within_deadline(async { Err::<(), _>(ApiError::NotFound) })
            .await;
        assert_eq!(result, Err(ApiError::NotFound));
    }

    #[wasm_bindgen_test]
    async fn body_read_counts_against_the_deadline() {
        let client = ApiClient::new_with_base_url("http://127.0.0.1:9/api")
            .with_timeout(Duration::from_millis(50));
        let result = client
            .within_deadline(async {
                // headers already in, body never arrives
                futures::future::pending::<()>().await;
                Ok(ForgotPasswordResponse::default())
            })
            .await;
        assert_eq!(result, Err(ApiError::Timeout));
    }
}
