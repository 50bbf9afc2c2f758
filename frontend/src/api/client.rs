use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config;
use crate::state::notifications::Notifier;

use super::types::ApiError;

/// Characters that may not appear raw inside a single URL path segment.
/// Emails keep their `@` and `.` so mock servers and logs stay readable.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?');

/// Thin wrapper over the bot API. Every non-2xx response and every transport
/// failure is reported exactly once through the injected [`Notifier`]; the
/// original `Result` is always handed back to the caller untouched so pages
/// can still branch on it for their own control flow.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    notifier: Notifier,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            notifier: Notifier::noop(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            notifier: Notifier::noop(),
        }
    }

    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    pub(super) fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) fn encode_path_segment(raw: &str) -> String {
        utf8_percent_encode(raw, PATH_SEGMENT).to_string()
    }

    /// Sends the request, translating transport failures (DNS, offline,
    /// refused connection) into a notified [`ApiError`].
    pub(super) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request.send().await.map_err(|err| {
            let message = format!("Fetch error: {}", err);
            log::error!("{}", message);
            self.notifier.error(&message);
            ApiError::unknown(message)
        })
    }

    /// Consumes a non-2xx response into an [`ApiError`], preferring the JSON
    /// `error`/`message` body fields over the generic status line, and emits
    /// the single user-visible notification for it.
    pub(super) async fn error_from_response(&self, response: Response) -> ApiError {
        let status = response.status();
        let fallback = format!("Request failed with status {}", status.as_u16());
        let message = match response.json::<Value>().await {
            Ok(body) => body
                .get("error")
                .and_then(Value::as_str)
                .or_else(|| body.get("message").and_then(Value::as_str))
                .map(str::to_string)
                .unwrap_or(fallback),
            Err(_) => fallback,
        };
        log::error!("API error ({}): {}", status, message);
        self.notifier.error(&message);
        ApiError::request_failed(message)
    }

    pub(super) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|err| ApiError::unknown(format!("Failed to parse response: {}", err)))
    }

    /// send + status branch + body decode, the shape every operation shares.
    pub(super) async fn expect_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        if response.status().is_success() {
            Self::parse_json(response).await
        } else {
            Err(self.error_from_response(response).await)
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
