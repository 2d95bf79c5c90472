//! `reqwest` implementation of [`PlacesApi`].
//!
//! On wasm32 `reqwest` issues requests through the browser's `fetch`, so the
//! page's own cookie and CORS policy apply. Response bodies are read as text
//! first and decoded with `serde_json` for better error diagnostics.

use std::sync::Arc;

use hbnb_core::{AccessToken, LoginRequest, LoginResponse, NewReview, Place, PlaceId};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::{ApiError, PlacesApi};
use crate::config::WebConfig;

/// Maximum number of body characters copied into log records.
const LOG_BODY_LIMIT: usize = 500;

/// Client for the hbnb REST API.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    api_base: Url,
}

impl ApiClient {
    /// Create a new API client.
    #[must_use]
    pub fn new(config: &WebConfig) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                api_base: config.api_base.clone(),
            }),
        }
    }

    /// Build an endpoint URL by appending path segments to the API base.
    ///
    /// Segments are percent-encoded, so an id can never escape its segment.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Url` if the base cannot carry path segments.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.inner.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Url(self.inner.api_base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and return the success body as text.
    async fn execute(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response: Response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            debug!(
                status = %status,
                body = %body.chars().take(LOG_BODY_LIMIT).collect::<String>(),
                "API returned non-success status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    /// Send a request and decode the JSON success body.
    async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.execute(request).await?;
        serde_json::from_str(&body).map_err(|e| {
            debug!(
                error = %e,
                body = %body.chars().take(LOG_BODY_LIMIT).collect::<String>(),
                "Failed to decode API response"
            );
            ApiError::from(e)
        })
    }
}

impl PlacesApi for ApiClient {
    async fn login(&self, credentials: &LoginRequest) -> Result<AccessToken, ApiError> {
        let url = self.endpoint(&["auth", "login"])?;
        debug!(%url, "POST login");

        let response: LoginResponse = self
            .execute_json(self.inner.client.post(url).json(credentials))
            .await?;

        AccessToken::new(response.access_token)
            .ok_or_else(|| ApiError::Decode("access_token is empty".to_string()))
    }

    async fn places(&self, token: &AccessToken) -> Result<Vec<Place>, ApiError> {
        let url = self.endpoint(&["places"])?;
        debug!(%url, "GET places");

        self.execute_json(self.inner.client.get(url).bearer_auth(token.expose()))
            .await
    }

    async fn place(&self, id: &PlaceId, token: Option<&AccessToken>) -> Result<Place, ApiError> {
        let url = self.endpoint(&["places", id.as_str()])?;
        debug!(%url, authenticated = token.is_some(), "GET place");

        let mut request = self.inner.client.get(url);
        if let Some(token) = token {
            request = request.bearer_auth(token.expose());
        }
        self.execute_json(request).await
    }

    async fn submit_review(&self, token: &AccessToken, review: &NewReview) -> Result<(), ApiError> {
        let url = self.endpoint(&["reviews"])?;
        debug!(%url, place_id = ?review.place_id, "POST review");

        self.execute(
            self.inner
                .client
                .post(url)
                .bearer_auth(token.expose())
                .json(review),
        )
        .await
        .map(drop)
    }
}

/// Map a `reqwest` failure to the message of its innermost cause.
///
/// In the browser the innermost cause is the debug rendering of the `fetch`
/// rejection, which [`js_error_message`] reduces to what the user should
/// see (e.g. `Failed to fetch`).
fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        return ApiError::Decode(err.to_string());
    }

    let mut source: &dyn std::error::Error = &err;
    while let Some(next) = source.source() {
        source = next;
    }
    ApiError::Transport(js_error_message(&source.to_string()))
}

/// Reduce `JsValue(TypeError: Failed to fetch\n    at ...)` to
/// `Failed to fetch`.
///
/// Messages without the `JsValue(` wrapper are returned unchanged.
pub(crate) fn js_error_message(raw: &str) -> String {
    let Some(inner) = raw.strip_prefix("JsValue(") else {
        return raw.to_string();
    };
    let inner = inner.strip_suffix(')').unwrap_or(inner);
    let first_line = inner.lines().next().unwrap_or_default().trim();

    match first_line.split_once(": ") {
        Some((name, message))
            if name.ends_with("Error") && name.chars().all(char::is_alphanumeric) =>
        {
            message.to_string()
        }
        _ => first_line.to_string(),
    }
}
