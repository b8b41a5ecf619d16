//! Bearer-authenticated HTTP client wrapper.
//!
//! Every request goes through [`ApiClient`], which prefixes the backend
//! base URL and attaches the stored token as a bearer credential when
//! one exists. Non-2xx responses are mapped to [`AppError::Api`] with
//! the server's `{"error": ...}` message when the body carries one.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::auth::stored_token;
use crate::types::{AppError, AppResult};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match stored_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// GET, decoding a JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = Self::authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// POST with a JSON body, decoding a JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = Self::authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| AppError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// POST with an empty body, ignoring the response payload.
    pub async fn post_ok(&self, path: &str) -> AppResult<()> {
        let response = Self::authorize(Request::post(&self.url(path)))
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(AppError::Api {
                status: response.status(),
                message: Self::error_message(response).await,
            });
        }
        Ok(())
    }

    /// POST with a multipart body, decoding a JSON response.
    ///
    /// The browser sets the multipart content type and boundary itself.
    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, form: FormData) -> AppResult<T> {
        let request = Self::authorize(Request::post(&self.url(path)))
            .body(form)
            .map_err(|e| AppError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        if !response.ok() {
            return Err(AppError::Api {
                status: response.status(),
                message: Self::error_message(response).await,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }

    /// Pulls the server's error message out of a failed response.
    async fn error_message(response: Response) -> String {
        let status_text = response.status_text();
        let text = response.text().await.unwrap_or_default();
        serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|value| {
                value
                    .get("error")
                    .and_then(|e| e.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| if text.is_empty() { status_text } else { text })
    }
}
