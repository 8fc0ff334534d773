// src/client/api_client.rs
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::warn;

use super::logging::{log_request, log_response};
use crate::common::{ApiError, ClientConfig};
use crate::storage::SessionStore;

/// Thin wrapper around `reqwest::Client` for the EmpleaWorks REST API.
///
/// Every request is fire-once: no retry, no backoff. Failures come back as
/// `ApiError` for the caller to present.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    store: SessionStore,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, store: SessionStore) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let builder = self.http.get(self.url(path));
        self.execute(Method::GET, path, builder, None).await
    }

    pub async fn get_with_query<Q, R>(&self, path: &str, query: &Q) -> Result<R, ApiError>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let builder = self.http.get(self.url(path)).query(query);
        self.execute(Method::GET, path, builder, None).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let json = to_json(body)?;
        let builder = self.http.post(self.url(path)).json(&json);
        self.execute(Method::POST, path, builder, Some(&json)).await
    }

    pub async fn post_empty<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let builder = self.http.post(self.url(path));
        self.execute(Method::POST, path, builder, None).await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let json = to_json(body)?;
        let builder = self.http.put(self.url(path)).json(&json);
        self.execute(Method::PUT, path, builder, Some(&json)).await
    }

    pub async fn delete<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let builder = self.http.delete(self.url(path));
        self.execute(Method::DELETE, path, builder, None).await
    }

    /// POST a multipart form. `summary` is what gets logged in place of the
    /// binary body.
    pub async fn post_multipart<R>(
        &self,
        path: &str,
        form: Form,
        summary: &Value,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let builder = self.http.post(self.url(path)).multipart(form);
        self.execute(Method::POST, path, builder, Some(summary)).await
    }

    async fn execute<R>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
        body: Option<&Value>,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let token = self.store.token().await?;
        log_request(&method, path, body, token.is_some());

        let builder = match &token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let started = Instant::now();
        let response = builder.send().await.map_err(|e| {
            warn!(method = %method, path = %path, error = %e, "Request failed without a response");
            ApiError::from(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;
        log_response(&method, path, status, &bytes, started.elapsed());

        if !status.is_success() {
            let error = ApiError::from_response(status.as_u16(), &bytes);
            warn!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                message = %error.message(),
                "Request rejected by server"
            );
            return Err(error);
        }

        decode_body(&bytes)
    }
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(format!("Failed to encode body: {}", e)))
}

/// Decode a success body. An empty body decodes as `null`, or as `{}` for
/// targets that cannot take `null`.
fn decode_body<R: DeserializeOwned>(bytes: &[u8]) -> Result<R, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_slice(b"null")
            .or_else(|_| serde_json::from_slice(b"{}"))
            .map_err(|e| ApiError::Decode(format!("Empty response body: {}", e)));
    }
    serde_json::from_slice(bytes).map_err(|e| ApiError::Decode(e.to_string()))
}
