//! Low-level HTTP client — `ClubdashHttp`.
//!
//! Builds URLs from the base URL, serializes JSON bodies, merges default and
//! caller headers, and normalizes non-success responses into
//! [`HttpError::Status`]. Single-shot: no retries, no timeout, no caching.
//! Errors are returned, not logged; logging failures is the caller's job.

use crate::error::{HttpError, SdkError};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Per-call options for [`ClubdashHttp::call`].
#[derive(Debug, Clone)]
pub struct CallOptions {
    pub method: Method,
    /// Serialized as the JSON request body when present.
    pub body: Option<Value>,
    /// Merged over the client's default headers; the caller wins on conflicts.
    pub headers: Vec<(String, String)>,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
        }
    }
}

impl CallOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Option<Value>) -> Self {
        Self {
            method: Method::POST,
            body,
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Low-level HTTP client for the dashboard REST API.
#[derive(Debug, Clone)]
pub struct ClubdashHttp {
    base_url: String,
    client: Client,
}

impl ClubdashHttp {
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        Self::with_headers(base_url, &[])
    }

    /// Build a client whose requests always carry `headers` in addition to the
    /// JSON content-type defaults.
    pub fn with_headers(base_url: &str, headers: &[(String, String)]) -> Result<Self, SdkError> {
        let mut defaults = HeaderMap::new();
        defaults.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        defaults.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in build_headers(headers)? {
            if let Some(name) = name {
                defaults.insert(name, value);
            }
        }

        let client = Client::builder()
            .default_headers(defaults)
            .build()
            .map_err(HttpError::from)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint such as `"/transfers"`.
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    /// Generic request returning the raw JSON response.
    pub async fn call(&self, endpoint: &str, options: CallOptions) -> Result<Value, SdkError> {
        let headers = build_headers(&options.headers)?;
        let url = self.url(endpoint);
        Ok(self
            .do_request(options.method, &url, options.body.as_ref(), headers)
            .await?)
    }

    // ── Typed helpers used by the domain sub-clients ─────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, HttpError> {
        let url = self.url(endpoint);
        self.do_request(Method::GET, &url, None::<&()>, HeaderMap::new())
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let url = self.url(endpoint);
        self.do_request(Method::POST, &url, Some(body), HeaderMap::new())
            .await
    }

    /// POST without a request body.
    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T, HttpError> {
        let url = self.url(endpoint);
        self.do_request(Method::POST, &url, None::<&()>, HeaderMap::new())
            .await
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn do_request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        headers: HeaderMap,
    ) -> Result<T, HttpError> {
        tracing::debug!(method = %method, url, "dispatching request");

        let mut req = self.client.request(method, url).headers(headers);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
                message: error_message(status, &bytes),
            });
        }

        decode_body(&bytes)
    }
}

/// Empty success bodies decode as JSON `null`.
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, HttpError> {
    let result = if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_slice(bytes)
    };
    result.map_err(|e| HttpError::Decode(e.to_string()))
}

/// Message for a non-success response: the JSON body's `message`, `error` or
/// `detail` string, else `"<status> <reason>"`.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) {
        for key in ["message", "error", "detail"] {
            if let Some(Value::String(msg)) = map.get(key) {
                if !msg.trim().is_empty() {
                    return msg.clone();
                }
            }
        }
    }
    format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    )
    .trim_end()
    .to_string()
}

fn build_headers(pairs: &[(String, String)]) -> Result<HeaderMap, SdkError> {
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
            SdkError::Validation(format!("Invalid header name '{}': {}", name, e))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            SdkError::Validation(format!("Invalid header value for '{}': {}", name, e))
        })?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_message_field() {
        let body = br#"{"message": "club not found", "error": "other"}"#;
        assert_eq!(error_message(StatusCode::NOT_FOUND, body), "club not found");
    }

    #[test]
    fn test_error_message_falls_back_to_error_then_detail() {
        let body = br#"{"error": "boom"}"#;
        assert_eq!(error_message(StatusCode::BAD_REQUEST, body), "boom");
        let body = br#"{"detail": "Method Not Allowed"}"#;
        assert_eq!(
            error_message(StatusCode::METHOD_NOT_ALLOWED, body),
            "Method Not Allowed"
        );
    }

    #[test]
    fn test_error_message_generic_fallback() {
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>"),
            "500 Internal Server Error"
        );
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, br#"{"message": 3}"#),
            "404 Not Found"
        );
    }

    #[test]
    fn test_url_joining() {
        let http = ClubdashHttp::new("http://localhost:8000/api/").unwrap();
        assert_eq!(http.base_url(), "http://localhost:8000/api");
        assert_eq!(http.url("/transfers"), "http://localhost:8000/api/transfers");
        assert_eq!(http.url("clubs"), "http://localhost:8000/api/clubs");
    }

    #[test]
    fn test_invalid_header_is_validation_error() {
        let err = ClubdashHttp::with_headers(
            "http://localhost",
            &[("bad header".to_string(), "x".to_string())],
        )
        .unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[test]
    fn test_decode_empty_body_as_null() {
        let v: Value = decode_body(b"").unwrap();
        assert_eq!(v, Value::Null);
        let v: Option<u32> = decode_body(b"  ").unwrap();
        assert_eq!(v, None);
        assert!(matches!(
            decode_body::<Vec<u32>>(b"{\"a\":1}"),
            Err(HttpError::Decode(_))
        ));
    }
}
