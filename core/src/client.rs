//! Typed request helper shared by all resource clients.
//!
//! # Design
//! `ApiClient` holds the resolved base URL and a reusable HTTP agent and
//! carries no other state, so concurrent calls are fully independent. Each
//! call builds a plain-data `HttpRequest` (json content type injected,
//! caller headers merged last-write-wins), executes it through the
//! transport, then interprets the response: non-2xx statuses become
//! `ApiError::Http` carrying the raw body, success bodies decode through
//! serde. An empty success body decodes as the empty JSON object so
//! body-less responses (DELETE) still produce a value.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{self, HttpMethod, HttpRequest, HttpResponse};
use crate::transport;

/// Base URL used when `API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

const BASE_URL_ENV: &str = "API_BASE_URL";

/// Request helper bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    agent: ureq::Agent,
}

impl ApiClient {
    /// Client bound to an explicit base URL. A trailing slash is stripped
    /// so paths can always start with `/`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent: transport::agent(),
        }
    }

    /// Client bound to the `API_BASE_URL` environment variable, falling
    /// back to [`DEFAULT_BASE_URL`]. The variable is read once here; the
    /// resolved URL is immutable for the lifetime of the client.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one request and decode the response body into `T`.
    ///
    /// `path` must begin with `/`. Extra headers override the injected
    /// defaults key by key, last write wins.
    pub fn request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        extra_headers: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let req = self.build(method, path, body, extra_headers);
        let response = transport::execute(&self.agent, &req)?;
        decode(check_status(response)?)
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(HttpMethod::Get, path, None, &[])
    }

    pub fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(HttpMethod::Post, path, Some(to_json(body)?), &[])
    }

    pub fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(HttpMethod::Put, path, Some(to_json(body)?), &[])
    }

    /// DELETE discards the response body; a 204 with no body and a server
    /// echoing a JSON payload are both accepted.
    pub fn delete(&self, path: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self.request(HttpMethod::Delete, path, None, &[])?;
        Ok(())
    }

    fn build(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        extra_headers: &[(&str, &str)],
    ) -> HttpRequest {
        debug_assert!(path.starts_with('/'), "path must begin with '/': {path}");
        let mut headers = Vec::new();
        http::set_header(&mut headers, "content-type", "application/json");
        for (key, value) in extra_headers {
            http::set_header(&mut headers, key, value);
        }
        HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
        }
    }
}

fn to_json<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Pass success responses through; everything else becomes `ApiError::Http`
/// carrying the raw status and body text.
fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if (200..300).contains(&response.status) {
        Ok(response)
    } else {
        Err(ApiError::Http {
            status: response.status,
            body: response.body,
        })
    }
}

/// Decode a success body. An empty body stands in for the empty object.
fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    let text = if response.body.is_empty() {
        "{}"
    } else {
        response.body.as_str()
    };
    serde_json::from_str(text).map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:8081")
    }

    #[test]
    fn build_produces_absolute_url_with_json_header() {
        let req = client().build(HttpMethod::Get, "/api/patients", None, &[]);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8081/api/patients");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:8081/");
        let req = client.build(HttpMethod::Get, "/api/doctors", None, &[]);
        assert_eq!(req.url, "http://localhost:8081/api/doctors");
    }

    #[test]
    fn extra_header_overrides_injected_default() {
        let req = client().build(
            HttpMethod::Post,
            "/api/patients",
            Some("{}".to_string()),
            &[("Content-Type", "text/plain"), ("accept", "application/json")],
        );
        assert_eq!(
            req.headers,
            vec![
                ("content-type".to_string(), "text/plain".to_string()),
                ("accept".to_string(), "application/json".to_string()),
            ]
        );
    }

    #[test]
    fn check_status_passes_2xx_through() {
        let response = HttpResponse {
            status: 201,
            body: r#"{"ok":true}"#.to_string(),
        };
        let response = check_status(response).unwrap();
        assert_eq!(response.status, 201);
    }

    #[test]
    fn check_status_error_message_is_body_text() {
        let response = HttpResponse {
            status: 404,
            body: "Not Found".to_string(),
        };
        let err = check_status(response).unwrap_err();
        assert_eq!(err.to_string(), "Not Found");
    }

    #[test]
    fn check_status_error_message_embeds_status_when_body_empty() {
        let response = HttpResponse {
            status: 500,
            body: String::new(),
        };
        let err = check_status(response).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn decode_empty_body_yields_empty_object() {
        let response = HttpResponse {
            status: 204,
            body: String::new(),
        };
        let value: serde_json::Value = decode(response).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let response = HttpResponse {
            status: 200,
            body: "not json".to_string(),
        };
        let err = decode::<serde_json::Value>(response).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn from_env_reads_override_and_falls_back() {
        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(ApiClient::from_env().base_url(), DEFAULT_BASE_URL);

        std::env::set_var(BASE_URL_ENV, "http://clinic.test:9090/");
        assert_eq!(ApiClient::from_env().base_url(), "http://clinic.test:9090");
        std::env::remove_var(BASE_URL_ENV);
    }
}
