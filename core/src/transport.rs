//! Executes plain-data requests over ureq.
//!
//! # Design
//! The only module that touches the network. ureq's status-as-error
//! behavior is disabled so 4xx/5xx responses come back as data and status
//! interpretation stays with the caller. Exactly one request is issued per
//! call; no retry, no timeout beyond the platform defaults.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Build an agent that reports non-2xx statuses as responses, not errors.
pub(crate) fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

/// Execute one request and normalize the outcome into an `HttpResponse`.
///
/// Transport-level failures (refused connection, DNS, read errors) map to
/// `ApiError::Transport`. Bodies on GET and DELETE requests are not sent.
pub(crate) fn execute(agent: &ureq::Agent, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let body = req.body.as_deref().unwrap_or("");
    let result = match req.method {
        HttpMethod::Get => with_headers(agent.get(&req.url), &req.headers).call(),
        HttpMethod::Delete => with_headers(agent.delete(&req.url), &req.headers).call(),
        HttpMethod::Post => with_headers(agent.post(&req.url), &req.headers).send(body.as_bytes()),
        HttpMethod::Put => with_headers(agent.put(&req.url), &req.headers).send(body.as_bytes()),
    };

    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    tracing::debug!(method = %req.method, url = %req.url, status, "request completed");

    Ok(HttpResponse { status, body })
}

fn with_headers<Any>(
    mut builder: ureq::RequestBuilder<Any>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<Any> {
    for (key, value) in headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    builder
}
