//! Plain-data HTTP request and response types.
//!
//! # Design
//! Requests and responses are described as owned plain data, so building a
//! request and interpreting a response stay free of I/O and can be tested
//! without a network. Header keys are stored lowercase and merged
//! last-write-wins, matching HTTP's case-insensitive header semantics.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// An HTTP request described as plain data, ready for the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL: resolved base URL plus resource path.
    pub url: String,
    /// Lowercased keys, at most one entry per key.
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response normalized to its status and body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Insert or replace a header. Keys compare case-insensitively; a later
/// write for the same key replaces the earlier value in place.
pub fn set_header(headers: &mut Vec<(String, String)>, key: &str, value: &str) {
    let key = key.to_ascii_lowercase();
    match headers.iter_mut().find(|entry| entry.0 == key) {
        Some(entry) => entry.1 = value.to_string(),
        None => headers.push((key, value.to_string())),
    }
}
