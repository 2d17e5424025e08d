//! HTTP response building module
//!
//! Provides the [`ResponseDescriptor`] produced by the request dispatcher and
//! builders for the canned status responses, decoupled from the transport.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::http::cache::CachePolicy;
use crate::http::headers::BASELINE_HEADERS;

/// Transport-independent description of one response.
///
/// Headers are kept as an ordered list; the baseline isolation/CORS/security
/// set always comes first, followed by any status-specific headers.
#[derive(Debug, Clone)]
pub struct ResponseDescriptor {
    pub status: StatusCode,
    pub headers: Vec<(&'static str, String)>,
    pub body: Bytes,
}

impl ResponseDescriptor {
    /// Create a descriptor with the baseline header set and an empty body
    #[must_use]
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: BASELINE_HEADERS
                .iter()
                .map(|(name, value)| (*name, (*value).to_string()))
                .collect(),
            body: Bytes::new(),
        }
    }

    /// Append a header after the baseline set
    #[must_use]
    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Set the response body
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Look up a header value by name (first match)
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Convert into a hyper response.
    ///
    /// HEAD responses keep all headers (including `Content-Length`) but omit
    /// the body bytes.
    #[must_use]
    pub fn into_response(self, is_head: bool) -> Response<Full<Bytes>> {
        let mut builder = Response::builder().status(self.status);
        for (name, value) in &self.headers {
            builder = builder.header(*name, value.as_str());
        }
        let body = if is_head { Bytes::new() } else { self.body };
        builder
            .body(Full::new(body))
            .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
    }
}

/// Build 200 OK response for a served file
#[must_use]
pub fn build_ok_response(content: Vec<u8>, content_type: &'static str, cache: CachePolicy) -> ResponseDescriptor {
    let content_length = content.len();
    ResponseDescriptor::new(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length.to_string())
        .header("Cache-Control", cache.header_value())
        .body(content)
}

/// Build OPTIONS response (CORS preflight acknowledgment)
///
/// Status 200 with an empty body and no content headers; the baseline set is
/// all a preflight needs.
#[must_use]
pub fn build_options_response() -> ResponseDescriptor {
    ResponseDescriptor::new(StatusCode::OK)
}

/// Build 403 Forbidden response
#[must_use]
pub fn build_403_response() -> ResponseDescriptor {
    build_plain_text(StatusCode::FORBIDDEN, "Forbidden")
}

/// Build 404 Not Found response
#[must_use]
pub fn build_404_response(message: &str) -> ResponseDescriptor {
    build_plain_text(StatusCode::NOT_FOUND, message)
}

/// Build 405 Method Not Allowed response
#[must_use]
pub fn build_405_response() -> ResponseDescriptor {
    build_plain_text(StatusCode::METHOD_NOT_ALLOWED, "405 Method Not Allowed")
        .header("Allow", "GET, HEAD, OPTIONS")
}

/// Build 500 Internal Server Error response.
///
/// The body is deliberately generic; the underlying error is logged
/// server-side only.
#[must_use]
pub fn build_500_response() -> ResponseDescriptor {
    build_plain_text(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

fn build_plain_text(status: StatusCode, message: &str) -> ResponseDescriptor {
    ResponseDescriptor::new(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", message.len().to_string())
        .body(message.as_bytes().to_vec())
}
