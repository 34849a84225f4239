//! HTTP Transport
//!
//! DELETE requests go through `DeleteTransport`; the browser uses `fetch` via gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;
use thiserror::Error;

/// Failure to get any response (network down, CORS, aborted)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl DeleteRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status line of the response; the body is never read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait DeleteTransport {
    async fn delete(&self, request: &DeleteRequest) -> Result<HttpReply, TransportError>;
}

/// `fetch`-backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl DeleteTransport for FetchTransport {
    async fn delete(&self, request: &DeleteRequest) -> Result<HttpReply, TransportError> {
        let mut builder = Request::delete(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(HttpReply {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let reply = |status| HttpReply { status, status_text: String::new() };
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
        assert!(!reply(199).is_success());
        assert!(!reply(302).is_success());
        assert!(!reply(404).is_success());
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let request = DeleteRequest::new("/api/products/1/").header("X-CSRFToken", "tok");
        assert_eq!(request.header_value("x-csrftoken"), Some("tok"));
        assert_eq!(request.header_value("Content-Type"), None);
    }
}
