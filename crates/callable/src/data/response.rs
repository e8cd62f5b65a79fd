use http::StatusCode;
use http::header::{CONTENT_LENGTH, HeaderMap};
use url::Url;

/// Metadata describing a completed transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub url:     Url,
    pub status:  StatusCode,
    pub headers: HeaderMap,
}

impl Response {
    pub fn new(url: Url, status: StatusCode) -> Self {
        Self {
            url,
            status,
            headers: HeaderMap::new(),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn is_success(&self) -> bool { self.status.is_success() }

    /// The advertised body length, if the transport knew it up front.
    pub fn content_length(&self) -> Option<u64> {
        self.headers
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
