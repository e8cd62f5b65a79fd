use std::fmt;

use bytes::Bytes;
use http::Method;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

/// Text rendered for a request that carries no URL.
pub const NO_URL: &str = "This request has no URL";

/// A prepared request: a location plus method, headers and body.
///
/// A request without a URL is a valid value. It renders as [`NO_URL`] and
/// any task built from it completes with
/// [`TransportError::MissingUrl`](crate::TransportError::MissingUrl).
///
/// # Examples
///
/// ```
/// use callable::Request;
/// use http::Method;
///
/// let url = "https://example.com/api".parse().unwrap();
/// let request = Request::new(url)
///     .with_method(Method::POST)
///     .with_body(r#"{"name":"zig"}"#);
///
/// assert_eq!(request.absolute_string(), "https://example.com/api");
/// assert_eq!(Request::default().to_string(), "This request has no URL");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    url:     Option<Url>,
    method:  Method,
    headers: HeaderMap,
    body:    Option<Bytes>,
}

impl Request {
    pub fn new(url: Url) -> Self {
        Self {
            url: Some(url),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Append a header; repeated names are kept, not replaced.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn url(&self) -> Option<&Url> { self.url.as_ref() }

    pub fn method(&self) -> &Method { &self.method }

    pub fn headers(&self) -> &HeaderMap { &self.headers }

    pub fn body(&self) -> Option<&Bytes> { self.body.as_ref() }

    pub fn absolute_string(&self) -> &str { self.url.as_ref().map_or(NO_URL, Url::as_str) }
}

impl From<Url> for Request {
    fn from(url: Url) -> Self { Self::new(url) }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.absolute_string()) }
}
