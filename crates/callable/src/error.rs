//! Error types for callable.

use std::io;

use http::StatusCode;
use thiserror::Error;
use url::Url;

/// A failure reported by the transport.
///
/// This is only ever handed to callbacks, never returned: the capabilities
/// relay it without inspecting or reclassifying it.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request has no URL")]
    MissingUrl,

    #[error("HTTP status {status} from {url}")]
    Status { url: Url, status: StatusCode },

    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("file I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("task was cancelled")]
    Cancelled,
}

impl TransportError {
    pub fn is_cancelled(&self) -> bool { matches!(self, TransportError::Cancelled) }
}

/// A failure propagated to the caller of a local-decode helper.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not a local file URL: {0}")]
    NotLocal(Url),

    #[error(transparent)]
    Fs(#[from] callable_fs::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid session configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid default header {name:?}")]
    Header { name: String },

    #[error("no tokio runtime is running on this thread")]
    NoRuntime,

    #[error("failed to start runtime: {0}")]
    Runtime(#[source] io::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
