use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use http::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;

use crate::error::ConfigError;

/// Configuration for a [`ReqwestSession`](crate::ReqwestSession).
///
/// Can be built in code or loaded from TOML:
///
/// ```
/// use callable::SessionConfig;
/// use std::time::Duration;
///
/// let config = SessionConfig::from_toml_str(r#"
///     connect_timeout_secs = 5
///     user_agent = "tool-manager/0.1"
///
///     [default_headers]
///     accept = "application/json"
/// "#).unwrap();
///
/// assert_eq!(config.connect_timeout, Some(Duration::from_secs(5)));
/// assert!(config.error_for_status);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Time allowed to establish a connection.
    #[serde(rename = "connect_timeout_secs", deserialize_with = "secs::deserialize")]
    pub connect_timeout: Option<Duration>,

    /// Time allowed for a whole request, body included.
    #[serde(rename = "request_timeout_secs", deserialize_with = "secs::deserialize")]
    pub request_timeout: Option<Duration>,

    pub user_agent: Option<String>,

    /// Headers added to every outgoing request.
    pub default_headers: BTreeMap<String, String>,

    /// Report non-2xx statuses in the error slot as
    /// [`TransportError::Status`](crate::TransportError::Status).
    ///
    /// Default: true
    pub error_for_status: bool,

    /// Directory for download staging files. Defaults to the OS temp dir.
    pub temp_dir: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            connect_timeout:  None,
            request_timeout:  None,
            user_agent:       None,
            default_headers:  BTreeMap::new(),
            error_for_status: true,
            temp_dir:         None,
        }
    }
}

impl SessionConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> { Ok(toml::from_str(s)?) }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn error_for_status(mut self, enabled: bool) -> Self {
        self.error_for_status = enabled;
        self
    }

    pub fn temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Validate and convert the default headers.
    pub fn header_map(&self) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::with_capacity(self.default_headers.len());
        for (name, value) in &self.default_headers {
            let invalid = || ConfigError::Header { name: name.clone() };
            let key = HeaderName::try_from(name.as_str()).map_err(|_| invalid())?;
            let value = HeaderValue::try_from(value.as_str()).map_err(|_| invalid())?;
            headers.insert(key, value);
        }
        Ok(headers)
    }

    pub(crate) fn staging_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

mod secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = SessionConfig::default();
        assert!(config.error_for_status);
        assert!(config.connect_timeout.is_none());
        assert!(config.header_map().unwrap().is_empty());
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::default()
            .request_timeout(Duration::from_secs(30))
            .header("X-Trace", "1")
            .error_for_status(false)
            .temp_dir("/var/tmp");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
        assert!(!config.error_for_status);
        assert_eq!(config.staging_dir(), PathBuf::from("/var/tmp"));
        assert_eq!(config.header_map().unwrap().get("x-trace").unwrap(), "1");
    }

    #[test]
    fn test_from_toml() {
        let config = SessionConfig::from_toml_str(
            r#"
            request_timeout_secs = 120
            error_for_status = false
            temp_dir = "/tmp/staging"
            "#,
        )
        .unwrap();
        assert_eq!(config.request_timeout, Some(Duration::from_secs(120)));
        assert!(!config.error_for_status);
        assert_eq!(config.temp_dir, Some(PathBuf::from("/tmp/staging")));
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        assert!(matches!(
            SessionConfig::from_toml_str("retries = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_header() {
        let config = SessionConfig::default().header("bad header", "x");
        assert!(matches!(config.header_map(), Err(ConfigError::Header { name }) if name == "bad header"));
    }
}
