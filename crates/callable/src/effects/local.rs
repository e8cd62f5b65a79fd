use callable_codec::{Codec, JsonCodec};
use callable_fs::Content;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::core::local_path;
use crate::error::{Error, Result};

/// Decode a local file straight into a typed value.
///
/// Only `file` URLs are accepted. Read failures propagate as [`Error`];
/// a file that reads fine but does not decode (including an empty one)
/// yields `None`.
pub trait LocalDecode {
    /// Read the whole file synchronously, memory-mapped when large.
    fn local_bytes(&self) -> Result<Content>;

    /// Decode as JSON and hand the result to `action`.
    ///
    /// With `expressive` set, decode failures are logged at `warn` instead of
    /// `debug`.
    fn call_local_codable<T, F>(&self, expressive: bool, action: F) -> Result<()>
    where
        T: DeserializeOwned,
        F: FnOnce(Option<T>),
    {
        action(self.local_codable_with(&JsonCodec, expressive)?);
        Ok(())
    }

    /// Decode as JSON and return the result.
    fn local_codable<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        self.local_codable_with(&JsonCodec, false)
    }

    fn local_codable_with<T, C>(&self, codec: &C, expressive: bool) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        C: Codec;
}

impl LocalDecode for Url {
    fn local_bytes(&self) -> Result<Content> {
        let path = local_path(self).ok_or_else(|| Error::NotLocal(self.clone()))?;
        Ok(callable_fs::read(path)?)
    }

    fn local_codable_with<T, C>(&self, codec: &C, expressive: bool) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        C: Codec,
    {
        let content = self.local_bytes()?;
        match codec.decode(&content) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                if expressive {
                    warn!(url = %self, error = %err, "failed to decode local file");
                } else {
                    debug!(url = %self, error = %err, "failed to decode local file");
                }
                Ok(None)
            }
        }
    }
}
