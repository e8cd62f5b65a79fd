//! Decode contract and JSON baseline adapter.
//!
//! Turns raw bytes into typed values without tying callers to one wire format.
//! A failed decode is always representable and distinct from a well-formed
//! empty value (`{}`, `[]`).
//!
//! # Example
//!
//! ```
//! use callable_codec::{Codec, DecodeExt, JsonCodec};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Tool {
//!     name: String,
//! }
//!
//! let tool: Tool = JsonCodec.decode(br#"{"name":"ripgrep"}"#).unwrap();
//! assert_eq!(tool.name, "ripgrep");
//!
//! let garbage: Option<Tool> = b"\x00\x01".codable();
//! assert!(garbage.is_none());
//! ```

pub use self::error::{DecodeError, EncodeError};
pub use self::json::JsonCodec;

mod error;
mod json;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A structured encode/decode facility.
pub trait Codec: Send + Sync {
    /// Decode `bytes` into `T`, or report why it could not be done.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, DecodeError>;

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, EncodeError>;
}

/// Lossy decoding on byte slices: failures collapse to `None`.
pub trait DecodeExt {
    fn codable<T: DeserializeOwned>(&self) -> Option<T>;

    fn codable_with<T: DeserializeOwned, C: Codec>(&self, codec: &C) -> Option<T>;
}

impl DecodeExt for [u8] {
    fn codable<T: DeserializeOwned>(&self) -> Option<T> { self.codable_with(&JsonCodec) }

    fn codable_with<T: DeserializeOwned, C: Codec>(&self, codec: &C) -> Option<T> {
        codec.decode(self).ok()
    }
}
