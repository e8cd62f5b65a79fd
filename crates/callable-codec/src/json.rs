use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::{Codec, DecodeError, EncodeError};

/// JSON codec backed by `serde_json`.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }
        serde_json::from_slice(bytes).map_err(from_json)
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, EncodeError> {
        serde_json::to_vec(value).map_err(|e| EncodeError(e.to_string()))
    }
}

fn from_json(err: serde_json::Error) -> DecodeError {
    match err.classify() {
        Category::Data => DecodeError::Shape(err.to_string()),
        Category::Syntax | Category::Eof | Category::Io => DecodeError::Malformed {
            line:    err.line(),
            column:  err.column(),
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Entry {
        id:   u32,
        tags: Vec<String>,
    }

    #[test]
    fn test_decode_valid() {
        let entry: Entry = JsonCodec.decode(br#"{"id":7,"tags":["a","b"]}"#).unwrap();
        assert_eq!(entry, Entry {
            id:   7,
            tags: vec!["a".into(), "b".into()],
        });
    }

    #[test]
    fn test_decode_empty_is_not_empty_value() {
        assert!(matches!(JsonCodec.decode::<Vec<u8>>(b""), Err(DecodeError::Empty)));
        let empty: Vec<u32> = JsonCodec.decode(b"[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_decode_syntax_error() {
        let err = JsonCodec.decode::<Entry>(b"{\"id\": ").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_decode_wrong_shape() {
        let err = JsonCodec.decode::<Entry>(br#"{"id":"seven","tags":[]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Shape(_)));
    }

    #[test]
    fn test_encode() {
        let bytes = JsonCodec.encode(&vec![1, 2, 3]).unwrap();
        assert_eq!(bytes, b"[1,2,3]");
    }
}
