use bytes::Bytes;

use super::response::Response;
use crate::error::TransportError;

/// The three-part outcome of an in-memory fetch.
///
/// Any combination of the slots may be filled; do not assume payload and
/// error exclude each other.
#[derive(Debug, Default)]
pub struct FetchResult {
    pub data:     Option<Bytes>,
    pub response: Option<Response>,
    pub error:    Option<TransportError>,
}

impl FetchResult {
    pub fn new(
        data: Option<Bytes>,
        response: Option<Response>,
        error: Option<TransportError>,
    ) -> Self {
        Self {
            data,
            response,
            error,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            error: Some(TransportError::Cancelled),
            ..Self::default()
        }
    }

    pub fn into_parts(self) -> (Option<Bytes>, Option<Response>, Option<TransportError>) {
        (self.data, self.response, self.error)
    }
}
