use http::StatusCode;
use url::Url;

use crate::error::TransportError;

/// The error a transport reports for a finished response, if any.
///
/// With `error_for_status` off, every status is passed through as plain
/// metadata.
pub fn status_error(url: &Url, status: StatusCode, error_for_status: bool) -> Option<TransportError> {
    if error_for_status && !status.is_success() {
        Some(TransportError::Status {
            url: url.clone(),
            status,
        })
    } else {
        None
    }
}
