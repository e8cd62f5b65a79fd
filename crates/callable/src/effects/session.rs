use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use url::Url;

use crate::data::{Request, Response};
use crate::effects::task::Task;
use crate::error::TransportError;

/// Completion for in-memory fetches: payload, response metadata, error.
///
/// Payload and error are not mutually exclusive; a failed status can carry
/// a body.
pub type DataCompletion =
    Box<dyn FnOnce(Option<Bytes>, Option<Response>, Option<TransportError>) + Send>;

/// Completion for downloads: staging file location, response metadata, error.
///
/// The staging file only exists until the completion returns.
pub type DownloadCompletion =
    Box<dyn for<'a> FnOnce(Option<&'a Path>, Option<Response>, Option<TransportError>) + Send>;

/// The network transport.
///
/// Implementations own connection handling, redirects and TLS. Both
/// constructors return suspended tasks; completions run on whatever worker
/// thread the implementation chooses.
pub trait Session: Send + Sync {
    fn data_task(&self, request: &Request, completion: DataCompletion) -> Task;

    fn download_task(&self, url: &Url, completion: DownloadCompletion) -> Task;
}

impl<S: Session + ?Sized> Session for &S {
    fn data_task(&self, request: &Request, completion: DataCompletion) -> Task {
        (**self).data_task(request, completion)
    }

    fn download_task(&self, url: &Url, completion: DownloadCompletion) -> Task {
        (**self).download_task(url, completion)
    }
}

impl<S: Session + ?Sized> Session for Arc<S> {
    fn data_task(&self, request: &Request, completion: DataCompletion) -> Task {
        (**self).data_task(request, completion)
    }

    fn download_task(&self, url: &Url, completion: DownloadCompletion) -> Task {
        (**self).download_task(url, completion)
    }
}
