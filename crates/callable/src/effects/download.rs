use std::path::Path;

use bytes::Bytes;
use tracing::{error, warn};
use url::Url;

use crate::data::Response;
use crate::effects::session::Session;
use crate::effects::task::Task;
use crate::error::TransportError;

/// Receives the downloaded bytes.
pub type DataAction = Box<dyn FnOnce(Bytes) + Send>;

/// Receives the transport error of a failed download.
pub type ErrorHandler = Box<dyn FnOnce(TransportError) + Send>;

/// Download-to-disk, then read-into-memory.
///
/// The transport streams the body to a staging file; once it finishes, the
/// file is read back (memory-mapped when large) and handed over as [`Bytes`].
/// Callbacks run on a transport worker thread.
///
/// # Missing error handler
///
/// A download that fails with no `on_error` supplied is a programming error.
/// Debug builds panic in the completion handler. [`Task::wait`] resumes the
/// panic on the caller; if the handle was dropped, the process aborts.
/// Release builds log the error and drop it.
///
/// # Missing data
///
/// A download that succeeds but leaves no readable bytes (no staging file,
/// an empty one, or one that cannot be read) emits a `warn` event and never
/// calls `on_data`. No error is raised.
pub trait ProvidesDownload {
    /// Build a suspended download task with the raw transport completion.
    fn download_task<S>(
        &self,
        session: &S,
        completion: impl for<'a> FnOnce(Option<&'a Path>, Option<Response>, Option<TransportError>)
        + Send
        + 'static,
    ) -> Task
    where
        S: Session + ?Sized;

    /// Build a suspended download task that delivers the staged bytes.
    fn download_data_task<S>(
        &self,
        session: &S,
        on_data: Option<DataAction>,
        on_error: Option<ErrorHandler>,
    ) -> Task
    where
        S: Session + ?Sized;

    /// Build a download task and start it immediately.
    ///
    /// The returned handle is already running; keep it to cancel or wait.
    fn get_download_data<S>(
        &self,
        session: &S,
        on_data: Option<DataAction>,
        on_error: Option<ErrorHandler>,
    ) -> Task
    where
        S: Session + ?Sized,
    {
        let mut task = self.download_data_task(session, on_data, on_error);
        task.resume();
        task
    }
}

impl ProvidesDownload for Url {
    fn download_task<S>(
        &self,
        session: &S,
        completion: impl for<'a> FnOnce(Option<&'a Path>, Option<Response>, Option<TransportError>)
        + Send
        + 'static,
    ) -> Task
    where
        S: Session + ?Sized,
    {
        session.download_task(self, Box::new(completion))
    }

    fn download_data_task<S>(
        &self,
        session: &S,
        on_data: Option<DataAction>,
        on_error: Option<ErrorHandler>,
    ) -> Task
    where
        S: Session + ?Sized,
    {
        let url = self.clone();
        self.download_task(session, move |location, _response, error| {
            deliver(&url, location, error, on_data, on_error);
        })
    }
}

fn deliver(
    url: &Url,
    location: Option<&Path>,
    error: Option<TransportError>,
    on_data: Option<DataAction>,
    on_error: Option<ErrorHandler>,
) {
    if let Some(error) = error {
        match on_error {
            Some(handler) => handler(error),
            None => missing_error_handler(url, &error),
        }
        return;
    }

    let Some(data) = location.and_then(|path| read_staged(url, path)) else {
        warn!(%url, "download produced no data");
        return;
    };

    if let Some(on_data) = on_data {
        on_data(data);
    }
}

fn missing_error_handler(url: &Url, error: &TransportError) {
    if cfg!(debug_assertions) {
        panic!("no error handler was supplied for {url}, but the download failed: {error}");
    }
    error!(%url, %error, "download failed and no error handler was supplied");
}

fn read_staged(url: &Url, path: &Path) -> Option<Bytes> {
    match callable_fs::read(path) {
        Ok(content) if content.is_empty() => None,
        Ok(content) => Some(content.into_bytes()),
        Err(err) => {
            warn!(%url, path = %path.display(), error = %err, "failed to read staged download");
            None
        }
    }
}
