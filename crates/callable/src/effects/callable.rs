use std::future::Future;

use bytes::Bytes;
use tokio::sync::oneshot;
use url::Url;

use crate::data::{FetchResult, Request, Resource, Response};
use crate::effects::session::Session;
use crate::effects::task::Task;
use crate::error::TransportError;

/// The in-memory fetch capability, shared by every identifier kind.
///
/// Completion handlers run on a transport worker thread, not the caller's.
/// Hand off explicitly before doing work that must stay on one thread.
pub trait Callable {
    /// Build a suspended fetch task.
    ///
    /// Nothing is sent until the returned task is resumed. Once started,
    /// `on_complete` is called exactly once; transport failures, including
    /// cancellation, arrive only in its error slot.
    fn data_task<S>(
        &self,
        session: &S,
        on_complete: impl FnOnce(Option<Bytes>, Option<Response>, Option<TransportError>)
        + Send
        + 'static,
    ) -> Task
    where
        S: Session + ?Sized;

    /// Build a fetch task and start it immediately.
    fn call<S>(
        &self,
        session: &S,
        on_complete: impl FnOnce(Option<Bytes>, Option<Response>, Option<TransportError>)
        + Send
        + 'static,
    ) -> Task
    where
        S: Session + ?Sized,
    {
        let mut task = self.data_task(session, on_complete);
        task.resume();
        task
    }

    /// Start a fetch and resolve with its result.
    ///
    /// The task is detached; if the transport goes away before completing,
    /// the result reports cancellation.
    fn fetch<S>(&self, session: &S) -> impl Future<Output = FetchResult> + Send + 'static
    where
        S: Session + ?Sized,
    {
        let (tx, rx) = oneshot::channel();
        self.call(session, move |data, response, error| {
            let _ = tx.send(FetchResult::new(data, response, error));
        });
        async move { rx.await.unwrap_or_else(|_| FetchResult::cancelled()) }
    }
}

impl Callable for Request {
    fn data_task<S>(
        &self,
        session: &S,
        on_complete: impl FnOnce(Option<Bytes>, Option<Response>, Option<TransportError>)
        + Send
        + 'static,
    ) -> Task
    where
        S: Session + ?Sized,
    {
        session.data_task(self, Box::new(on_complete))
    }
}

impl Callable for Url {
    fn data_task<S>(
        &self,
        session: &S,
        on_complete: impl FnOnce(Option<Bytes>, Option<Response>, Option<TransportError>)
        + Send
        + 'static,
    ) -> Task
    where
        S: Session + ?Sized,
    {
        session.data_task(&Request::new(self.clone()), Box::new(on_complete))
    }
}

impl Callable for Resource {
    fn data_task<S>(
        &self,
        session: &S,
        on_complete: impl FnOnce(Option<Bytes>, Option<Response>, Option<TransportError>)
        + Send
        + 'static,
    ) -> Task
    where
        S: Session + ?Sized,
    {
        session.data_task(&self.to_request(), Box::new(on_complete))
    }
}
