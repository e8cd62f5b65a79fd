//! A simulated transport for exercising the capabilities without a network.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::Bytes;
use callable::{DataCompletion, DownloadCompletion, Request, Response, Session, Task, TransportError, Url};
use http::StatusCode;
use tokio::runtime::Handle;

/// What the simulated download leaves behind.
#[derive(Debug, Clone)]
pub enum Staged {
    /// No location is reported.
    Nothing,
    /// A location is reported but no file exists there.
    Missing,
    /// A staging file with these contents.
    File(Vec<u8>),
}

#[derive(Debug, Clone)]
pub struct MockSession {
    pub payload: Option<Bytes>,
    pub status:  StatusCode,
    pub error:   Option<String>,
    pub staged:  Staged,
    /// Never finish, so cancellation can be observed.
    pub hang:    bool,
    pub calls:   Arc<AtomicUsize>,
}

impl Default for MockSession {
    fn default() -> Self {
        Self {
            payload: None,
            status:  StatusCode::OK,
            error:   None,
            staged:  Staged::Nothing,
            hang:    false,
            calls:   Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl MockSession {
    pub fn payload(data: &'static [u8]) -> Self {
        Self {
            payload: Some(Bytes::from_static(data)),
            ..Self::default()
        }
    }

    pub fn staged(data: &[u8]) -> Self {
        Self {
            staged: Staged::File(data.to_vec()),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

    fn response(&self, url: Option<&Url>) -> Option<Response> {
        url.map(|url| Response::new(url.clone(), self.status))
    }

    async fn settle(hang: bool) {
        if hang {
            futures_util::future::pending::<()>().await;
        }
    }
}

impl Session for MockSession {
    fn data_task(&self, request: &Request, completion: DataCompletion) -> Task {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let payload = self.payload.clone();
        let response = self.response(request.url());
        let error = self.error.clone().map(TransportError::Network);
        let hang = self.hang;

        let work = async move {
            Self::settle(hang).await;
            (payload, response, error)
        };
        Task::new(Handle::current(), work, move |outcome| {
            let (data, response, error) =
                outcome.unwrap_or((None, None, Some(TransportError::Cancelled)));
            completion(data, response, error);
        })
    }

    fn download_task(&self, url: &Url, completion: DownloadCompletion) -> Task {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let response = self.response(Some(url));
        let error = self.error.clone().map(TransportError::Network);
        let staged = self.staged.clone();
        let hang = self.hang;

        let work = async move {
            Self::settle(hang).await;
            let location = match staged {
                Staged::Nothing => None,
                Staged::Missing => Some(Location::Path(
                    std::env::temp_dir().join("callable-mock-never-written"),
                )),
                Staged::File(data) => {
                    let mut file = tempfile::NamedTempFile::new().unwrap();
                    file.write_all(&data).unwrap();
                    Some(Location::Temp(file.into_temp_path()))
                }
            };
            (location, response, error)
        };
        Task::new(Handle::current(), work, move |outcome| {
            let (location, response, error) =
                outcome.unwrap_or((None, None, Some(TransportError::Cancelled)));
            completion(location.as_ref().map(Location::path), response, error);
        })
    }
}

enum Location {
    Path(PathBuf),
    Temp(tempfile::TempPath),
}

impl Location {
    fn path(&self) -> &std::path::Path {
        match self {
            Location::Path(path) => path,
            Location::Temp(path) => path,
        }
    }
}
