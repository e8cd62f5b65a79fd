use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use futures_util::TryStreamExt;
use http::StatusCode;
use http::header::{CONTENT_LENGTH, HeaderMap, HeaderValue};
use once_cell::sync::OnceCell;
use tempfile::TempPath;
use tokio::io::AsyncWriteExt;
use tokio::runtime::{Handle, Runtime};
use tracing::debug;
use url::Url;

use crate::core::{Scheme, classify, status_error};
use crate::data::{Request, Response, SessionConfig};
use crate::effects::session::{DataCompletion, DownloadCompletion, Session};
use crate::effects::task::Task;
use crate::error::{ConfigError, TransportError};

type Outcome<T> = (Option<T>, Option<Response>, Option<TransportError>);

static SHARED_RUNTIME: OnceCell<Runtime> = OnceCell::new();
static SHARED_SESSION: OnceCell<ReqwestSession> = OnceCell::new();

/// Production [`Session`] backed by `reqwest`.
///
/// `http` and `https` locations go over the network; `file` locations are
/// served from the local filesystem. Any other scheme completes with
/// [`TransportError::UnsupportedScheme`].
#[derive(Debug, Clone)]
pub struct ReqwestSession {
    client:  reqwest::Client,
    runtime: Handle,
    config:  Arc<SessionConfig>,
}

impl ReqwestSession {
    /// Create a session that spawns its tasks on the current tokio runtime.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let runtime = Handle::try_current().map_err(|_| ConfigError::NoRuntime)?;
        Self::with_runtime(config, runtime)
    }

    pub fn with_runtime(config: SessionConfig, runtime: Handle) -> Result<Self, ConfigError> {
        Ok(Self {
            client: build_client(&config)?,
            runtime,
            config: Arc::new(config),
        })
    }

    /// The process-wide session with default configuration.
    ///
    /// Backed by a dedicated multi-threaded runtime, so it can be used from
    /// synchronous code.
    pub fn shared() -> Result<&'static ReqwestSession, ConfigError> {
        SHARED_SESSION.get_or_try_init(|| {
            let runtime = SHARED_RUNTIME.get_or_try_init(|| {
                tokio::runtime::Builder::new_multi_thread()
                    .thread_name("callable-worker")
                    .enable_all()
                    .build()
                    .map_err(ConfigError::Runtime)
            })?;
            Self::with_runtime(SessionConfig::default(), runtime.handle().clone())
        })
    }

    pub fn config(&self) -> &SessionConfig { &self.config }
}

impl Session for ReqwestSession {
    fn data_task(&self, request: &Request, completion: DataCompletion) -> Task {
        let work = fetch_data(
            self.client.clone(),
            request.clone(),
            self.config.error_for_status,
        );
        Task::new(self.runtime.clone(), work, move |outcome| {
            let (data, response, error) = outcome.unwrap_or_else(cancelled);
            completion(data, response, error);
        })
    }

    fn download_task(&self, url: &Url, completion: DownloadCompletion) -> Task {
        let work = download(
            self.client.clone(),
            url.clone(),
            self.config.error_for_status,
            self.config.staging_dir(),
        );
        Task::new(self.runtime.clone(), work, move |outcome| {
            let (staged, response, error) = outcome.unwrap_or_else(cancelled);
            completion(staged.as_deref(), response, error);
        })
    }
}

fn build_client(config: &SessionConfig) -> Result<reqwest::Client, ConfigError> {
    let mut builder = reqwest::Client::builder().default_headers(config.header_map()?);
    if let Some(timeout) = config.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(ref user_agent) = config.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }
    builder.build().map_err(|e| ConfigError::Client(e.to_string()))
}

fn cancelled<T>() -> Outcome<T> { (None, None, Some(TransportError::Cancelled)) }

fn network(err: reqwest::Error) -> TransportError { TransportError::Network(err.to_string()) }

fn response_of(response: &reqwest::Response) -> Response {
    Response::new(response.url().clone(), response.status()).with_headers(response.headers().clone())
}

fn file_response(url: Url, len: u64) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_LENGTH, HeaderValue::from(len));
    Response::new(url, StatusCode::OK).with_headers(headers)
}

async fn fetch_data(client: reqwest::Client, request: Request, error_for_status: bool) -> Outcome<Bytes> {
    let Some(url) = request.url().cloned() else {
        return (None, None, Some(TransportError::MissingUrl));
    };

    match classify(&url) {
        Scheme::Http => {}
        Scheme::File(path) => {
            return match tokio::fs::read(&path).await {
                Ok(data) => {
                    let response = file_response(url, data.len() as u64);
                    (Some(Bytes::from(data)), Some(response), None)
                }
                Err(err) => (None, None, Some(err.into())),
            };
        }
        Scheme::Other(scheme) => return (None, None, Some(TransportError::UnsupportedScheme(scheme))),
    }

    let mut builder = client
        .request(request.method().clone(), url.clone())
        .headers(request.headers().clone());
    if let Some(body) = request.body() {
        builder = builder.body(body.clone());
    }

    let response = match builder.send().await {
        Ok(response) => response,
        Err(err) => return (None, None, Some(network(err))),
    };
    let meta = response_of(&response);
    let status = status_error(&meta.url, meta.status, error_for_status);

    match response.bytes().await {
        Ok(body) => {
            debug!(%url, status = %meta.status, bytes = body.len(), "data task finished");
            (Some(body), Some(meta), status)
        }
        Err(err) => (None, Some(meta), Some(network(err))),
    }
}

async fn download(
    client: reqwest::Client,
    url: Url,
    error_for_status: bool,
    staging_dir: PathBuf,
) -> Outcome<TempPath> {
    match classify(&url) {
        Scheme::Http => {}
        Scheme::File(source) => {
            return match copy_to_staging(&source, &staging_dir).await {
                Ok((staged, len)) => (Some(staged), Some(file_response(url, len)), None),
                Err(err) => (None, None, Some(err)),
            };
        }
        Scheme::Other(scheme) => return (None, None, Some(TransportError::UnsupportedScheme(scheme))),
    }

    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(err) => return (None, None, Some(network(err))),
    };
    let meta = response_of(&response);
    if let Some(err) = status_error(&meta.url, meta.status, error_for_status) {
        return (None, Some(meta), Some(err));
    }

    match stream_to_staging(response, &staging_dir).await {
        Ok((staged, len)) => {
            debug!(%url, status = %meta.status, bytes = len, "download staged");
            (Some(staged), Some(meta), None)
        }
        Err(err) => (None, Some(meta), Some(err)),
    }
}

fn staging_file(dir: &Path) -> Result<tempfile::NamedTempFile, TransportError> {
    Ok(tempfile::Builder::new()
        .prefix(".callable-")
        .suffix(".download")
        .tempfile_in(dir)?)
}

async fn stream_to_staging(
    response: reqwest::Response,
    staging_dir: &Path,
) -> Result<(TempPath, u64), TransportError> {
    let (file, path) = staging_file(staging_dir)?.into_parts();
    let mut file = tokio::fs::File::from_std(file);
    let mut stream = std::pin::pin!(response.bytes_stream());
    let mut written = 0u64;

    while let Some(chunk) = stream.try_next().await.map_err(network)? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    file.flush().await?;
    file.sync_all().await?;
    Ok((path, written))
}

async fn copy_to_staging(source: &Path, staging_dir: &Path) -> Result<(TempPath, u64), TransportError> {
    let path = staging_file(staging_dir)?.into_temp_path();
    let len = tokio::fs::copy(source, &path).await?;
    Ok((path, len))
}
