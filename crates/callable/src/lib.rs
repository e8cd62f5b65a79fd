//! Uniform fetch, download-then-read, and local decode capabilities for
//! URLs and prepared requests.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable identifiers, response metadata and configuration
//! - [`core`](crate::core) - Pure transformations
//! - [`effects`] - I/O behind the [`Session`] trait
//!
//! # Capabilities
//!
//! - [`Callable`]: in-memory fetch with a `(payload, response, error)` callback,
//!   for [`url::Url`], [`Request`] and [`Resource`]
//! - [`ProvidesDownload`]: stage the body in a temporary file, then deliver it
//!   in memory, for [`url::Url`]
//! - [`LocalDecode`]: decode a local file straight into a typed value
//!
//! There is no retry, caching or scheduling here; transport concerns belong
//! to the [`Session`] implementation.
//!
//! # Example
//!
//! ```no_run
//! use callable::{Callable, ReqwestSession, ToUrl};
//!
//! let session = ReqwestSession::shared().unwrap();
//! let url = "https://example.com/index.json".url().unwrap();
//!
//! url.call(session, |data, response, error| {
//!     // Runs on a runtime worker thread.
//!     match (data, error) {
//!         (_, Some(error)) => eprintln!("fetch failed: {error}"),
//!         (Some(data), None) => println!("{} bytes from {:?}", data.len(), response.map(|r| r.status)),
//!         (None, None) => {}
//!     }
//! });
//! ```

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use crate::core::{ToUrl, parse};
pub use data::{FetchResult, NO_URL, Request, Resource, Response, SessionConfig};
pub use effects::{
    Callable, DataAction, DataCompletion, DownloadCompletion, ErrorHandler, LocalDecode,
    ProvidesDownload, Session, Task, TaskState,
};
#[cfg(feature = "reqwest")]
pub use effects::ReqwestSession;
pub use error::{ConfigError, Error, Result, TransportError};

pub use callable_codec as codec;
pub use url::Url;
