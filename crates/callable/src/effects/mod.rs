//! I/O: task handles, the transport seam, and the capabilities built on it.
//!
//! Everything that touches the network or the filesystem lives here, behind
//! the [`Session`] trait so tests can substitute a simulated transport.

mod callable;
mod download;
#[cfg(feature = "reqwest")]
mod http;
mod local;
mod session;
mod task;

pub use callable::Callable;
pub use download::{DataAction, ErrorHandler, ProvidesDownload};
#[cfg(feature = "reqwest")]
pub use http::ReqwestSession;
pub use local::LocalDecode;
pub use session::{DataCompletion, DownloadCompletion, Session};
pub use task::{Task, TaskState};
