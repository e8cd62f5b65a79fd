//! Immutable data types: identifiers, response metadata, configuration.
//!
//! Nothing in this module performs I/O. Values are caller-owned and carry no
//! shared mutable state, so cloning an identifier yields an independent
//! instance.

pub mod config;
pub mod request;
pub mod resource;
pub mod response;
pub mod result;

pub use config::SessionConfig;
pub use request::{NO_URL, Request};
pub use resource::Resource;
pub use response::Response;
pub use result::FetchResult;
