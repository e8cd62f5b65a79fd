//! Pure transformations: parsing, scheme classification, status policy.

mod location;
mod parse;
mod status;

pub use location::{Scheme, classify, local_path};
pub use parse::{ToUrl, parse};
pub use status::status_error;
