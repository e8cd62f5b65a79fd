//! Whole-file local reads.
//!
//! Small files are read into memory; files at or above a size threshold are
//! memory-mapped when the platform allows it, and fall back to a plain read
//! when it does not. Size alone never makes a read fail.

mod content;
mod error;

pub use content::{Content, DEFAULT_MMAP_THRESHOLD, Options, read, read_with};
pub use error::{Error, Result, from_io};
