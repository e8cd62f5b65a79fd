use crate::error::from_io;
use crate::Result;
use bytes::Bytes;
use std::fs::File;
use std::ops::Deref;
use std::path::Path;

pub const DEFAULT_MMAP_THRESHOLD: u64 = 64 * 1024;

#[derive(Clone, Copy, Debug)]
pub struct Options {
    mmap_threshold: u64,
}

impl Default for Options {
    fn default() -> Self { Self::new() }
}

impl Options {
    pub fn new() -> Self {
        Self {
            mmap_threshold: DEFAULT_MMAP_THRESHOLD,
        }
    }

    /// Files of at least `bytes` are memory-mapped. `u64::MAX` disables mapping.
    pub fn with_mmap_threshold(mut self, bytes: u64) -> Self {
        self.mmap_threshold = bytes;
        self
    }

    pub fn mmap_threshold(&self) -> u64 { self.mmap_threshold }
}

/// Full contents of a local file, either owned or mapped.
pub enum Content {
    Small(Vec<u8>),
    Mmap(memmap2::Mmap),
}

impl Content {
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Content::Small(data) => data.as_slice(),
            Content::Mmap(mmap) => mmap.as_ref(),
        }
    }

    pub fn into_bytes(self) -> Bytes {
        match self {
            Content::Small(data) => Bytes::from(data),
            Content::Mmap(mmap) => Bytes::from_owner(mmap),
        }
    }

    pub fn is_mapped(&self) -> bool { matches!(self, Content::Mmap(_)) }
}

impl Deref for Content {
    type Target = [u8];

    fn deref(&self) -> &[u8] { self.as_slice() }
}

impl AsRef<[u8]> for Content {
    fn as_ref(&self) -> &[u8] { self.as_slice() }
}

impl std::fmt::Debug for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Content")
            .field("len", &self.len())
            .field("mapped", &self.is_mapped())
            .finish()
    }
}

pub fn read(path: impl AsRef<Path>) -> Result<Content> { read_with(path, Options::default()) }

pub fn read_with(path: impl AsRef<Path>, options: Options) -> Result<Content> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| from_io(path, e))?;
    let metadata = file.metadata().map_err(|e| from_io(path, e))?;

    if metadata.is_dir() {
        return Err(crate::Error::IsDirectory(path.to_path_buf()));
    }

    let size = metadata.len();
    if metadata.is_file() && size > 0 && size >= options.mmap_threshold() {
        // SAFETY: the map is read-only; truncation by another process while
        // mapped is outside what this crate can guard against.
        if let Ok(mmap) = unsafe { memmap2::MmapOptions::new().map(&file) } {
            return Ok(Content::Mmap(mmap));
        }
    }

    std::fs::read(path)
        .map(Content::Small)
        .map_err(|e| from_io(path, e))
}
