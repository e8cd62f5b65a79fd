use std::path::PathBuf;

use url::Url;

/// Where a location's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scheme {
    Http,
    File(PathBuf),
    Other(String),
}

pub fn classify(url: &Url) -> Scheme {
    match url.scheme() {
        "http" | "https" => Scheme::Http,
        "file" => match url.to_file_path() {
            Ok(path) => Scheme::File(path),
            Err(()) => Scheme::Other("file".to_string()),
        },
        other => Scheme::Other(other.to_string()),
    }
}

/// The local path a location resolves to, if it is a local file URL.
pub fn local_path(url: &Url) -> Option<PathBuf> {
    match classify(url) {
        Scheme::File(path) => Some(path),
        _ => None,
    }
}
