use std::collections::BTreeMap;

use callable::codec::JsonCodec;
use callable::{Error, LocalDecode, Url};
use serde::Deserialize;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct Manifest {
    name:     String,
    versions: Vec<String>,
}

fn write(dir: &TempDir, name: &str, contents: &[u8]) -> Url {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    Url::from_file_path(path).unwrap()
}

#[test]
fn test_valid_json_decodes() {
    let dir = TempDir::new().unwrap();
    let url = write(&dir, "manifest.json", br#"{"name":"node","versions":["18","20"]}"#);

    let manifest: Option<Manifest> = url.local_codable().unwrap();
    assert_eq!(
        manifest,
        Some(Manifest {
            name:     "node".into(),
            versions: vec!["18".into(), "20".into()],
        })
    );
}

#[test]
fn test_garbage_yields_none() {
    let dir = TempDir::new().unwrap();
    let url = write(&dir, "manifest.json", b"<html>not json</html>");

    assert_eq!(url.local_codable::<Manifest>().unwrap(), None);
}

#[test]
fn test_wrong_shape_yields_none() {
    let dir = TempDir::new().unwrap();
    let url = write(&dir, "manifest.json", br#"{"name":"node"}"#);

    assert_eq!(url.local_codable::<Manifest>().unwrap(), None);
}

#[test]
fn test_empty_file_yields_none() {
    let dir = TempDir::new().unwrap();
    let url = write(&dir, "empty.json", b"");

    assert_eq!(url.local_codable::<Manifest>().unwrap(), None);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let url = Url::from_file_path(dir.path().join("absent.json")).unwrap();

    let err = url.local_codable::<Manifest>().unwrap_err();
    assert!(matches!(err, Error::Fs(callable_fs::Error::NotFound(_))), "{err:?}");
}

#[test]
fn test_remote_url_is_rejected() {
    let url: Url = "https://example.com/manifest.json".parse().unwrap();
    assert!(matches!(url.local_bytes(), Err(Error::NotLocal(_))));
}

#[test]
fn test_call_local_codable_passes_none_on_garbage() {
    let dir = TempDir::new().unwrap();
    let url = write(&dir, "manifest.json", b"{ truncated");

    let mut calls = 0;
    url.call_local_codable(true, |manifest: Option<Manifest>| {
        calls += 1;
        assert!(manifest.is_none());
    })
    .unwrap();
    assert_eq!(calls, 1);
}

#[test]
fn test_local_codable_with_explicit_codec() {
    let dir = TempDir::new().unwrap();
    let url = write(&dir, "pins.json", br#"{"node":"20","python":"3.12"}"#);

    let pins: BTreeMap<String, String> = url.local_codable_with(&JsonCodec, false).unwrap().unwrap();
    assert_eq!(pins.get("python").map(String::as_str), Some("3.12"));
}

#[test]
fn test_local_bytes_reads_whole_file() {
    let dir = TempDir::new().unwrap();
    let payload = vec![7u8; 200 * 1024];
    let url = write(&dir, "blob.bin", &payload);

    let content = url.local_bytes().unwrap();
    assert_eq!(content.len(), payload.len());
    assert!(content.is_mapped());
}
