mod support;

use std::fs;

use inspector_core::{DownloadArtifact, PayloadEncoding};
use inspector_engine::{ensure_output_dir, save_artifact, AtomicFileWriter, PersistError};
use pretty_assertions::assert_eq;
use support::{png_bytes, PNG_1X1};

#[test]
fn base64_artifacts_are_written_as_binary() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = DownloadArtifact::build(
        "example.com",
        "png",
        "image/png",
        PayloadEncoding::Base64,
        PNG_1X1,
    );

    let path = save_artifact(dir.path(), &artifact).unwrap();
    assert_eq!(path, dir.path().join("example.com.png"));
    assert_eq!(fs::read(&path).unwrap(), png_bytes());
}

#[test]
fn utf8_artifacts_are_written_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = DownloadArtifact::build(
        "example.com",
        "txt",
        "text/plain",
        PayloadEncoding::Utf8,
        "héllo\nworld",
    );

    let path = save_artifact(dir.path(), &artifact).unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), "héllo\nworld");
}

#[test]
fn invalid_base64_payload_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let artifact =
        DownloadArtifact::build("x", "png", "image/png", PayloadEncoding::Base64, "@@@@");
    let err = save_artifact(dir.path(), &artifact).unwrap_err();
    assert!(matches!(err, PersistError::Payload(_)));
    assert!(!dir.path().join("x.png").exists());
}

#[test]
fn writer_replaces_existing_file_and_creates_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("artifacts").join("run1");
    let writer = AtomicFileWriter::new(nested.clone());

    writer.write("page.har", b"first").unwrap();
    let path = writer.write("page.har", b"second").unwrap();

    assert_eq!(fs::read(path).unwrap(), b"second");
    assert_eq!(fs::read_dir(&nested).unwrap().count(), 1);
}

#[test]
fn output_dir_must_be_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("not_a_dir");
    fs::write(&file, b"x").unwrap();

    assert!(matches!(
        ensure_output_dir(&file),
        Err(PersistError::OutputDir(_))
    ));
    assert!(ensure_output_dir(dir.path()).is_ok());
}
