//! Loader Tests.
//!
//! File-level behavior of `load_file`: disk round trips and the two error
//! cases. Line-level parsing rules live next to `parse` itself.

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use rv32sim_core::common::error::LoaderError;
use rv32sim_core::sim::loader;

fn write_image(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp image");
    file.write_all(contents.as_bytes()).expect("write temp image");
    file
}

#[test]
fn image_round_trips_through_disk() {
    let file = write_image(
        "0x0 0x00500093, addi x1, x0, 5\n\
         0x4 0xDEADBEEF, end\n\
         0x100 0x2A\n\
         0x101 0x7F\n",
    );

    let program = loader::load_file(file.path().to_str().unwrap_or_default())
        .expect("well-formed image must load");

    assert_eq!(program.entry, 0);
    assert_eq!(program.text.get(&0x0), Some(&0x0050_0093));
    assert_eq!(program.text.get(&0x4), Some(&0xDEAD_BEEF));
    assert_eq!(program.data.get(&0x100), Some(&0x2A));
    assert_eq!(program.data.get(&0x101), Some(&0x7F));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = loader::load_file("/nonexistent/image.mc").unwrap_err();
    match err {
        LoaderError::Io { path, .. } => assert_eq!(path, "/nonexistent/image.mc"),
        other => panic!("expected an Io error, got {other}"),
    }
}

#[test]
fn image_without_instructions_is_rejected() {
    let file = write_image("0x100 0x2A\n0x101 0x7F\n");
    let err = loader::load_file(file.path().to_str().unwrap_or_default()).unwrap_err();
    assert!(
        matches!(err, LoaderError::EmptyImage { .. }),
        "data-only image must be rejected, got {err}"
    );
}
