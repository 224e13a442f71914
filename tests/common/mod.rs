//! Shared test helpers for integration tests.

use std::io::Write as _;

use tempfile::NamedTempFile;

/// Writes `contents` to a named temporary file and returns the handle.
///
/// # Panics
///
/// Panics if the file cannot be created or written.
pub fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("should create temp source file");
    file.write_all(contents.as_bytes())
        .expect("should write temp source file");
    file.flush().expect("should flush temp source file");
    file
}
