//! Path-or-stdio resolution.
//!
//! The path `=` denotes the process's standard input or output stream
//! instead of a named file. Pipes only support strictly sequential
//! whole-grid transfers; operations needing random access or a byte-size
//! inquiry must reject them with `UnsupportedStream`.
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Special path token selecting the process stdio stream.
pub const STDIO_TOKEN: &str = "=";

pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_TOKEN
}

/// Opens `path` for reading, or locks stdin for the `=` token.
pub fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdin().lock()));
    }
    match File::open(path) {
        Ok(f) => Ok(Box::new(f)),
        Err(source) => Err(Error::OpenFailed { path: path.to_path_buf(), source }),
    }
}

/// Creates (truncates) `path` for writing, or locks stdout for `=`.
pub fn create_output(path: &Path) -> Result<Box<dyn Write>> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdout().lock()));
    }
    match File::create(path) {
        Ok(f) => Ok(Box::new(f)),
        Err(source) => Err(Error::CreateFailed { path: path.to_path_buf(), source }),
    }
}

/// Opens `path` for update-in-place if it exists, else creates it.
/// Always a real file; callers reject the stdio token beforehand.
pub fn open_update(path: &Path) -> Result<File> {
    if let Ok(f) = OpenOptions::new().read(true).write(true).open(path) {
        return Ok(f);
    }
    File::create(path).map_err(|source| Error::CreateFailed { path: path.to_path_buf(), source })
}
