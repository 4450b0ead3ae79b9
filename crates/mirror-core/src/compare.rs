//! Byte-for-byte file comparison
//!
//! Identity is decided by content only. Timestamps and permissions never
//! make two files "different"; a size mismatch short-circuits to unequal.

use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::{Error, Result};

const CHUNK_SIZE: usize = 64 * 1024;

/// Compare the contents of two regular files.
///
/// # Errors
///
/// Returns an error if either file cannot be opened or read.
pub fn files_identical(left: &Path, right: &Path) -> Result<bool> {
    let left_len = fs::metadata(left).map_err(|e| Error::io(left, e))?.len();
    let right_len = fs::metadata(right).map_err(|e| Error::io(right, e))?.len();
    if left_len != right_len {
        return Ok(false);
    }

    let mut left_file = File::open(left).map_err(|e| Error::io(left, e))?;
    let mut right_file = File::open(right).map_err(|e| Error::io(right, e))?;
    let mut left_buf = vec![0u8; CHUNK_SIZE];
    let mut right_buf = vec![0u8; CHUNK_SIZE];

    loop {
        let left_read = read_chunk(&mut left_file, &mut left_buf).map_err(|e| Error::io(left, e))?;
        let right_read =
            read_chunk(&mut right_file, &mut right_buf).map_err(|e| Error::io(right, e))?;

        if left_read != right_read || left_buf[..left_read] != right_buf[..right_read] {
            return Ok(false);
        }
        if left_read == 0 {
            return Ok(true);
        }
    }
}

/// Fill `buf` as far as the reader allows; short only at end of file.
fn read_chunk(reader: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
