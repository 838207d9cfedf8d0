//! Binary Image Loader.
//!
//! Reads a flat program image from disk into the native-endian 32-bit words
//! the core consumes. On-disk images are big-endian (the MIPS convention);
//! the conversion happens here so the core never sees file byte order.

use std::io;
use std::path::Path;

/// Reads a big-endian word image from `path`.
///
/// A trailing partial word (a file length that is not a multiple of four) is
/// ignored.
///
/// # Errors
///
/// Propagates any I/O error from reading the file.
pub fn load_image(path: &Path) -> io::Result<Vec<u32>> {
    let bytes = std::fs::read(path)?;
    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}
