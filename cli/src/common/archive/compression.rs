//! # Tarstats Compression Detection (`common::archive::compression`)
//!
//! File: cli/src/common/archive/compression.rs
//!
//! ## Overview
//!
//! Tar archives are frequently wrapped in a compression stream (`.tgz`,
//! `.tar.bz2`, `.tar.xz`, `.tar.zst`). This module sniffs the leading magic bytes of a
//! stream and wraps it in the matching decoder, so the tar reader always sees
//! an uncompressed byte stream. File extensions are ignored.
//!
//! | Format | Magic bytes            | Decoder                     |
//! |--------|------------------------|-----------------------------|
//! | gzip   | `1f 8b`                | `flate2::bufread::MultiGzDecoder` |
//! | bzip2  | `42 5a 68` (`BZh`)     | `bzip2::bufread::MultiBzDecoder` |
//! | xz     | `fd 37 7a 58 5a 00`    | `xz2::bufread::XzDecoder`   |
//! | zstd   | `28 b5 2f fd`          | `zstd::stream::read::Decoder` |
//!
//! Anything else is passed through unchanged. A stream with no bytes at all
//! is rejected as an empty file.
//!
use std::io::{self, BufRead, Read};
use tracing::debug;

const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];
const BZIP2_MAGIC: &[u8] = b"BZh";
const XZ_MAGIC: &[u8] = &[0xfd, 0x37, 0x7a, 0x58, 0x5a, 0x00];
const ZSTD_MAGIC: &[u8] = &[0x28, 0xb5, 0x2f, 0xfd];

/// Compression wrapper detected around a tar stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Bzip2,
    Xz,
    Zstd,
}

impl Compression {
    /// Identifies the compression format from the first bytes of a stream.
    pub fn detect(head: &[u8]) -> Self {
        if head.starts_with(GZIP_MAGIC) {
            Compression::Gzip
        } else if head.starts_with(BZIP2_MAGIC) {
            Compression::Bzip2
        } else if head.starts_with(XZ_MAGIC) {
            Compression::Xz
        } else if head.starts_with(ZSTD_MAGIC) {
            Compression::Zstd
        } else {
            Compression::None
        }
    }
}

/// Wraps `reader` in the decoder matching its leading bytes.
///
/// The magic bytes are peeked through the buffer without being consumed.
/// Fails with `UnexpectedEof` if the stream is empty.
pub fn decompressed<R>(mut reader: R) -> io::Result<Box<dyn Read>>
where
    R: BufRead + 'static,
{
    let head = reader.fill_buf()?;
    if head.is_empty() {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "empty file"));
    }
    let compression = Compression::detect(head);
    debug!("Detected compression: {:?}", compression);
    Ok(match compression {
        Compression::None => Box::new(reader),
        Compression::Gzip => Box::new(flate2::bufread::MultiGzDecoder::new(reader)),
        Compression::Bzip2 => Box::new(bzip2::bufread::MultiBzDecoder::new(reader)),
        Compression::Xz => Box::new(xz2::bufread::XzDecoder::new(reader)),
        Compression::Zstd => Box::new(zstd::stream::read::Decoder::with_buffer(reader)?),
    })
}
