//! Raw DEFLATE compression.
//!
//! No zlib or gzip container and no checksum: the AEAD tag already covers
//! integrity of the compressed bytes.

use std::io::Write;

use flate2::write::DeflateEncoder;
use flate2::{Decompress, FlushDecompress, Status};

pub use flate2::Compression;

use crate::error::{CodecError, Result};

/// Default ceiling on inflated plaintext size.
pub const DEFAULT_MAX_INFLATED_LEN: usize = 64 * 1024;

const INFLATE_CHUNK: usize = 4 * 1024;

/// Compress bytes with raw DEFLATE.
pub fn compress(data: &[u8], level: Compression) -> Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::with_capacity(data.len() / 2 + 16), level);
    encoder
        .write_all(data)
        .map_err(|e| CodecError::Compression(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| CodecError::Compression(e.to_string()))
}

/// Inflate raw DEFLATE bytes, refusing output larger than `max_len`.
///
/// The stream must reach its final block: corrupted, truncated or oversized
/// input is a `Decompression` error.
pub fn decompress(data: &[u8], max_len: usize) -> Result<Vec<u8>> {
    let mut inflater = Decompress::new(false);
    let initial = data.len().saturating_mul(4).min(max_len);
    let mut inflated = Vec::with_capacity(initial.saturating_add(1));

    loop {
        if inflated.len() == inflated.capacity() {
            inflated.reserve(INFLATE_CHUNK);
        }

        let consumed = inflater.total_in();
        let produced = inflater.total_out();
        let input = data.get(consumed as usize..).unwrap_or_default();

        let status = inflater
            .decompress_vec(input, &mut inflated, FlushDecompress::None)
            .map_err(|e| CodecError::Decompression(e.to_string()))?;

        if inflated.len() > max_len {
            return Err(CodecError::Decompression(format!(
                "inflated payload exceeds {max_len} bytes"
            )));
        }

        match status {
            Status::StreamEnd => return Ok(inflated),
            Status::Ok | Status::BufError => {
                let stalled =
                    inflater.total_in() == consumed && inflater.total_out() == produced;
                if stalled && inflated.len() < inflated.capacity() {
                    return Err(CodecError::Decompression(
                        "truncated deflate stream".to_string(),
                    ));
                }
            }
        }
    }
}
