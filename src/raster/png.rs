//! Minimal PNG encoder for truecolor canvases.
//!
//! Output layout (8-bit RGB, no palette, no alpha, no interlace):
//!
//! ```text
//! signature | IHDR | IDAT (zlib of filter-0 scanlines) | IEND
//! ```
//!
//! Every chunk is `length (BE u32) | tag | data | CRC-32(tag + data) (BE u32)`.

use super::canvas::Canvas;
use crate::utils::error::EncodeError;
use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};
use log::debug;
use std::io::Write;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_TRUECOLOR: u8 = 2;
const FILTER_NONE: u8 = 0;

/// PNG caps both dimensions at 2^31 - 1
const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Encode a canvas as a PNG byte stream
///
/// **Public** - main entry point for image output
///
/// # Errors
/// * `EncodeError::InvalidDimensions` - zero or oversized width/height
/// * `EncodeError::Io` - compressor failure
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (canvas.width(), canvas.height());
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let idat = compress_scanlines(canvas)?;

    let mut png = Vec::with_capacity(PNG_SIGNATURE.len() + idat.len() + 3 * 12 + 13);
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(width, height));
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    debug!("Encoded {}x{} PNG ({} bytes)", width, height, png.len());

    Ok(png)
}

/// IHDR payload: width, height, depth 8, truecolor, deflate, filter 0, no interlace
fn ihdr(width: u32, height: u32) -> [u8; 13] {
    let mut data = [0u8; 13];
    data[0..4].copy_from_slice(&width.to_be_bytes());
    data[4..8].copy_from_slice(&height.to_be_bytes());
    data[8] = BIT_DEPTH;
    data[9] = COLOR_TYPE_TRUECOLOR;
    // compression, filter, interlace stay 0
    data
}

/// Prefix each scanline with filter type 0 and zlib-compress the result
fn compress_scanlines(canvas: &Canvas) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());

    for y in 0..canvas.height() {
        encoder.write_all(&[FILTER_NONE])?;
        encoder.write_all(canvas.row(y))?;
    }

    Ok(encoder.finish()?)
}

/// Append one length-tag-data-CRC chunk
pub fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(data);
    out.extend_from_slice(&chunk_crc(tag, data).to_be_bytes());
}

/// CRC-32 over the chunk tag followed by its data
pub fn chunk_crc(tag: &[u8; 4], data: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(tag);
    crc.update(data);
    crc.sum()
}
