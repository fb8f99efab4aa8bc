//! Decoding of baked frame assets.
//!
//! Two payload shapes are accepted:
//! - JSON nested arrays, `[frame][row][column]`.
//! - base64 of a bzip2-wrapped zlib stream of little-endian half floats,
//!   `rows × columns` values per frame, frames concatenated. A bare zlib
//!   stream without the bzip2 layer is accepted too.

use crate::constants::MAX_ASSET_FRAMES;
use crate::error::{FieldError, Result};
use crate::frames::FrameField;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bzip2::read::BzDecoder;
use flate2::read::ZlibDecoder;
use std::io::Read;

const BZIP2_MAGIC: &[u8] = b"BZh";

impl FrameField {
    /// Decode a payload, sniffing JSON by its leading `[`.
    pub fn decode(payload: &str, rows: usize, columns: usize) -> Result<Self> {
        let trimmed = payload.trim();
        if trimmed.is_empty() {
            return Ok(Self::empty());
        }
        if trimmed.starts_with('[') {
            decode_json(trimmed)
        } else {
            decode_packed(trimmed, rows, columns)
        }
    }

    /// Like [`FrameField::decode`], but a bad payload degrades to an empty
    /// field so the surface keeps its pointer and pulse effects.
    pub fn decode_or_empty(payload: &str, rows: usize, columns: usize) -> Self {
        match Self::decode(payload, rows, columns) {
            Ok(field) => field,
            Err(e) => {
                log::warn!("[asset] {e}; continuing without baked frames");
                Self::empty()
            }
        }
    }
}

fn decode_json(payload: &str) -> Result<FrameField> {
    let frames: Vec<Vec<Vec<f32>>> =
        serde_json::from_str(payload).map_err(|e| FieldError::asset(e.to_string()))?;
    FrameField::from_nested(frames)
}

fn decode_packed(payload: &str, rows: usize, columns: usize) -> Result<FrameField> {
    let compressed = STANDARD
        .decode(payload.as_bytes())
        .map_err(|e| FieldError::asset(format!("base64: {e}")))?;
    let limit = (rows * columns * 2 * MAX_ASSET_FRAMES) as u64;
    let bytes = if compressed.starts_with(BZIP2_MAGIC) {
        inflate(BzDecoder::new(compressed.as_slice()), limit)?
    } else {
        inflate(compressed.as_slice(), limit)?
    };
    if bytes.len() % 2 != 0 {
        return Err(FieldError::asset(format!(
            "odd byte count {} for half-float data",
            bytes.len()
        )));
    }
    let values = bytes
        .chunks_exact(2)
        .map(|b| f16_bits_to_f32(u16::from_le_bytes([b[0], b[1]])))
        .collect();
    FrameField::from_flat(rows, columns, values)
}

/// Inflate the zlib layer, refusing output past `limit` bytes.
fn inflate(source: impl Read, limit: u64) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    ZlibDecoder::new(source)
        .take(limit + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| FieldError::asset(format!("decompress: {e}")))?;
    if bytes.len() as u64 > limit {
        return Err(FieldError::asset(format!(
            "decompressed asset exceeds {MAX_ASSET_FRAMES} frames"
        )));
    }
    Ok(bytes)
}

/// IEEE 754 binary16 to f32.
pub fn f16_bits_to_f32(bits: u16) -> f32 {
    let sign = ((bits >> 15) & 0x1) as u32;
    let exp = ((bits >> 10) & 0x1f) as u32;
    let mant = (bits & 0x3ff) as u32;
    let out = match (exp, mant) {
        (0, 0) => sign << 31,
        (0, _) => {
            // subnormal: renormalize the mantissa
            let mut e: i32 = -14;
            let mut m = mant;
            while m & 0x400 == 0 {
                m <<= 1;
                e -= 1;
            }
            m &= 0x3ff;
            (sign << 31) | (((e + 127) as u32) << 23) | (m << 13)
        }
        (0x1f, 0) => (sign << 31) | 0x7f80_0000,
        (0x1f, _) => (sign << 31) | 0x7fc0_0000 | (mant << 13),
        _ => (sign << 31) | ((exp + 127 - 15) << 23) | (mant << 13),
    };
    f32::from_bits(out)
}
