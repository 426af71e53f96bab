use std::path::Path;

use crate::{
    error::{FlovizError, FlovizResult},
    model::{FlowField, FlowVector},
};

/// Middlebury `.flo` header tag: the bytes "PIEH" read as a little-endian u32.
///
/// <http://vision.middlebury.edu/flow/>
pub const TAG: u32 = 0x4845_4950;

const HEADER_LEN: usize = 12;

/// Read and decode a `.flo` file.
///
/// Either fully succeeds or fails without constructing anything, so a caller
/// holding a previously loaded field keeps it intact on failure.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>) -> FlovizResult<FlowField> {
    let bytes = std::fs::read(path)?;
    decode_bytes(&bytes)
}

/// Decode a `.flo` byte stream into a [`FlowField`].
///
/// Layout: u32 tag, u32 width, u32 height, then `width*height` little-endian
/// `(dx, dy)` f32 pairs in row-major order. Bytes past the declared payload
/// are ignored.
pub fn decode_bytes(bytes: &[u8]) -> FlovizResult<FlowField> {
    let tag = read_u32(bytes, 0)?;
    if tag != TAG {
        return Err(FlovizError::BadTag(tag));
    }

    let width = read_u32(bytes, 4)?;
    let height = read_u32(bytes, 8)?;
    if width == 0 || height == 0 {
        return Err(FlovizError::format(format!(
            "invalid dimensions {width}x{height}, both must be > 0"
        )));
    }

    let pixels = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| FlovizError::format("width*height overflows"))?;
    let expected = pixels
        .checked_mul(8)
        .ok_or_else(|| FlovizError::format("payload size overflows"))?;

    let payload = &bytes[HEADER_LEN..];
    if payload.len() < expected {
        return Err(FlovizError::Truncated {
            expected,
            actual: payload.len(),
        });
    }

    let mut vectors = Vec::with_capacity(pixels);
    for pair in payload[..expected].chunks_exact(8) {
        let dx = f32::from_le_bytes([pair[0], pair[1], pair[2], pair[3]]);
        let dy = f32::from_le_bytes([pair[4], pair[5], pair[6], pair[7]]);
        vectors.push(FlowVector::new(dx, dy));
    }

    tracing::debug!(width, height, "decoded flow field");
    FlowField::new(width, height, vectors)
}

fn read_u32(bytes: &[u8], offset: usize) -> FlovizResult<u32> {
    let end = offset + 4;
    if bytes.len() < end {
        return Err(FlovizError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("header needs {end} bytes, file has {}", bytes.len()),
        )));
    }
    Ok(u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flo_bytes(width: u32, height: u32, vectors: &[(f32, f32)]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&TAG.to_le_bytes());
        out.extend_from_slice(&width.to_le_bytes());
        out.extend_from_slice(&height.to_le_bytes());
        for &(dx, dy) in vectors {
            out.extend_from_slice(&dx.to_le_bytes());
            out.extend_from_slice(&dy.to_le_bytes());
        }
        out
    }

    #[test]
    fn decodes_row_major_pairs() {
        let bytes = flo_bytes(2, 1, &[(1.0, -2.0), (3.5, 0.25)]);
        let field = decode_bytes(&bytes).unwrap();
        assert_eq!(field.width(), 2);
        assert_eq!(field.height(), 1);
        assert_eq!(field.get(0, 0), FlowVector::new(1.0, -2.0));
        assert_eq!(field.get(1, 0), FlowVector::new(3.5, 0.25));
    }

    #[test]
    fn rejects_bad_tag() {
        let mut bytes = flo_bytes(1, 1, &[(0.0, 0.0)]);
        bytes[0] = b'X';
        match decode_bytes(&bytes) {
            Err(FlovizError::BadTag(_)) => {}
            other => panic!("expected BadTag, got {other:?}"),
        }
    }

    #[test]
    fn rejects_short_header() {
        let bytes = flo_bytes(1, 1, &[(0.0, 0.0)]);
        assert!(matches!(
            decode_bytes(&bytes[..3]),
            Err(FlovizError::Io(_))
        ));
        assert!(matches!(
            decode_bytes(&bytes[..10]),
            Err(FlovizError::Io(_))
        ));
    }

    #[test]
    fn rejects_truncated_payload() {
        // Declares 10x10 (800 payload bytes) but carries half of that.
        let mut bytes = flo_bytes(10, 10, &[]);
        bytes.extend_from_slice(&[0u8; 400]);
        match decode_bytes(&bytes) {
            Err(FlovizError::Truncated { expected, actual }) => {
                assert_eq!(expected, 800);
                assert_eq!(actual, 400);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_dimensions() {
        let bytes = flo_bytes(0, 4, &[]);
        assert!(matches!(decode_bytes(&bytes), Err(FlovizError::Format(_))));
    }

    #[test]
    fn ignores_trailing_bytes() {
        let mut bytes = flo_bytes(1, 1, &[(1.0, 2.0)]);
        bytes.extend_from_slice(&[0xAB; 16]);
        let field = decode_bytes(&bytes).unwrap();
        assert_eq!(field.get(0, 0), FlowVector::new(1.0, 2.0));
    }
}
