//! Binary PPM (P6) image persistence.
//!
//! The on-disk format is the header `"P6\n<width> <height>\n255\n"`
//! followed by exactly `width * height * 3` raw RGB bytes, row-major from
//! the top row. The reader tolerates `#`-comment lines between the magic
//! and the dimensions, and rejects anything that is not an 8-bit P6 file.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::framebuffer::FrameBuffer;

/// Errors that can occur while encoding or decoding a PPM file.
#[derive(Error, Debug)]
pub enum PpmError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("not a PPM P6 file (found magic {0:?})")]
    BadMagic(String),

    #[error("invalid PPM header: {0}")]
    InvalidHeader(String),

    #[error("unsupported max value {0} (only 255 is supported)")]
    UnsupportedMaxValue(u32),

    #[error("truncated pixel data: expected {expected} bytes, got {got}")]
    Truncated { expected: usize, got: usize },
}

/// Result type for PPM operations.
pub type PpmResult<T> = Result<T, PpmError>;

/// Encode a framebuffer as binary P6 into any writer.
pub fn encode(fb: &FrameBuffer, w: &mut impl Write) -> PpmResult<()> {
    write!(w, "P6\n{} {}\n255\n", fb.width(), fb.height())?;
    w.write_all(fb.as_bytes())?;
    Ok(())
}

/// Decode a binary P6 image from any buffered reader.
pub fn decode(r: &mut impl BufRead) -> PpmResult<FrameBuffer> {
    let mut line = String::new();
    r.read_line(&mut line)?;
    let magic = line.trim_end();
    if magic != "P6" {
        return Err(PpmError::BadMagic(magic.chars().take(16).collect()));
    }

    // Header tokens: width, height, maxval. Comment lines may precede the
    // dimension line; tokens may be split across lines.
    let mut tokens: Vec<u32> = Vec::new();
    while tokens.len() < 3 {
        line.clear();
        if r.read_line(&mut line)? == 0 {
            return Err(PpmError::InvalidHeader("unexpected end of header".into()));
        }
        let text = line.trim();
        if text.starts_with('#') {
            continue;
        }
        for tok in text.split_whitespace() {
            let value = tok
                .parse::<u32>()
                .map_err(|_| PpmError::InvalidHeader(format!("bad token {tok:?}")))?;
            tokens.push(value);
        }
        if tokens.len() > 3 {
            return Err(PpmError::InvalidHeader("too many header fields".into()));
        }
    }

    let (width, height, max_value) = (tokens[0], tokens[1], tokens[2]);
    if max_value != 255 {
        return Err(PpmError::UnsupportedMaxValue(max_value));
    }

    let expected = width as usize * height as usize * 3;
    let mut bytes = vec![0u8; expected];
    let mut filled = 0;
    while filled < expected {
        let n = r.read(&mut bytes[filled..])?;
        if n == 0 {
            return Err(PpmError::Truncated {
                expected,
                got: filled,
            });
        }
        filled += n;
    }

    FrameBuffer::from_raw(width, height, bytes)
        .ok_or_else(|| PpmError::InvalidHeader("dimensions overflow the pixel payload".into()))
}

/// Write a framebuffer to a PPM file.
pub fn write_ppm(path: impl AsRef<Path>, fb: &FrameBuffer) -> PpmResult<()> {
    let mut w = BufWriter::new(File::create(path)?);
    encode(fb, &mut w)?;
    w.flush()?;
    Ok(())
}

/// Read a framebuffer from a PPM file.
pub fn read_ppm(path: impl AsRef<Path>) -> PpmResult<FrameBuffer> {
    let mut r = BufReader::new(File::open(path)?);
    decode(&mut r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use std::io::Cursor;

    fn test_image() -> FrameBuffer {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set(0, 0, Color::new(1.0, 0.0, 0.0));
        fb.set(1, 0, Color::new(0.0, 1.0, 0.0));
        fb.set(2, 0, Color::new(0.0, 0.0, 1.0));
        fb.set(0, 1, Color::splat(0.5));
        fb.set(2, 1, Color::ONE);
        fb
    }

    #[test]
    fn test_header_layout() {
        let mut out = Vec::new();
        encode(&test_image(), &mut out).unwrap();
        assert!(out.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(out.len(), "P6\n3 2\n255\n".len() + 3 * 2 * 3);
    }

    #[test]
    fn test_roundtrip_is_byte_identical() {
        let fb = test_image();
        let mut out = Vec::new();
        encode(&fb, &mut out).unwrap();
        let back = decode(&mut Cursor::new(out)).unwrap();
        assert_eq!(back.width(), fb.width());
        assert_eq!(back.height(), fb.height());
        assert_eq!(back.as_bytes(), fb.as_bytes());
    }

    #[test]
    fn test_comment_lines_are_skipped() {
        let mut data = b"P6\n# made by prism\n# second comment\n2 1\n255\n".to_vec();
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        let fb = decode(&mut Cursor::new(data)).unwrap();
        assert_eq!(fb.width(), 2);
        assert_eq!(fb.as_bytes(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_bad_magic() {
        let err = decode(&mut Cursor::new(b"P3\n1 1\n255\n".to_vec())).unwrap_err();
        assert!(matches!(err, PpmError::BadMagic(_)));
    }

    #[test]
    fn test_rejects_wide_max_value() {
        let err = decode(&mut Cursor::new(b"P6\n1 1\n65535\n".to_vec())).unwrap_err();
        assert!(matches!(err, PpmError::UnsupportedMaxValue(65535)));
    }

    #[test]
    fn test_truncated_payload() {
        let mut data = b"P6\n2 2\n255\n".to_vec();
        data.extend_from_slice(&[0; 5]); // needs 12 bytes
        let err = decode(&mut Cursor::new(data)).unwrap_err();
        assert!(matches!(
            err,
            PpmError::Truncated {
                expected: 12,
                got: 5
            }
        ));
    }

    #[test]
    fn test_garbage_header() {
        let err = decode(&mut Cursor::new(b"P6\nwide tall\n255\n".to_vec())).unwrap_err();
        assert!(matches!(err, PpmError::InvalidHeader(_)));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = std::env::temp_dir().join("prism_ppm_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("roundtrip.ppm");

        let fb = test_image();
        write_ppm(&path, &fb).unwrap();
        let back = read_ppm(&path).unwrap();
        assert_eq!(back.as_bytes(), fb.as_bytes());

        std::fs::remove_file(&path).unwrap();
    }
}
